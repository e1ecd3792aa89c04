//! `index settings` - read, update and reset index settings.
//!
//! Every subcommand takes an optional resource name before the index uid:
//! `index settings get movies` shows everything, `index settings get
//! stop-words movies` shows one resource.

use std::io::Write;

use clap::{Args, Subcommand};
use meilishell_client::SettingsResource;
use serde_json::Value;

use super::required;
use crate::console::Console;
use crate::error::{CommandError, Result};
use crate::output::{format_setting, format_settings, format_task_info};
use crate::session::Session;

#[derive(Args, Debug)]
pub struct SettingsArgs {
    #[command(subcommand)]
    pub command: SettingsCommand,
}

#[derive(Subcommand, Debug)]
pub enum SettingsCommand {
    /// Show all settings or one resource
    Get {
        /// [RESOURCE] INDEX_UID
        #[arg(value_name = "ARGS")]
        target: Vec<String>,
    },

    /// Reset all settings or one resource to the defaults
    Reset {
        /// [RESOURCE] INDEX_UID
        #[arg(value_name = "ARGS")]
        target: Vec<String>,
    },

    /// Update settings from a JSON value
    Update {
        /// [RESOURCE] INDEX_UID JSON
        #[arg(value_name = "ARGS", allow_hyphen_values = true)]
        target: Vec<String>,
    },
}

/// Parsed `[resource] uid` target.
#[derive(Debug, PartialEq)]
struct Target {
    resource: Option<SettingsResource>,
    uid: String,
}

pub async fn run<W: Write>(
    args: SettingsArgs,
    session: &Session,
    console: &mut Console<W>,
) -> Result<()> {
    match args.command {
        SettingsCommand::Get { target } => {
            let target = parse_target(&target, "get")?;
            let settings = session.client().settings(target.uid);
            match target.resource {
                Some(resource) => {
                    let value = settings.get_resource(resource).await?;
                    console.block(&format_setting(resource, &value))?;
                }
                None => {
                    let all = settings.get().await?;
                    console.block(&format_settings(&all))?;
                }
            }
        }
        SettingsCommand::Reset { target } => {
            let target = parse_target(&target, "reset")?;
            let settings = session.client().settings(target.uid);
            let info = match target.resource {
                Some(resource) => settings.reset_resource(resource).await?,
                None => settings.reset().await?,
            };
            console.block(&format_task_info(&info))?;
        }
        SettingsCommand::Update { mut target } => {
            let raw = match target.pop() {
                Some(raw) if !target.is_empty() => raw,
                _ => return Err(CommandError::usage(usage("update"))),
            };
            let target = parse_target(&target, "update")?;
            let value = parse_value(&raw)?;
            let settings = session.client().settings(target.uid);
            let info = match target.resource {
                Some(resource) => settings.update_resource(resource, &value).await?,
                None => {
                    if !value.is_object() {
                        return Err(CommandError::parse(
                            "settings",
                            raw,
                            "expected a JSON object",
                        ));
                    }
                    settings.update(&value).await?
                }
            };
            console.block(&format_task_info(&info))?;
        }
    }
    Ok(())
}

fn usage(action: &str) -> String {
    if action == "update" {
        "index uid and value are required 'index settings update [resource] {uid} {json}'"
            .to_string()
    } else {
        format!(
            "index uid is required 'index settings {} [resource] {{uid}}'",
            action
        )
    }
}

fn parse_target(words: &[String], action: &str) -> Result<Target> {
    let (resource, uid) = match words {
        [uid] => (None, uid),
        [resource, uid] => {
            let resource = resource
                .parse::<SettingsResource>()
                .map_err(CommandError::Usage)?;
            (Some(resource), uid)
        }
        _ => return Err(CommandError::usage(usage(action))),
    };
    let uid = required(Some(uid.clone()), &usage(action))?;
    Ok(Target { resource, uid })
}

/// Parse a settings value. A bare word that is not JSON is taken as a string
/// so `distinct-attribute movies id` works without quoting.
fn parse_value(raw: &str) -> Result<Value> {
    match serde_json::from_str(raw) {
        Ok(value) => Ok(value),
        Err(_) if is_bare_word(raw) => Ok(Value::String(raw.to_string())),
        Err(e) => Err(CommandError::parse("JSON value", raw, e)),
    }
}

fn is_bare_word(raw: &str) -> bool {
    !raw.is_empty()
        && raw
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.'))
}
