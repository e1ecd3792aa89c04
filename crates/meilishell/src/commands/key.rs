//! Key command - API key management.

use std::io::Write;

use chrono::{DateTime, SecondsFormat, Utc};
use clap::{Args, Subcommand};
use meilishell_client::{CreateKeyRequest, ListKeysQuery, UpdateKeyRequest};

use super::required;
use crate::console::Console;
use crate::error::{CommandError, Result};
use crate::output::format_key;
use crate::session::Session;

/// Arguments for the key command.
#[derive(Args, Debug)]
pub struct KeyArgs {
    #[command(subcommand)]
    pub command: KeyCommand,
}

#[derive(Subcommand, Debug)]
pub enum KeyCommand {
    /// Create an API key
    Create(CreateKeyArgs),

    /// List API keys
    List {
        /// Maximum number of keys to return
        #[arg(long)]
        limit: Option<u32>,

        /// Number of keys to skip
        #[arg(long)]
        offset: Option<u32>,
    },

    /// Show one API key
    Get {
        /// Key value or key UID
        key: Option<String>,
    },

    /// Change the name or description of an API key
    Update {
        /// Key value or key UID
        key: Option<String>,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        description: Option<String>,
    },

    /// Delete an API key
    Delete {
        /// Key value or key UID
        key: Option<String>,
    },
}

#[derive(Args, Debug)]
pub struct CreateKeyArgs {
    /// Permitted actions, comma separated; `*` allows everything
    #[arg(long, value_delimiter = ',')]
    pub actions: Vec<String>,

    /// Accessible indexes, comma separated; `*` allows every index
    #[arg(long, value_delimiter = ',')]
    pub indexes: Vec<String>,

    /// Expiry date in RFC 3339 format, e.g. 2030-01-01T00:00:00Z
    #[arg(long)]
    pub expire_at: Option<String>,

    /// Key UID (UUID v4); generated by the server when omitted
    #[arg(long)]
    pub uid: Option<String>,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub description: Option<String>,
}

pub async fn run<W: Write>(
    args: KeyArgs,
    session: &Session,
    console: &mut Console<W>,
) -> Result<()> {
    let keys = session.client().keys();

    match args.command {
        KeyCommand::Create(create) => {
            let request = create_request(create)?;
            let key = keys.create(&request).await?;
            console.block(&format_key(&key))?;
        }
        KeyCommand::List { limit, offset } => {
            let page = keys.list(&ListKeysQuery { limit, offset }).await?;
            if page.results.is_empty() {
                console.notice("no keys found")?;
            }
            for key in &page.results {
                console.block(&format_key(key))?;
                console.divider()?;
            }
        }
        KeyCommand::Get { key } => {
            let key = required(key, "key or uid is required 'key get {key}'")?;
            let key = keys.get(&key).await?;
            console.block(&format_key(&key))?;
        }
        KeyCommand::Update {
            key,
            name,
            description,
        } => {
            let key = required(
                key,
                "key or uid is required 'key update {key} --name {name} --description {description}'",
            )?;
            if name.is_none() && description.is_none() {
                return Err(CommandError::usage(
                    "nothing to update, pass --name and/or --description",
                ));
            }
            let key = keys
                .update(&key, &UpdateKeyRequest { name, description })
                .await?;
            console.block(&format_key(&key))?;
        }
        KeyCommand::Delete { key } => {
            let key = required(key, "key or uid is required 'key delete {key}'")?;
            keys.delete(&key).await?;
            console.success(format!("key {} deleted", key))?;
        }
    }

    Ok(())
}

const CREATE_USAGE: &str =
    "'key create --actions {actions} --indexes {indexes} --expire-at {RFC3339 date}'";

fn create_request(args: CreateKeyArgs) -> Result<CreateKeyRequest> {
    let actions = non_empty(args.actions);
    let indexes = non_empty(args.indexes);
    if actions.is_empty() {
        return Err(CommandError::usage(format!(
            "actions are required {}",
            CREATE_USAGE
        )));
    }
    if indexes.is_empty() {
        return Err(CommandError::usage(format!(
            "indexes are required {}",
            CREATE_USAGE
        )));
    }
    let expire_at = required(args.expire_at, &format!("expire-at is required {}", CREATE_USAGE))?;

    Ok(CreateKeyRequest {
        uid: args.uid,
        name: args.name,
        description: args.description,
        actions,
        indexes,
        expires_at: Some(parse_expiry(&expire_at)?),
    })
}

/// RFC 3339 timestamp normalised to UTC.
fn parse_expiry(raw: &str) -> Result<String> {
    let parsed = DateTime::parse_from_rfc3339(raw)
        .map_err(|e| CommandError::parse("expire-at date", raw, e))?;
    Ok(parsed
        .with_timezone(&Utc)
        .to_rfc3339_opts(SecondsFormat::AutoSi, true))
}

fn non_empty(values: Vec<String>) -> Vec<String> {
    values
        .into_iter()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .collect()
}
