//! Index command - index management.

use std::io::Write;

use clap::{Args, Subcommand};
use meilishell_client::{ListIndexesQuery, SwapIndexes};

use super::{required, settings};
use crate::console::Console;
use crate::error::{CommandError, Result};
use crate::output::{format_index, format_task_info};
use crate::session::Session;

/// Arguments for the index command.
#[derive(Args, Debug)]
pub struct IndexArgs {
    #[command(subcommand)]
    pub command: IndexCommand,
}

#[derive(Subcommand, Debug)]
pub enum IndexCommand {
    /// Show one index
    Get {
        /// Index UID
        uid: Option<String>,
    },

    /// List indexes
    List {
        /// Maximum number of indexes to return
        #[arg(long)]
        limit: Option<u32>,

        /// Number of indexes to skip
        #[arg(long)]
        offset: Option<u32>,
    },

    /// Create an index
    Create {
        /// Index UID
        uid: Option<String>,

        /// Primary key of the documents
        #[arg(long)]
        primary_key: Option<String>,
    },

    /// Delete an index
    Delete {
        /// Index UID
        uid: Option<String>,
    },

    /// Swap the documents, settings and task history of index pairs
    Swap {
        /// Pairs of index UIDs, e.g. `movies,movies_new`
        pairs: Vec<String>,
    },

    /// Show, update or reset index settings
    Settings(settings::SettingsArgs),
}

pub async fn run<W: Write>(
    args: IndexArgs,
    session: &Session,
    console: &mut Console<W>,
) -> Result<()> {
    let indexes = session.client().indexes();

    match args.command {
        IndexCommand::Get { uid } => {
            let uid = required(uid, "index uid is required 'index get {uid}'")?;
            let index = indexes.get(&uid).await?;
            console.block(&format_index(&index, None))?;
        }
        IndexCommand::List { limit, offset } => {
            let page = indexes.list(&ListIndexesQuery { limit, offset }).await?;
            if page.results.is_empty() {
                console.notice("no indexes found")?;
            }
            let start = offset.unwrap_or(0) as usize;
            for (i, index) in page.results.iter().enumerate() {
                console.block(&format_index(index, Some(start + i + 1)))?;
                console.divider()?;
            }
        }
        IndexCommand::Create { uid, primary_key } => {
            let uid = required(uid, "index uid is required 'index create {uid}'")?;
            let info = indexes.create(&uid, primary_key.as_deref()).await?;
            console.block(&format_task_info(&info))?;
        }
        IndexCommand::Delete { uid } => {
            let uid = required(uid, "index uid is required 'index delete {uid}'")?;
            let info = indexes.delete(&uid).await?;
            console.block(&format_task_info(&info))?;
        }
        IndexCommand::Swap { pairs } => {
            if pairs.is_empty() {
                return Err(CommandError::usage(
                    "index pairs are required 'index swap {uid_a},{uid_b} ...'",
                ));
            }
            let swaps = pairs
                .iter()
                .map(|pair| parse_swap_pair(pair))
                .collect::<Result<Vec<_>>>()?;
            let info = indexes.swap(&swaps).await?;
            console.block(&format_task_info(&info))?;
        }
        IndexCommand::Settings(args) => settings::run(args, session, console).await?,
    }

    Ok(())
}

/// `a,b` into a swap of two index UIDs.
fn parse_swap_pair(pair: &str) -> Result<SwapIndexes> {
    let parts: Vec<&str> = pair.split(',').map(str::trim).collect();
    match parts.as_slice() {
        [a, b] if !a.is_empty() && !b.is_empty() => Ok(SwapIndexes {
            indexes: [a.to_string(), b.to_string()],
        }),
        _ => Err(CommandError::parse(
            "index pair",
            pair,
            "expected two index uids separated by a comma",
        )),
    }
}
