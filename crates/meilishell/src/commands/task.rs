//! Task command - inspect, cancel and delete tasks.

use std::io::Write;

use clap::{Args, Subcommand};
use meilishell_client::ListTasksQuery;

use super::required;
use crate::console::Console;
use crate::error::{CommandError, Result};
use crate::output::{format_task, format_task_info};
use crate::session::Session;

/// Arguments for the task command.
#[derive(Args, Debug)]
pub struct TaskArgs {
    #[command(subcommand)]
    pub command: TaskCommand,
}

#[derive(Subcommand, Debug)]
pub enum TaskCommand {
    /// Show one task
    Get {
        /// Task UID
        uid: Option<String>,
    },

    /// List tasks, most recent first
    List(ListTasksArgs),

    /// Cancel enqueued or processing tasks
    Cancel {
        /// Task UIDs
        uids: Vec<String>,
    },

    /// Delete finished tasks from the history
    Delete {
        /// Task UIDs
        uids: Vec<String>,
    },
}

#[derive(Args, Debug)]
pub struct ListTasksArgs {
    /// Maximum number of tasks to return
    #[arg(long)]
    pub limit: Option<u32>,

    /// Task UID to start listing from
    #[arg(long)]
    pub from: Option<u64>,

    /// Filter by status, comma separated (enqueued, processing, succeeded, failed, canceled)
    #[arg(long)]
    pub statuses: Option<String>,

    /// Filter by type, comma separated (e.g. indexCreation, dumpCreation)
    #[arg(long)]
    pub types: Option<String>,

    /// Filter by index UID, comma separated
    #[arg(long)]
    pub index_uids: Option<String>,
}

pub async fn run<W: Write>(
    args: TaskArgs,
    session: &Session,
    console: &mut Console<W>,
) -> Result<()> {
    let tasks = session.client().tasks();

    match args.command {
        TaskCommand::Get { uid } => {
            let raw = required(uid, "task uid is required 'task get {uid}'")?;
            let uid = parse_uid(&raw)?;
            let task = tasks.get(uid).await?;
            console.block(&format_task(&task))?;
        }
        TaskCommand::List(list) => {
            let query = ListTasksQuery {
                limit: list.limit,
                from: list.from,
                statuses: list.statuses,
                types: list.types,
                index_uids: list.index_uids,
            };
            let page = tasks.list(&query).await?;
            if page.results.is_empty() {
                console.notice("no tasks found")?;
            }
            for task in &page.results {
                console.block(&format_task(task))?;
                console.divider()?;
            }
            if let Some(next) = page.next {
                console.notice(format!("more tasks available, use --from {}", next))?;
            }
        }
        TaskCommand::Cancel { uids } => {
            let uids = parse_uids(&uids, "task uids are required 'task cancel {uid} ...'")?;
            let info = tasks.cancel(&uids).await?;
            console.block(&format_task_info(&info))?;
        }
        TaskCommand::Delete { uids } => {
            let uids = parse_uids(&uids, "task uids are required 'task delete {uid} ...'")?;
            let info = tasks.delete(&uids).await?;
            console.block(&format_task_info(&info))?;
        }
    }

    Ok(())
}

fn parse_uid(raw: &str) -> Result<u64> {
    raw.trim()
        .parse::<u64>()
        .map_err(|e| CommandError::parse("task uid", raw, e))
}

/// Parse every uid; the first bad one aborts.
fn parse_uids(raw: &[String], usage: &str) -> Result<Vec<u64>> {
    if raw.is_empty() {
        return Err(CommandError::usage(usage));
    }
    raw.iter().map(|uid| parse_uid(uid)).collect()
}
