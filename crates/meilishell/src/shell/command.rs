//! The command tree typed at the prompt.

use clap::{Parser, Subcommand};

use crate::commands::{connect, index, key, search, task};

/// One line of shell input.
#[derive(Parser, Debug)]
#[command(
    name = "meilishell",
    no_binary_name = true,
    disable_version_flag = true,
    override_usage = "<COMMAND> [ARGS]...",
    after_help = "Type '<command> --help' for details on a command."
)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

#[derive(Subcommand, Debug)]
pub enum ShellCommand {
    /// Check that Meilisearch is healthy
    Health,

    /// Print the Meilisearch version
    Version,

    /// Show database size and indexes
    Stats,

    /// Create a dump of the database
    Dump,

    /// Clear the screen
    Clear,

    /// Connect to another Meilisearch instance
    Connect(connect::ConnectArgs),

    /// Manage indexes and their settings
    Index(index::IndexArgs),

    /// Manage API keys
    Key(key::KeyArgs),

    /// Inspect, cancel and delete tasks
    Task(task::TaskArgs),

    /// Search documents in an index
    Search(search::SearchArgs),

    /// Leave the shell
    #[command(visible_alias = "quit")]
    Exit,
}

impl ShellCommand {
    /// Short name used in logs; never includes argument values.
    pub fn name(&self) -> &'static str {
        match self {
            ShellCommand::Health => "health",
            ShellCommand::Version => "version",
            ShellCommand::Stats => "stats",
            ShellCommand::Dump => "dump",
            ShellCommand::Clear => "clear",
            ShellCommand::Connect(_) => "connect",
            ShellCommand::Index(_) => "index",
            ShellCommand::Key(_) => "key",
            ShellCommand::Task(_) => "task",
            ShellCommand::Search(_) => "search",
            ShellCommand::Exit => "exit",
        }
    }
}
