//! Command handlers.
//!
//! Each handler validates its arguments, makes one client call and prints
//! the formatted result. Handlers hold no state of their own.

pub mod connect;
pub mod index;
pub mod key;
pub mod search;
pub mod server;
pub mod settings;
pub mod task;

use std::io::Write;

use crate::console::Console;
use crate::error::Result;
use crate::session::Session;
use crate::shell::{Flow, ShellCommand};

/// Run a parsed command.
pub async fn execute<W: Write>(
    command: ShellCommand,
    session: &mut Session,
    console: &mut Console<W>,
) -> Result<Flow> {
    match command {
        ShellCommand::Health => server::health(session, console).await?,
        ShellCommand::Version => server::version(session, console).await?,
        ShellCommand::Stats => server::stats(session, console).await?,
        ShellCommand::Dump => server::dump(session, console).await?,
        ShellCommand::Clear => console.clear()?,
        ShellCommand::Connect(args) => connect::run(args, session, console).await?,
        ShellCommand::Index(args) => index::run(args, session, console).await?,
        ShellCommand::Key(args) => key::run(args, session, console).await?,
        ShellCommand::Task(args) => task::run(args, session, console).await?,
        ShellCommand::Search(args) => search::run(args, session, console).await?,
        ShellCommand::Exit => return Ok(Flow::Exit),
    }
    Ok(Flow::Continue)
}

/// Unwrap a required positional or fail with a usage message.
pub(crate) fn required(value: Option<String>, message: &str) -> Result<String> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(crate::error::CommandError::usage(message)),
    }
}
