//! Turn one input line into a handler call.

use std::io::{self, Write};

use clap::Parser;
use clap::error::{ContextKind, ContextValue, ErrorKind};
use tracing::debug;

use super::Flow;
use super::command::ShellLine;
use super::tokenize::tokenize;
use crate::commands;
use crate::console::Console;
use crate::session::Session;

/// Run one line of input against the session.
///
/// Every user-facing failure is printed to the console; only an error
/// writing to the console itself is returned.
pub async fn dispatch<W: Write>(
    line: &str,
    session: &mut Session,
    console: &mut Console<W>,
) -> io::Result<Flow> {
    let words = match tokenize(line) {
        Ok(words) => words,
        Err(e) => {
            console.error(e)?;
            return Ok(Flow::Continue);
        }
    };
    if words.is_empty() {
        return Ok(Flow::Continue);
    }

    let parsed = match ShellLine::try_parse_from(&words) {
        Ok(parsed) => parsed,
        Err(e) => {
            report_parse_error(&e, console)?;
            return Ok(Flow::Continue);
        }
    };

    let name = parsed.command.name();
    debug!(command = name, "dispatching");
    match commands::execute(parsed.command, session, console).await {
        Ok(flow) => Ok(flow),
        Err(e) => {
            debug!(command = name, error = %e, "command failed");
            console.error(&e)?;
            Ok(Flow::Continue)
        }
    }
}

fn report_parse_error<W: Write>(err: &clap::Error, console: &mut Console<W>) -> io::Result<()> {
    let rendered = err.render().to_string();
    match err.kind() {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
        | ErrorKind::DisplayVersion => console.block(&rendered),
        ErrorKind::InvalidSubcommand => match err.get(ContextKind::InvalidSubcommand) {
            Some(ContextValue::String(word)) => console.error(format!(
                "unknown command \"{}\", type 'help' to see available commands",
                word
            )),
            _ => console.error(format!("unknown command: {}", rendered.trim_end())),
        },
        _ => console.error(rendered.trim_end()),
    }
}
