//! Errors surfaced by shell commands.

use std::fmt::Display;

use thiserror::Error;

/// Error returned by a command handler. The dispatcher prints it and the
/// shell keeps running.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Missing or inconsistent arguments; nothing was sent.
    #[error("{0}")]
    Usage(String),

    /// User input that could not be parsed; nothing was sent.
    #[error("invalid {what} '{input}': {reason}")]
    Parse {
        what: &'static str,
        input: String,
        reason: String,
    },

    /// The request reached the client and failed.
    #[error("{}", describe_client_error(.0))]
    Client(#[from] meilishell_client::Error),

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

impl CommandError {
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage(message.into())
    }

    pub fn parse(what: &'static str, input: impl Into<String>, reason: impl Display) -> Self {
        Self::Parse {
            what,
            input: input.into(),
            reason: reason.to_string(),
        }
    }
}

fn describe_client_error(err: &meilishell_client::Error) -> String {
    if err.is_auth_error() {
        format!("not authorized, check the API key: {}", err)
    } else {
        err.to_string()
    }
}

pub type Result<T> = std::result::Result<T, CommandError>;
