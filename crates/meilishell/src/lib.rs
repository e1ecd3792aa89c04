//! Meilishell - an interactive shell for the Meilisearch administrative API.
//!
//! The binary wires these pieces together: a [`Session`] is created by a
//! successful connect, each input line goes through [`shell::dispatch`],
//! and handlers in [`commands`] print through a [`Console`].

pub mod commands;
pub mod console;
pub mod error;
pub mod output;
pub mod repl;
pub mod session;
pub mod shell;

pub use crate::console::Console;
pub use error::CommandError;
pub use session::{ConnectError, ConnectOptions, Session};
pub use shell::{Flow, dispatch};
