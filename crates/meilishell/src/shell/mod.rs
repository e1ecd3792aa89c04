//! Line parsing and command dispatch.

pub mod command;
pub mod complete;
pub mod dispatch;
pub mod tokenize;

pub use command::{ShellCommand, ShellLine};
pub use dispatch::dispatch;
pub use tokenize::{TokenizeError, tokenize};

/// What the read loop should do after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}
