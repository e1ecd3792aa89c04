//! Where command output goes.
//!
//! Handlers never print directly: they write through a [`Console`], which
//! is the terminal in the interactive shell and an in-memory buffer in tests.

use std::fmt::Display;
use std::io::{self, Write};

use console::{Style, Term};

use crate::output::DIVIDER;

/// Output sink with a few styled helpers.
pub struct Console<W: Write = Term> {
    out: W,
    term: Option<Term>,
    styled: bool,
}

impl Console<Term> {
    /// Console attached to stdout.
    pub fn stdout() -> Self {
        let term = Term::stdout();
        Self {
            out: term.clone(),
            styled: console::colors_enabled(),
            term: Some(term),
        }
    }
}

impl Console<Vec<u8>> {
    /// Unstyled console that collects everything written to it.
    pub fn buffer() -> Self {
        Self {
            out: Vec::new(),
            term: None,
            styled: false,
        }
    }

    /// Everything written so far.
    pub fn output(&self) -> String {
        String::from_utf8_lossy(&self.out).into_owned()
    }
}

impl<W: Write> Console<W> {
    /// Write one line.
    pub fn line(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.out, "{}", text)
    }

    /// Write a pre-formatted block; the block carries its own newlines.
    pub fn block(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(text.as_bytes())?;
        self.out.flush()
    }

    /// Write the divider used between list entries.
    pub fn divider(&mut self) -> io::Result<()> {
        self.line(DIVIDER)
    }

    pub fn success(&mut self, text: impl Display) -> io::Result<()> {
        self.styled_line(Style::new().green(), text)
    }

    pub fn error(&mut self, text: impl Display) -> io::Result<()> {
        self.styled_line(Style::new().red(), text)
    }

    pub fn notice(&mut self, text: impl Display) -> io::Result<()> {
        self.styled_line(Style::new().cyan(), text)
    }

    /// Clear the screen. A no-op when not attached to a terminal.
    pub fn clear(&mut self) -> io::Result<()> {
        match &self.term {
            Some(term) => term.clear_screen(),
            None => Ok(()),
        }
    }

    fn styled_line(&mut self, style: Style, text: impl Display) -> io::Result<()> {
        if self.styled {
            writeln!(self.out, "{}", style.apply_to(text))
        } else {
            writeln!(self.out, "{}", text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_collects_plain_text() {
        let mut console = Console::buffer();
        console.error("boom").unwrap();
        console.divider().unwrap();
        console.block("a: 1\n").unwrap();
        assert_eq!(
            console.output(),
            "boom\n---------------------------------\na: 1\n"
        );
    }

    #[test]
    fn test_clear_on_buffer_keeps_output() {
        let mut console = Console::buffer();
        console.line("first").unwrap();
        console.clear().unwrap();
        assert_eq!(console.output(), "first\n");
    }
}
