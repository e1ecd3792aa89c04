//! The interactive read/eval loop.

use std::borrow::Cow::{self, Borrowed, Owned};
use std::path::PathBuf;

use console::Style;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::{Hinter, HistoryHinter};
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{CompletionType, Config, EditMode, Editor, Helper};
use tracing::{debug, warn};

use crate::console::Console;
use crate::session::Session;
use crate::shell::complete::ShellCompleter;
use crate::shell::{Flow, dispatch};

/// History settings for the line editor.
#[derive(Debug, Clone)]
pub struct HistoryOptions {
    /// Where history is loaded from and saved to; `None` keeps it in memory.
    pub file: Option<PathBuf>,
    pub max_entries: usize,
}

struct ShellHelper {
    completer: ShellCompleter,
    hinter: HistoryHinter,
    colors: bool,
}

impl Helper for ShellHelper {}

impl Completer for ShellHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let (start, candidates) = self.completer.candidates(&line[..pos]);
        let pairs = candidates
            .into_iter()
            .map(|candidate| Pair {
                display: candidate.clone(),
                replacement: candidate,
            })
            .collect();
        Ok((start, pairs))
    }
}

impl Hinter for ShellHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, ctx: &rustyline::Context<'_>) -> Option<String> {
        self.hinter.hint(line, pos, ctx)
    }
}

impl Validator for ShellHelper {}

impl Highlighter for ShellHelper {
    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        _default: bool,
    ) -> Cow<'b, str> {
        if self.colors {
            Owned(Style::new().cyan().bold().apply_to(prompt).to_string())
        } else {
            Borrowed(prompt)
        }
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        if self.colors {
            Owned(Style::new().dim().apply_to(hint).to_string())
        } else {
            Borrowed(hint)
        }
    }
}

/// Shell state: the session plus the line editor.
pub struct Repl {
    session: Session,
    editor: Editor<ShellHelper, DefaultHistory>,
    console: Console,
    history_file: Option<PathBuf>,
}

impl Repl {
    pub fn new(session: Session, history: HistoryOptions) -> rustyline::Result<Self> {
        let config = Config::builder()
            .history_ignore_space(true)
            .history_ignore_dups(true)?
            .max_history_size(history.max_entries)?
            .completion_type(CompletionType::List)
            .edit_mode(EditMode::Emacs)
            .build();

        let mut editor = Editor::with_config(config)?;
        editor.set_helper(Some(ShellHelper {
            completer: ShellCompleter::new(),
            hinter: HistoryHinter::new(),
            colors: console::colors_enabled(),
        }));

        if let Some(path) = &history.file {
            if let Err(e) = editor.load_history(path) {
                debug!(path = %path.display(), error = %e, "no previous history loaded");
            }
        }

        Ok(Self {
            session,
            editor,
            console: Console::stdout(),
            history_file: history.file,
        })
    }

    /// Read and run lines until `exit` or end of input.
    pub async fn run(&mut self) -> rustyline::Result<()> {
        loop {
            let prompt = self.session.prefix().to_string();

            match self.editor.readline(&prompt) {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    self.editor.add_history_entry(line)?;

                    match dispatch(line, &mut self.session, &mut self.console).await? {
                        Flow::Continue => {}
                        Flow::Exit => break,
                    }
                }
                // Ctrl+C drops the current line only
                Err(ReadlineError::Interrupted) => continue,
                Err(ReadlineError::Eof) => break,
                Err(e) => return Err(e),
            }
        }

        self.save_history();
        Ok(())
    }

    fn save_history(&mut self) {
        let Some(path) = &self.history_file else {
            return;
        };
        if let Some(parent) = path.parent()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(path = %parent.display(), error = %e, "failed to create history directory");
            return;
        }
        if let Err(e) = self.editor.save_history(path) {
            warn!(path = %path.display(), error = %e, "failed to save history");
        }
    }
}
