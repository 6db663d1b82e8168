//! Line editor abstraction for the terminal front end.
//!
//! The REPL reads commands through [`LineEditor`], so the same loop drives an
//! interactive rustyline terminal, a replayed command script, or a mock in
//! tests.

use std::borrow::Cow;
use std::collections::VecDeque;
use std::fs;
use std::path::Path;

use crate::highlight::CommandHighlighter;
use lighthouse_foundation::{Direction, Error, ItemId, Result};
use lighthouse_parser::Vocabulary;
use lighthouse_world::RoomTable;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::{CmdKind, Highlighter};
use rustyline::hint::HistoryHinter;
use rustyline::history::DefaultHistory;
use rustyline::{Completer, Config, Context, Editor, Helper, Hinter, Validator};

/// Result of reading a line from the editor.
#[derive(Debug)]
pub enum ReadResult {
    /// A line was successfully read.
    Line(String),
    /// User pressed Ctrl+C.
    Interrupted,
    /// User pressed Ctrl+D (EOF), or the script ran out.
    Eof,
}

/// Abstraction over line editing functionality.
pub trait LineEditor {
    /// Read a line with the given prompt.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails.
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult>;

    /// Add a line to history.
    fn add_history(&mut self, line: &str);

    /// Whether a person is typing. Non-interactive input is echoed by the REPL.
    fn is_interactive(&self) -> bool {
        true
    }
}

// =============================================================================
// Rustyline
// =============================================================================

/// Helper for rustyline that provides completion, hints and highlighting.
#[derive(Helper, Completer, Hinter, Validator)]
struct GameHelper {
    #[rustyline(Completer)]
    completer: WordCompleter,
    #[rustyline(Hinter)]
    hinter: HistoryHinter,
    highlighter: CommandHighlighter,
}

impl Highlighter for GameHelper {
    fn highlight<'l>(&self, line: &'l str, pos: usize) -> Cow<'l, str> {
        self.highlighter.highlight(line, pos)
    }

    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> Cow<'b, str> {
        if default {
            Cow::Owned(format!("\x1b[1;33m{prompt}\x1b[0m"))
        } else {
            Cow::Borrowed(prompt)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        true
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(format!("\x1b[2m{hint}\x1b[0m"))
    }
}

/// Completes verbs in first position and nouns after it.
struct WordCompleter {
    verbs: Vec<String>,
    nouns: Vec<String>,
}

impl WordCompleter {
    fn new(vocabulary: &Vocabulary, table: &RoomTable) -> Self {
        let mut verbs: Vec<String> = vocabulary
            .words()
            .filter(|w| w.len() > 1)
            .map(String::from)
            .collect();
        verbs.sort();
        verbs.dedup();

        let mut nouns: Vec<String> = Direction::ALL
            .iter()
            .map(|d| d.name().to_string())
            .chain(ItemId::ALL.iter().map(|i| i.display_name().to_string()))
            .chain(
                table
                    .rooms()
                    .flat_map(|room| room.examine.iter())
                    .map(|(key, _)| key.replace('_', " ")),
            )
            .collect();
        nouns.sort();
        nouns.dedup();

        Self { verbs, nouns }
    }
}

impl Completer for WordCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let before = &line[..pos];
        let start = before.rfind(char::is_whitespace).map_or(0, |i| i + 1);
        let word = before[start..].to_lowercase();
        let first_word = before[..start].trim().is_empty();

        let pool = if first_word { &self.verbs } else { &self.nouns };
        let candidates = pool
            .iter()
            .filter(|w| w.starts_with(&word))
            .map(|w| Pair {
                display: w.clone(),
                replacement: w.clone(),
            })
            .collect();

        Ok((start, candidates))
    }
}

/// Line editor implementation using rustyline.
pub struct RustylineEditor {
    editor: Editor<GameHelper, DefaultHistory>,
}

impl RustylineEditor {
    /// Creates a rustyline editor that completes the given game's words.
    ///
    /// # Errors
    ///
    /// Returns an error if the history size is rejected or the terminal
    /// cannot be initialized.
    pub fn new(
        history_size: usize,
        vocabulary: &'static Vocabulary,
        table: &RoomTable,
    ) -> Result<Self> {
        let config = Config::builder()
            .auto_add_history(false)
            .max_history_size(history_size)
            .map_err(|e| Error::config(format!("invalid history size: {e}")))?
            .build();

        let helper = GameHelper {
            completer: WordCompleter::new(vocabulary, table),
            hinter: HistoryHinter::new(),
            highlighter: CommandHighlighter::new(vocabulary),
        };

        let mut editor =
            Editor::with_config(config).map_err(|e| Error::internal(e.to_string()))?;
        editor.set_helper(Some(helper));

        Ok(Self { editor })
    }
}

impl LineEditor for RustylineEditor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadResult::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadResult::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadResult::Eof),
            Err(e) => Err(Error::internal(e.to_string())),
        }
    }

    fn add_history(&mut self, line: &str) {
        let _ = self.editor.add_history_entry(line);
    }
}

// =============================================================================
// Script
// =============================================================================

/// Replays commands from a list, one per read.
#[derive(Debug, Default)]
pub struct ScriptEditor {
    lines: VecDeque<String>,
}

impl ScriptEditor {
    /// Creates a script from lines.
    ///
    /// Blank lines and lines starting with `#` are skipped.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lines = lines
            .into_iter()
            .map(Into::into)
            .filter(|l: &String| {
                let t = l.trim();
                !t.is_empty() && !t.starts_with('#')
            })
            .collect();
        Self { lines }
    }

    /// Loads a script file.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the file cannot be read.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .map_err(|e| Error::config(format!("cannot read script {}: {e}", path.display())))?;
        Ok(Self::from_lines(text.lines()))
    }

    /// Returns the number of commands left.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl LineEditor for ScriptEditor {
    fn read_line(&mut self, _prompt: &str) -> Result<ReadResult> {
        Ok(self
            .lines
            .pop_front()
            .map_or(ReadResult::Eof, ReadResult::Line))
    }

    fn add_history(&mut self, _line: &str) {}

    fn is_interactive(&self) -> bool {
        false
    }
}
