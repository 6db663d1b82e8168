//! The terminal game loop.

use std::io::{self, Stdout, Write};

use crate::config::GameConfig;
use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::session::{Session, Step};
use lighthouse_foundation::{Error, Result, RoomId};
use tracing::debug;

/// The interactive game loop.
pub struct Repl<E: LineEditor = RustylineEditor, W: Write = Stdout> {
    /// The line editor for input.
    editor: E,

    /// The playthrough being driven.
    session: Session,

    /// Front-end settings.
    config: GameConfig,

    /// Where narrative goes.
    out: W,

    /// Room whose name was printed last.
    shown_room: Option<RoomId>,
}

impl<E: LineEditor> Repl<E, Stdout> {
    /// Creates a REPL that drives `session` through `editor`, writing to
    /// stdout.
    pub fn with_editor(editor: E, session: Session, config: GameConfig) -> Self {
        Self {
            editor,
            session,
            config,
            out: io::stdout(),
            shown_room: None,
        }
    }
}

impl<E: LineEditor, W: Write> Repl<E, W> {
    /// Redirects output.
    pub fn with_output<W2: Write>(self, out: W2) -> Repl<E, W2> {
        Repl {
            editor: self.editor,
            session: self.session,
            config: self.config,
            out,
            shown_room: self.shown_room,
        }
    }

    /// Returns a reference to the session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Returns the settings.
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Returns the output sink.
    #[must_use]
    pub const fn output(&self) -> &W {
        &self.out
    }

    /// Runs the loop until the player quits or input runs out.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails.
    pub fn run(&mut self) -> Result<()> {
        if self.config.show_banner {
            self.print_banner()?;
        }
        self.print_scene()?;

        loop {
            match self.editor.read_line(&self.config.prompt)? {
                ReadResult::Line(line) => {
                    let line = truncate(&line, self.config.max_input_len).to_string();
                    if !self.editor.is_interactive() {
                        self.emit(&format!("{}{line}", self.config.prompt))?;
                    }
                    if !line.trim().is_empty() {
                        self.editor.add_history(&line);
                    }
                    if self.submit(&line)? == Step::Quit {
                        break;
                    }
                }
                ReadResult::Interrupted => self.emit("")?,
                ReadResult::Eof => {
                    debug!("input ended");
                    break;
                }
            }
        }

        self.out.flush().map_err(write_error)
    }

    /// Submits one line and prints the outcome.
    ///
    /// # Errors
    ///
    /// Returns an error if writing output fails.
    pub fn submit(&mut self, line: &str) -> Result<Step> {
        let step = self.session.submit(line);
        self.print_scene()?;
        Ok(step)
    }

    /// Prints the room name if it changed, then the current message.
    fn print_scene(&mut self) -> Result<()> {
        let room = self.session.current_room();
        if self.shown_room != Some(room) {
            self.shown_room = Some(room);
            let header = format!("\n\x1b[1m{}\x1b[0m", self.session.room_name());
            self.emit(&header)?;
        }
        let text = wrap(self.session.message(), self.config.wrap_width);
        self.emit(&text)
    }

    /// Prints the title banner.
    fn print_banner(&mut self) -> Result<()> {
        let rule = "=".repeat(60);
        let banner = format!(
            "\x1b[1;36m{rule}\n  THE LIGHTHOUSE OF FORGOTTEN SOULS\n  A Sierra-Style Adventure Game\n{rule}\x1b[0m\n\n\
             You are Morgan, a shipwrecked sailor on a mysterious island.\n\
             Restore the lighthouse and free the trapped souls!\n\n\
             Commands: LOOK, GET, USE, TALK, GO (N/S/E/W), INVENTORY\n\
             Type LOOK <object> to examine things closely.\n{rule}"
        );
        self.emit(&banner)
    }

    fn emit(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "{text}").map_err(write_error)
    }
}

fn write_error(e: io::Error) -> Error {
    Error::internal(format!("cannot write output: {e}"))
}

/// Cuts `line` to at most `max` characters.
#[must_use]
pub fn truncate(line: &str, max: usize) -> &str {
    line.char_indices().nth(max).map_or(line, |(i, _)| &line[..i])
}

/// Greedily wraps each paragraph line of `text` at `width` columns.
///
/// Existing line breaks are kept. A width of zero disables wrapping, and a
/// word longer than the width gets a line of its own.
#[must_use]
pub fn wrap(text: &str, width: usize) -> String {
    if width == 0 {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len() + text.len() / width);
    for (n, source_line) in text.split('\n').enumerate() {
        if n > 0 {
            out.push('\n');
        }
        let mut column = 0;
        for word in source_line.split_whitespace() {
            let len = word.chars().count();
            if column > 0 && column + 1 + len > width {
                out.push('\n');
                column = 0;
            } else if column > 0 {
                out.push(' ');
                column += 1;
            }
            out.push_str(word);
            column += len;
        }
    }
    out
}
