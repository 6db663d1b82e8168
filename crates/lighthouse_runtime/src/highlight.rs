//! Input highlighting for the terminal front end.

use std::borrow::Cow;

use lighthouse_foundation::Direction;
use lighthouse_parser::Vocabulary;
use lighthouse_parser::phrase::ARTICLES;

/// Colours the verb by whether the game understands it.
pub struct CommandHighlighter {
    vocabulary: &'static Vocabulary,
}

impl CommandHighlighter {
    /// Creates a highlighter over a vocabulary.
    #[must_use]
    pub const fn new(vocabulary: &'static Vocabulary) -> Self {
        Self { vocabulary }
    }

    /// Highlights a line of input.
    ///
    /// A known verb is bold green and an unknown one red. Direction words
    /// later in the line are cyan and articles are dimmed.
    pub fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.trim().is_empty() {
            return Cow::Borrowed(line);
        }

        let mut result = String::with_capacity(line.len() * 2);
        let mut seen_verb = false;
        let mut word = String::new();

        for c in line.chars() {
            if c.is_whitespace() {
                if !word.is_empty() {
                    self.push_word(&mut result, &word, &mut seen_verb);
                    word.clear();
                }
                result.push(c);
            } else {
                word.push(c);
            }
        }
        if !word.is_empty() {
            self.push_word(&mut result, &word, &mut seen_verb);
        }

        Cow::Owned(result)
    }

    fn push_word(&self, out: &mut String, word: &str, seen_verb: &mut bool) {
        let lower = word.to_lowercase();
        let style = if *seen_verb {
            if Direction::from_word(&lower).is_some() {
                Some("\x1b[36m") // cyan
            } else if ARTICLES.contains(&lower.as_str()) {
                Some("\x1b[2m") // dim
            } else {
                None
            }
        } else {
            *seen_verb = true;
            if self.vocabulary.classify(&lower).is_some() {
                Some("\x1b[1;32m") // bold green
            } else {
                Some("\x1b[31m") // red
            }
        };

        match style {
            Some(code) => {
                out.push_str(code);
                out.push_str(word);
                out.push_str("\x1b[0m");
            }
            None => out.push_str(word),
        }
    }
}
