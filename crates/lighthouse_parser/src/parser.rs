//! The parse entry point.

use tracing::trace;

use crate::command::{Command, ParsedInput};
use crate::phrase::ObjectPhrase;
use crate::tokenizer::InputTokenizer;

/// Parses one raw line.
///
/// The first word becomes the verb and the rest, minus articles, becomes the
/// object phrase. Blank input yields [`ParsedInput::Empty`]. Unknown verbs are
/// not an error here.
#[must_use]
pub fn parse(raw: &str) -> ParsedInput {
    let mut words = InputTokenizer::tokenize(raw).into_iter();
    let Some(verb) = words.next() else {
        return ParsedInput::Empty;
    };
    let object = ObjectPhrase::from_words(words);
    trace!(%verb, object = %object, "parsed");
    ParsedInput::Command(Command {
        raw: raw.trim().to_string(),
        verb,
        object,
    })
}
