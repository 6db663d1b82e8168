//! Parsed command types.

use crate::phrase::ObjectPhrase;

/// A non-empty line split into verb and object.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Command {
    /// The line as typed, trimmed, case preserved
    pub raw: String,
    /// The first word, lowercased
    pub verb: String,
    /// Everything after the verb, minus articles
    pub object: ObjectPhrase,
}

impl Command {
    /// Returns true if the object phrase is empty.
    #[must_use]
    pub fn has_object(&self) -> bool {
        !self.object.is_empty()
    }
}

/// The outcome of parsing one line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParsedInput {
    /// Nothing but whitespace was entered
    Empty,
    /// A verb, possibly with an object
    Command(Command),
}

impl ParsedInput {
    /// Returns the command, if the input was not empty.
    #[must_use]
    pub fn command(&self) -> Option<&Command> {
        match self {
            ParsedInput::Empty => None,
            ParsedInput::Command(cmd) => Some(cmd),
        }
    }
}
