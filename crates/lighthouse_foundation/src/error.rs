//! Error types for the Lighthouse engine.
//!
//! Uses `thiserror` for ergonomic error definition. Player-facing refusals are
//! never errors; these describe broken content, broken state transitions and
//! start-up failures.

use thiserror::Error;

use crate::id::ItemId;

/// The main error type for Lighthouse operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates an item-not-present error.
    #[must_use]
    pub fn item_not_present(item: ItemId, place: impl Into<String>) -> Self {
        Self::new(ErrorKind::ItemNotPresent {
            item,
            place: place.into(),
        })
    }

    /// Creates an invalid content error.
    #[must_use]
    pub fn invalid_content(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidContent(message.into()))
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Config(message.into()))
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A room name did not match any known room.
    #[error("unknown room: {0}")]
    UnknownRoom(String),

    /// An item name did not match any known item.
    #[error("unknown item: {0}")]
    UnknownItem(String),

    /// A flag name did not match any known flag.
    #[error("unknown flag: {0}")]
    UnknownFlag(String),

    /// A word is not one of the six canonical directions.
    #[error("unknown direction: {0}")]
    UnknownDirection(String),

    /// An item was expected in a container that does not hold it.
    #[error("item {item} is not in {place}")]
    ItemNotPresent {
        /// The item that was looked for.
        item: ItemId,
        /// Human-readable description of the container.
        place: String,
    },

    /// An item would end up in two containers at once.
    #[error("item {item} is already placed ({place})")]
    ItemAlreadyPlaced {
        /// The item being placed.
        item: ItemId,
        /// Where the item currently lives.
        place: String,
    },

    /// The static content table failed validation.
    #[error("invalid content: {0}")]
    InvalidContent(String),

    /// Configuration could not be read or parsed.
    #[error("configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type alias using the Lighthouse error type.
pub type Result<T> = std::result::Result<T, Error>;
