//! Keyword command parser for the Lighthouse adventure.
//!
//! This crate turns a raw line like "Take the Crystal Lens" into a verb and
//! an object phrase. It never fails: unknown verbs are still commands, and
//! deciding what they mean is the resolver's job.
//!
//! # Architecture
//!
//! ```text
//! "Take the Crystal Lens"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   TOKENIZER     │  → ["take", "the", "crystal", "lens"]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ OBJECT PHRASE   │  → verb "take", object "crystal lens"
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ VOCABULARY      │  → VerbClass::Take
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`tokenizer`] - Convert raw input to lowercase words
//! - [`phrase`] - Object phrases with article stripping and keyword matching
//! - [`command`] - Parsed command types
//! - [`parser`] - The parse entry point
//! - [`vocabulary`] - Verb classes and their trigger words

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod command;
pub mod parser;
pub mod phrase;
pub mod tokenizer;
pub mod vocabulary;

pub use command::{Command, ParsedInput};
pub use parser::parse;
pub use phrase::ObjectPhrase;
pub use tokenizer::InputTokenizer;
pub use vocabulary::{VerbClass, Vocabulary};
