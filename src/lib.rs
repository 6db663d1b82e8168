//! The Lighthouse of Forgotten Souls - a text adventure engine
//!
//! This crate re-exports all layers of the engine for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: lighthouse_runtime    - Session controller, config, REPL, CLI
//! Layer 3: lighthouse_engine     - Resolver, interaction rules, narrative
//! Layer 2: lighthouse_parser     - Tokenizer, object phrases, vocabulary
//! Layer 1: lighthouse_world      - Room table, persistent world state
//! Layer 0: lighthouse_foundation - Identifiers (RoomId, ItemId, Flag), Error
//! ```

pub use lighthouse_engine as engine;
pub use lighthouse_foundation as foundation;
pub use lighthouse_parser as parser;
pub use lighthouse_runtime as runtime;
pub use lighthouse_world as world;
