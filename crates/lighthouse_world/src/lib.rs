//! Room table and world state for the Lighthouse adventure.
//!
//! This crate provides:
//! - [`RoomDef`], [`ItemDef`], [`Gate`] - Hand-authored static content
//! - [`RoomTable`] - The immutable registry of that content, with validation
//! - [`WorldState`] - Immutable per-session snapshot with structural sharing

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod content;
pub mod state;
pub mod table;

pub use content::{FlagVariant, Gate, ItemDef, RoomDef};
pub use state::{Placement, WorldState};
pub use table::RoomTable;
