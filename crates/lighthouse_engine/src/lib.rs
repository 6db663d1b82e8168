//! Action resolver and interaction rules for the Lighthouse adventure.
//!
//! This crate provides:
//! - [`Resolver`] - Maps a parsed command onto a world snapshot
//! - [`Turn`] and [`TurnKind`] - The narrative reply and the snapshot to commit
//! - [`InteractionRule`] - The ordered use/combine/give rule table
//! - [`narrative`] - Fixed reply text, including the ending

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod actions;
pub mod interact;
mod look;
mod movement;
pub mod narrative;
pub mod resolver;
mod take;
pub mod turn;

pub use interact::{Branch, Condition, Effect, InteractionRule, STANDARD_RULES};
pub use resolver::Resolver;
pub use turn::{Turn, TurnContext, TurnKind};
