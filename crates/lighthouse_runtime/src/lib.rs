//! Session controller and terminal front end for the Lighthouse adventure.
//!
//! This crate provides:
//! - [`Session`] - One playthrough, driven a line at a time
//! - [`SceneView`] - A snapshot for rendering collaborators
//! - [`GameConfig`] - Front-end settings loaded from TOML
//! - [`Repl`] - The terminal game loop over a [`LineEditor`]

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod editor;
pub mod highlight;
pub mod repl;
pub mod session;

pub use config::GameConfig;
pub use editor::{LineEditor, ReadResult, RustylineEditor, ScriptEditor};
pub use repl::Repl;
pub use session::{SceneView, Session, Step};
