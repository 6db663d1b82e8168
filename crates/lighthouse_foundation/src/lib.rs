//! Core identifiers and error types for the Lighthouse adventure engine.
//!
//! This crate provides:
//! - [`RoomId`] and [`ItemId`] - Stable symbolic identifiers for authored content
//! - [`Flag`] - One-way story progress markers
//! - [`Direction`] - The six canonical movement directions
//! - [`Error`] - Rich error types for content and state faults

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod direction;
pub mod error;
pub mod flag;
pub mod id;

pub use direction::Direction;
pub use error::{Error, ErrorKind, Result};
pub use flag::Flag;
pub use id::{ItemId, RoomId};
