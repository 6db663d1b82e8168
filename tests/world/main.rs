//! Integration tests for Layer 1: World
//!
//! Tests for the room table and persistent world state.

mod state;
mod table;
