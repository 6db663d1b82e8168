//! Integration tests for Layer 3: Engine
//!
//! Tests for command resolution and the interaction rules.

mod resolve;

use lighthouse_engine::{Resolver, Turn};
use lighthouse_world::WorldState;

/// Resolves each line in turn, returning the last turn.
pub fn play(lines: &[&str]) -> Turn {
    play_from(&Resolver::standard().new_world(), lines)
}

/// Resolves each line starting from `world`.
pub fn play_from(world: &WorldState, lines: &[&str]) -> Turn {
    let resolver = Resolver::standard();
    let mut turn = resolver.resolve_line("", world);
    for line in lines {
        turn = resolver.resolve_line(line, &turn.world);
    }
    turn
}
