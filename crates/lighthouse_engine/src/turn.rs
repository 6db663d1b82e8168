//! The outcome of one resolved command.

use lighthouse_parser::Command;
use lighthouse_world::{RoomDef, RoomTable, WorldState};

use crate::narrative;

/// How a turn went.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TurnKind {
    /// Blank input
    Empty,
    /// The verb is not in the vocabulary
    Unrecognized,
    /// The action was understood but not possible; state is unchanged
    Refused,
    /// The action happened
    Succeeded,
    /// The player asked to stop
    Quit,
}

/// A narrative reply together with the snapshot to commit.
#[derive(Clone, Debug)]
pub struct Turn {
    /// How the turn went
    pub kind: TurnKind,
    /// Text for the player
    pub message: String,
    /// The world after the turn
    pub world: WorldState,
}

impl Turn {
    /// Creates a turn.
    #[must_use]
    pub fn new(kind: TurnKind, message: impl Into<String>, world: WorldState) -> Self {
        Self {
            kind,
            message: message.into(),
            world,
        }
    }

    /// A successful turn that commits `world`.
    #[must_use]
    pub fn succeeded(message: impl Into<String>, world: WorldState) -> Self {
        Self::new(TurnKind::Succeeded, message, world)
    }

    /// A refusal that leaves `world` as it was.
    #[must_use]
    pub fn refused(message: impl Into<String>, world: &WorldState) -> Self {
        Self::new(TurnKind::Refused, message, world.clone())
    }

    /// The reply to blank input.
    #[must_use]
    pub fn empty(world: &WorldState) -> Self {
        Self::new(TurnKind::Empty, narrative::EMPTY_INPUT, world.clone())
    }

    /// The reply to an unknown command.
    #[must_use]
    pub fn unrecognized(raw: &str, world: &WorldState) -> Self {
        Self::new(
            TurnKind::Unrecognized,
            narrative::not_understood(raw),
            world.clone(),
        )
    }

    /// Returns true if the player asked to stop.
    #[must_use]
    pub fn is_quit(&self) -> bool {
        self.kind == TurnKind::Quit
    }
}

/// What a handler sees while resolving one command.
#[derive(Clone, Copy, Debug)]
pub struct TurnContext<'a> {
    /// Static content
    pub table: &'a RoomTable,
    /// The snapshot the command resolves against
    pub world: &'a WorldState,
    /// The parsed command
    pub command: &'a Command,
}

impl TurnContext<'_> {
    /// Returns the definition of the room the player stands in.
    #[must_use]
    pub fn room(&self) -> &RoomDef {
        self.table.room(self.world.current_room())
    }

    /// Refuses with `message`, leaving the world unchanged.
    #[must_use]
    pub fn refuse(&self, message: impl Into<String>) -> Turn {
        Turn::refused(message, self.world)
    }

    /// Treats the command as not understood.
    #[must_use]
    pub fn not_understood(&self) -> Turn {
        Turn::unrecognized(&self.command.raw, self.world)
    }
}
