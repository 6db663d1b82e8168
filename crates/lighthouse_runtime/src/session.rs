//! The session controller.
//!
//! A [`Session`] owns one playthrough: the resolver, the committed world
//! snapshot and the latest narrative message. Each [`Session::submit`] call
//! resolves one line against the committed snapshot and commits the result
//! when the turn is done. Sessions share no state with each other.

use std::collections::BTreeMap;

use lighthouse_engine::{Resolver, TurnKind, narrative};
use lighthouse_foundation::{Flag, ItemId, Result, RoomId};
use lighthouse_parser::{ParsedInput, VerbClass, parse};
use lighthouse_world::WorldState;
use serde::Serialize;
use tracing::{debug, info};

/// Whether the front end should keep reading input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Step {
    /// Read the next line
    Continue,
    /// The player quit
    Quit,
}

/// Everything a rendering collaborator needs for one frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SceneView {
    /// The room the player stands in
    pub room: RoomId,
    /// Its display name
    pub room_name: &'static str,
    /// Carried items in pickup order
    pub inventory: Vec<ItemId>,
    /// The latest narrative message
    pub message: String,
    /// Commands resolved so far
    pub turns: u64,
    /// True once the game is won
    pub won: bool,
    /// True once the player quit
    pub ended: bool,
    /// Every flag by key
    pub flags: BTreeMap<&'static str, bool>,
}

/// One playthrough.
#[derive(Clone, Debug)]
pub struct Session {
    resolver: Resolver,
    world: WorldState,
    message: String,
    turns: u64,
    quit: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Starts a playthrough of the standard game.
    ///
    /// The standard content is checked by the test suite; use
    /// [`Session::start`] for a resolver over other content.
    #[must_use]
    pub fn new() -> Self {
        Self::with_resolver(Resolver::standard())
    }

    /// Starts a playthrough without validating the resolver's content.
    fn with_resolver(resolver: Resolver) -> Self {
        let world = resolver.new_world();
        Self {
            message: resolver.table().opening().to_string(),
            resolver,
            world,
            turns: 0,
            quit: false,
        }
    }

    /// Validates the resolver's content, then starts a playthrough.
    ///
    /// # Errors
    ///
    /// Returns an invalid content error if the room table is malformed.
    pub fn start(resolver: Resolver) -> Result<Self> {
        resolver.table().validate()?;
        Ok(Self::with_resolver(resolver))
    }

    /// Resolves one raw line and commits the result.
    ///
    /// Once the game is won only quit is honoured; anything else shows the
    /// ending again. After quitting, further input is ignored.
    pub fn submit(&mut self, line: &str) -> Step {
        if self.quit {
            return Step::Quit;
        }

        let input = parse(line);
        if self.is_won() && !self.is_quit_command(&input) {
            narrative::ENDING.clone_into(&mut self.message);
            return Step::Continue;
        }

        let room_before = self.world.current_room();
        let turn = self.resolver.resolve(&input, &self.world);
        self.turns += 1;
        debug!(turn = self.turns, kind = ?turn.kind, "turn committed");

        let won_before = self.is_won();
        self.world = turn.world;
        self.message = turn.message;
        if self.world.current_room() != room_before {
            debug!(room = %self.world.current_room(), "entered room");
        }
        if !won_before && self.is_won() {
            info!(turns = self.turns, "game won");
        }

        if turn.kind == TurnKind::Quit {
            info!(turns = self.turns, "player quit");
            self.quit = true;
            return Step::Quit;
        }
        Step::Continue
    }

    fn is_quit_command(&self, input: &ParsedInput) -> bool {
        input
            .command()
            .and_then(|cmd| self.resolver.vocabulary().classify(&cmd.verb))
            == Some(VerbClass::Quit)
    }

    /// Returns the room the player stands in.
    #[must_use]
    pub fn current_room(&self) -> RoomId {
        self.world.current_room()
    }

    /// Returns the display name of the current room.
    #[must_use]
    pub fn room_name(&self) -> &'static str {
        self.resolver.table().room(self.current_room()).name
    }

    /// Iterates over carried items in pickup order.
    pub fn inventory(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.world.inventory()
    }

    /// Returns true if `flag` is raised.
    #[must_use]
    pub fn flag(&self, flag: Flag) -> bool {
        self.world.flag(flag)
    }

    /// Iterates over every flag with its value.
    pub fn flags(&self) -> impl Iterator<Item = (Flag, bool)> + '_ {
        self.world.flags()
    }

    /// Returns the latest narrative message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the number of commands resolved.
    #[must_use]
    pub fn turns(&self) -> u64 {
        self.turns
    }

    /// Returns true once the lighthouse is lit.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.world.flag(Flag::GameWon)
    }

    /// Returns true once the player quit.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.quit
    }

    /// Returns the committed snapshot.
    #[must_use]
    pub fn world(&self) -> &WorldState {
        &self.world
    }

    /// Returns the resolver.
    #[must_use]
    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    /// Captures the current state for rendering.
    #[must_use]
    pub fn scene(&self) -> SceneView {
        SceneView {
            room: self.current_room(),
            room_name: self.room_name(),
            inventory: self.inventory().collect(),
            message: self.message.clone(),
            turns: self.turns,
            won: self.is_won(),
            ended: self.quit,
            flags: self.flags().map(|(f, v)| (f.key(), v)).collect(),
        }
    }
}
