//! Command resolution.
//!
//! The resolver classifies the verb, hands the command to the matching
//! handler and returns a [`Turn`]. It never mutates anything: the caller
//! decides whether to commit the turn's snapshot.

use lighthouse_foundation::Result;
use lighthouse_parser::{ParsedInput, VerbClass, Vocabulary};
use lighthouse_world::{RoomTable, WorldState};
use tracing::{debug, error};

use crate::interact::{InteractionRule, STANDARD_RULES, interact};
use crate::narrative;
use crate::turn::{Turn, TurnContext};
use crate::{actions, look, movement, take};

/// Maps parsed commands to state transitions and narrative.
#[derive(Clone, Copy, Debug)]
pub struct Resolver {
    table: &'static RoomTable,
    vocabulary: &'static Vocabulary,
    rules: &'static [InteractionRule],
}

impl Default for Resolver {
    fn default() -> Self {
        Self::standard()
    }
}

impl Resolver {
    /// Creates a resolver over custom content.
    #[must_use]
    pub fn new(
        table: &'static RoomTable,
        vocabulary: &'static Vocabulary,
        rules: &'static [InteractionRule],
    ) -> Self {
        Self {
            table,
            vocabulary,
            rules,
        }
    }

    /// Creates the resolver for The Lighthouse of Forgotten Souls.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(RoomTable::standard(), Vocabulary::standard(), &STANDARD_RULES)
    }

    /// Returns the content table.
    #[must_use]
    pub fn table(&self) -> &'static RoomTable {
        self.table
    }

    /// Returns the verb vocabulary.
    #[must_use]
    pub fn vocabulary(&self) -> &'static Vocabulary {
        self.vocabulary
    }

    /// Returns a fresh world for this resolver's content.
    #[must_use]
    pub fn new_world(&self) -> WorldState {
        WorldState::new(self.table)
    }

    /// Resolves one parsed command against a snapshot.
    ///
    /// Handlers are tried in a fixed priority order by verb class. An
    /// internal fault is logged and answered with a refusal that keeps
    /// `world` unchanged.
    #[must_use]
    pub fn resolve(&self, input: &ParsedInput, world: &WorldState) -> Turn {
        let ParsedInput::Command(command) = input else {
            return Turn::empty(world);
        };
        let Some(class) = self.vocabulary.classify(&command.verb) else {
            debug!(verb = %command.verb, "unrecognized verb");
            return Turn::unrecognized(&command.raw, world);
        };

        let ctx = TurnContext {
            table: self.table,
            world,
            command,
        };
        match self.dispatch(class, &ctx) {
            Ok(turn) => {
                debug!(
                    verb = %command.verb,
                    %class,
                    kind = ?turn.kind,
                    room = %turn.world.current_room(),
                    "turn resolved"
                );
                turn
            }
            Err(e) => {
                error!(error = %e, input = %command.raw, "turn failed");
                Turn::refused(narrative::NOTHING_HAPPENS, world)
            }
        }
    }

    fn dispatch(&self, class: VerbClass, ctx: &TurnContext<'_>) -> Result<Turn> {
        match class {
            VerbClass::Move => movement::go(ctx),
            VerbClass::Look => look::look(ctx),
            VerbClass::Take => take::take(ctx),
            VerbClass::Use => interact(ctx, self.rules),
            VerbClass::Talk => actions::talk(ctx),
            VerbClass::Ring => actions::ring(ctx),
            VerbClass::Dig => actions::dig(ctx),
            VerbClass::Inventory => actions::inventory(ctx),
            VerbClass::Help => actions::help(ctx),
            VerbClass::Quit => actions::quit(ctx),
        }
    }

    /// Parses and resolves a raw line.
    #[must_use]
    pub fn resolve_line(&self, raw: &str, world: &WorldState) -> Turn {
        self.resolve(&lighthouse_parser::parse(raw), world)
    }
}
