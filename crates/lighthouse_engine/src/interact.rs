//! Using, combining and giving items.
//!
//! Interactions are an ordered table of [`InteractionRule`]s. The first rule
//! whose trigger matches the command owns it: its branches are tried in
//! order, the first branch whose conditions all hold applies its effects, and
//! if none holds the rule's failure message is the reply. Effects only ever
//! run on a successful branch.

use lighthouse_foundation::{Flag, ItemId, Result, RoomId};
use lighthouse_parser::Command;
use lighthouse_world::WorldState;
use tracing::{debug, info};

use crate::narrative;
use crate::turn::{Turn, TurnContext};

// =============================================================================
// Rule Types
// =============================================================================

/// Something that must hold for a branch to apply.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Condition {
    /// The player carries the item
    Holds(ItemId),
    /// The flag is raised
    Raised(Flag),
    /// The flag is still lowered
    Lowered(Flag),
}

impl Condition {
    /// Evaluates the condition against a snapshot.
    #[must_use]
    pub fn holds(self, world: &WorldState) -> bool {
        match self {
            Condition::Holds(item) => world.holds(item),
            Condition::Raised(flag) => world.flag(flag),
            Condition::Lowered(flag) => !world.flag(flag),
        }
    }
}

/// A state change made by a successful branch.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Use up a carried item
    Consume(ItemId),
    /// Raise a flag
    Raise(Flag),
}

impl Effect {
    fn apply(self, world: &WorldState) -> Result<WorldState> {
        match self {
            Effect::Consume(item) => {
                let next = world.consume(item)?;
                info!(%item, "item consumed");
                Ok(next)
            }
            Effect::Raise(flag) => {
                if !world.flag(flag) {
                    info!(%flag, "flag raised");
                }
                Ok(world.raise(flag))
            }
        }
    }
}

/// One outcome of a rule.
#[derive(Debug)]
pub struct Branch {
    /// All must hold
    pub requires: &'static [Condition],
    /// Applied in order; a branch with none is a hint
    pub effects: &'static [Effect],
    /// Reply when this branch applies
    pub message: &'static str,
}

/// A guarded interaction.
#[derive(Debug)]
pub struct InteractionRule {
    /// Short name for logs
    pub name: &'static str,
    /// Whether this rule owns the command
    pub trigger: fn(&Command, &WorldState) -> bool,
    /// Outcomes, most specific first
    pub branches: &'static [Branch],
    /// Reply when no branch holds
    pub failure: &'static str,
}

impl InteractionRule {
    /// Returns true if this rule owns the command.
    #[must_use]
    pub fn triggers(&self, command: &Command, world: &WorldState) -> bool {
        (self.trigger)(command, world)
    }

    /// Picks the first branch whose conditions hold.
    #[must_use]
    pub fn branch(&self, world: &WorldState) -> Option<&Branch> {
        self.branches
            .iter()
            .find(|b| b.requires.iter().all(|c| c.holds(world)))
    }

    /// Applies the rule to a snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if an effect names an item the world no longer has.
    pub fn apply(&self, world: &WorldState) -> Result<Turn> {
        let Some(branch) = self.branch(world) else {
            return Ok(Turn::refused(self.failure, world));
        };
        if branch.effects.is_empty() {
            return Ok(Turn::refused(branch.message, world));
        }
        let mut next = world.clone();
        for effect in branch.effects {
            next = effect.apply(&next)?;
        }
        Ok(Turn::succeeded(branch.message, next))
    }
}

// =============================================================================
// Triggers
// =============================================================================

const KEY_WORDS: &[&str] = &["key", "small_key"];
const OIL_WORDS: &[&str] = &["oil"];
const MATCH_WORDS: &[&str] = &["match", "matches"];
const LIGHT_VERBS: &[&str] = &["light", "strike"];
const LANTERN_WORDS: &[&str] = &["lantern", "lamp"];
const CRAB_WORDS: &[&str] = &["crab", "apple", "driftwood", "wood"];
const LENS_WORDS: &[&str] = &["lens", "crystal"];
const MIRROR_WORDS: &[&str] = &["mirror", "shard"];
const GHOST_WORDS: &[&str] = &["coin", "ghost"];

fn at(world: &WorldState, room: RoomId) -> bool {
    world.current_room() == room
}

fn key_in_door(cmd: &Command, world: &WorldState) -> bool {
    at(world, RoomId::LighthouseExterior) && cmd.object.mentions(KEY_WORDS)
}

fn oil_in_lantern(cmd: &Command, _: &WorldState) -> bool {
    cmd.object.mentions(OIL_WORDS)
}

fn light_lantern(cmd: &Command, world: &WorldState) -> bool {
    let striking = cmd.object.mentions(MATCH_WORDS) || LIGHT_VERBS.contains(&cmd.verb.as_str());
    striking && (cmd.object.mentions(LANTERN_WORDS) || world.holds(ItemId::Lantern))
}

fn distract_crab(cmd: &Command, world: &WorldState) -> bool {
    at(world, RoomId::Cliffs) && cmd.object.mentions(CRAB_WORDS)
}

fn install_lens(cmd: &Command, world: &WorldState) -> bool {
    at(world, RoomId::LightChamber) && cmd.object.mentions(LENS_WORDS)
}

fn place_mirror(cmd: &Command, world: &WorldState) -> bool {
    at(world, RoomId::LightChamber) && cmd.object.mentions(MIRROR_WORDS)
}

fn light_beacon(cmd: &Command, world: &WorldState) -> bool {
    at(world, RoomId::LightChamber) && cmd.object.mentions(LANTERN_WORDS)
}

fn offer_coin(cmd: &Command, world: &WorldState) -> bool {
    at(world, RoomId::Path) && cmd.object.mentions(GHOST_WORDS)
}

// =============================================================================
// Standard Rules
// =============================================================================

/// The interaction table of The Lighthouse of Forgotten Souls, in priority order.
pub static STANDARD_RULES: [InteractionRule; 8] = [
    InteractionRule {
        name: "unlock-door",
        trigger: key_in_door,
        branches: &[Branch {
            requires: &[Condition::Holds(ItemId::SmallKey)],
            effects: &[Effect::Raise(Flag::LighthouseDoorOpen)],
            message: "The key fits! The heavy door swings open with a groan, revealing the dark interior.",
        }],
        failure: "You don't have a key.",
    },
    InteractionRule {
        name: "fill-lantern",
        trigger: oil_in_lantern,
        branches: &[Branch {
            requires: &[
                Condition::Holds(ItemId::OilCan),
                Condition::Holds(ItemId::Lantern),
            ],
            effects: &[
                Effect::Consume(ItemId::OilCan),
                Effect::Raise(Flag::LanternFilled),
            ],
            message: "You fill the lantern with oil. Now you just need to light it.",
        }],
        failure: "You need both the oil can and the lantern.",
    },
    InteractionRule {
        name: "light-lantern",
        trigger: light_lantern,
        branches: &[
            Branch {
                requires: &[
                    Condition::Holds(ItemId::Matches),
                    Condition::Holds(ItemId::Lantern),
                    Condition::Holds(ItemId::OilCan),
                ],
                effects: &[],
                message: "The lantern needs oil first.",
            },
            Branch {
                requires: &[
                    Condition::Holds(ItemId::Matches),
                    Condition::Holds(ItemId::Lantern),
                ],
                effects: &[
                    Effect::Raise(Flag::LanternLit),
                    Effect::Consume(ItemId::Matches),
                ],
                message: "You strike a match and light the lantern. It casts a warm, steady glow.",
            },
        ],
        failure: "You need matches and a lantern.",
    },
    InteractionRule {
        name: "distract-crab",
        trigger: distract_crab,
        branches: &[
            Branch {
                requires: &[Condition::Holds(ItemId::Apple)],
                effects: &[
                    Effect::Consume(ItemId::Apple),
                    Effect::Raise(Flag::CrabMoved),
                    Effect::Raise(Flag::FoundSecretCave),
                ],
                message: "You toss the apple away from the cave. The crab scuttles after it eagerly! The path to the cave is now clear.",
            },
            Branch {
                requires: &[Condition::Holds(ItemId::Driftwood)],
                effects: &[],
                message: "You wave the driftwood at the crab but it just snaps at it angrily. Maybe food would work better?",
            },
        ],
        failure: "You have nothing to distract the crab with.",
    },
    InteractionRule {
        name: "install-lens",
        trigger: install_lens,
        branches: &[Branch {
            requires: &[Condition::Holds(ItemId::CrystalLens)],
            effects: &[
                Effect::Consume(ItemId::CrystalLens),
                Effect::Raise(Flag::LensInstalled),
            ],
            message: "You carefully place the crystal lens into the housing. It fits perfectly! Now if only there was light to focus...",
        }],
        failure: "You don't have the crystal lens.",
    },
    InteractionRule {
        name: "place-mirror",
        trigger: place_mirror,
        branches: &[Branch {
            requires: &[Condition::Holds(ItemId::MirrorShard)],
            effects: &[
                Effect::Consume(ItemId::MirrorShard),
                Effect::Raise(Flag::MirrorPlaced),
            ],
            message: "You place the mirror shard in the empty bracket. It fits perfectly, as if it was always meant to be here.",
        }],
        failure: "You don't have the mirror shard.",
    },
    InteractionRule {
        name: "light-beacon",
        trigger: light_beacon,
        branches: &[
            Branch {
                requires: &[
                    Condition::Holds(ItemId::Lantern),
                    Condition::Raised(Flag::LanternLit),
                    Condition::Raised(Flag::LensInstalled),
                    Condition::Raised(Flag::MirrorPlaced),
                ],
                effects: &[
                    Effect::Raise(Flag::LighthouseLit),
                    Effect::Raise(Flag::GameWon),
                ],
                message: narrative::ENDING,
            },
            Branch {
                requires: &[
                    Condition::Holds(ItemId::Lantern),
                    Condition::Raised(Flag::LanternLit),
                    Condition::Lowered(Flag::LensInstalled),
                ],
                effects: &[],
                message: "You hold the lantern up but without a lens, the light won't focus properly.",
            },
            Branch {
                requires: &[
                    Condition::Holds(ItemId::Lantern),
                    Condition::Raised(Flag::LanternLit),
                ],
                effects: &[],
                message: "You hold the lantern up but one of the mirror brackets is empty. The light won't reach far enough.",
            },
        ],
        failure: "You need a lit lantern to light the lighthouse.",
    },
    InteractionRule {
        name: "offer-coin",
        trigger: offer_coin,
        branches: &[Branch {
            requires: &[Condition::Holds(ItemId::AncientCoin)],
            effects: &[
                Effect::Consume(ItemId::AncientCoin),
                Effect::Raise(Flag::TalkedToGhost),
            ],
            message: "You offer the ancient coin to the ghost. She takes it, and for a moment becomes solid. 'Thank you, kind sailor. My husband Thomas kept this lighthouse for me. Find the lens in the sea cave, the mirror where you woke, and reunite us.' She fades, but you feel her gratitude.",
        }],
        failure: "You have nothing to give.",
    },
];

/// Resolves a use command against a rule table.
///
/// # Errors
///
/// Returns an error if the matching rule's effects fail to apply.
pub fn interact(ctx: &TurnContext<'_>, rules: &[InteractionRule]) -> Result<Turn> {
    match rules
        .iter()
        .find(|rule| rule.triggers(ctx.command, ctx.world))
    {
        Some(rule) => {
            debug!(rule = rule.name, "interaction rule matched");
            rule.apply(ctx.world)
        }
        None => Ok(ctx.refuse(narrative::CANT_USE)),
    }
}
