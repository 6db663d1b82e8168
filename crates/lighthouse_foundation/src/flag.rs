//! Story flags.
//!
//! A flag marks irreversible story progress. Flags start lowered and can only
//! be raised; nothing in the engine lowers one again.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, ErrorKind};

/// A one-way boolean marking story progress.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Flag {
    /// The ghost accepted the coin.
    TalkedToGhost,
    /// The small key opened the lighthouse door.
    LighthouseDoorOpen,
    /// The lantern has been filled with oil.
    LanternFilled,
    /// The lantern is burning.
    LanternLit,
    /// The mirror shard sits in the empty bracket.
    MirrorPlaced,
    /// The crystal lens sits in the housing.
    LensInstalled,
    /// The great light is burning again.
    LighthouseLit,
    /// The crab left the cave entrance.
    CrabMoved,
    /// The cave behind the crab has been revealed.
    FoundSecretCave,
    /// The keeper's journal has been read.
    ReadJournal,
    /// The bronze bell has been rung.
    BellRung,
    /// Terminal: the ending is playing.
    GameWon,
}

impl Flag {
    /// Every flag, in declaration order.
    pub const ALL: [Flag; 12] = [
        Flag::TalkedToGhost,
        Flag::LighthouseDoorOpen,
        Flag::LanternFilled,
        Flag::LanternLit,
        Flag::MirrorPlaced,
        Flag::LensInstalled,
        Flag::LighthouseLit,
        Flag::CrabMoved,
        Flag::FoundSecretCave,
        Flag::ReadJournal,
        Flag::BellRung,
        Flag::GameWon,
    ];

    /// Returns the stable snake_case key.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Flag::TalkedToGhost => "talked_to_ghost",
            Flag::LighthouseDoorOpen => "lighthouse_door_open",
            Flag::LanternFilled => "lantern_filled",
            Flag::LanternLit => "lantern_lit",
            Flag::MirrorPlaced => "mirror_placed",
            Flag::LensInstalled => "lens_installed",
            Flag::LighthouseLit => "lighthouse_lit",
            Flag::CrabMoved => "crab_moved",
            Flag::FoundSecretCave => "found_secret_cave",
            Flag::ReadJournal => "read_journal",
            Flag::BellRung => "bell_rung",
            Flag::GameWon => "game_won",
        }
    }

    /// Returns true for flags that only colour the narrative and gate nothing.
    #[must_use]
    pub const fn is_flavor(self) -> bool {
        matches!(
            self,
            Flag::ReadJournal | Flag::BellRung | Flag::FoundSecretCave
        )
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Flag {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Flag::ALL
            .into_iter()
            .find(|flag| flag.key() == s)
            .ok_or_else(|| Error::new(ErrorKind::UnknownFlag(s.to_string())))
    }
}
