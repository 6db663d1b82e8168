//! Symbolic identifiers for rooms and items.
//!
//! Content is a fixed, hand-authored table, so identifiers are closed enums
//! rather than allocated handles. Each variant has a stable snake_case key
//! that doubles as its external name (rendering collaborators, config, dumps).

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, ErrorKind};

/// Identifier of a room in the navigation graph.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum RoomId {
    /// Where the player washes ashore.
    Beach,
    /// The crab-guarded ledge east of the beach.
    Cliffs,
    /// The sea cave behind the crab.
    Cave,
    /// The winding path with the ghost.
    Path,
    /// The overgrown garden.
    Garden,
    /// The tool shed north of the garden.
    Shed,
    /// Outside the lighthouse door.
    LighthouseExterior,
    /// Ground floor of the lighthouse.
    LighthouseInterior,
    /// The spiral staircase.
    LighthouseStairs,
    /// The lamp room at the top.
    LightChamber,
}

impl RoomId {
    /// Every room, in table order.
    pub const ALL: [RoomId; 10] = [
        RoomId::Beach,
        RoomId::Cliffs,
        RoomId::Cave,
        RoomId::Path,
        RoomId::Garden,
        RoomId::Shed,
        RoomId::LighthouseExterior,
        RoomId::LighthouseInterior,
        RoomId::LighthouseStairs,
        RoomId::LightChamber,
    ];

    /// Returns the stable snake_case key.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            RoomId::Beach => "beach",
            RoomId::Cliffs => "cliffs",
            RoomId::Cave => "cave",
            RoomId::Path => "path",
            RoomId::Garden => "garden",
            RoomId::Shed => "shed",
            RoomId::LighthouseExterior => "lighthouse_exterior",
            RoomId::LighthouseInterior => "lighthouse_interior",
            RoomId::LighthouseStairs => "lighthouse_stairs",
            RoomId::LightChamber => "light_chamber",
        }
    }

    /// Returns the position of this room in [`RoomId::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for RoomId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RoomId::ALL
            .into_iter()
            .find(|room| room.key() == s)
            .ok_or_else(|| Error::new(ErrorKind::UnknownRoom(s.to_string())))
    }
}

/// Identifier of a portable item.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum ItemId {
    /// Sturdy driftwood from the beach.
    Driftwood,
    /// A length of rope from the beach.
    Rope,
    /// The lighthouse lens, found in the cave.
    CrystalLens,
    /// The offering for the ghost.
    AncientCoin,
    /// A box of matches.
    Matches,
    /// Bait for the crab.
    Apple,
    /// Lamp oil.
    OilCan,
    /// Opens the lighthouse door.
    SmallKey,
    /// The keeper's lantern.
    Lantern,
    /// The keeper's journal.
    Journal,
    /// The buried mirror shard.
    MirrorShard,
}

impl ItemId {
    /// Every item, in table order.
    pub const ALL: [ItemId; 11] = [
        ItemId::Driftwood,
        ItemId::Rope,
        ItemId::CrystalLens,
        ItemId::AncientCoin,
        ItemId::Matches,
        ItemId::Apple,
        ItemId::OilCan,
        ItemId::SmallKey,
        ItemId::Lantern,
        ItemId::Journal,
        ItemId::MirrorShard,
    ];

    /// Returns the stable snake_case key.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            ItemId::Driftwood => "driftwood",
            ItemId::Rope => "rope",
            ItemId::CrystalLens => "crystal_lens",
            ItemId::AncientCoin => "ancient_coin",
            ItemId::Matches => "matches",
            ItemId::Apple => "apple",
            ItemId::OilCan => "oil_can",
            ItemId::SmallKey => "small_key",
            ItemId::Lantern => "lantern",
            ItemId::Journal => "journal",
            ItemId::MirrorShard => "mirror_shard",
        }
    }

    /// Returns the human-readable name (the key with spaces for underscores).
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            ItemId::CrystalLens => "crystal lens",
            ItemId::AncientCoin => "ancient coin",
            ItemId::OilCan => "oil can",
            ItemId::SmallKey => "small key",
            ItemId::MirrorShard => "mirror shard",
            other => other.key(),
        }
    }

    /// Returns the position of this item in [`ItemId::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ItemId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ItemId::ALL
            .into_iter()
            .find(|item| item.key() == s)
            .ok_or_else(|| Error::new(ErrorKind::UnknownItem(s.to_string())))
    }
}
