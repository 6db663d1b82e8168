//! Movement directions.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, ErrorKind};

/// One of the six canonical movement directions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Direction {
    /// `north` / `n`
    North,
    /// `south` / `s`
    South,
    /// `east` / `e`
    East,
    /// `west` / `w`
    West,
    /// `up` / `u`
    Up,
    /// `down` / `d`
    Down,
}

impl Direction {
    /// Every direction.
    pub const ALL: [Direction; 6] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
        Direction::Up,
        Direction::Down,
    ];

    /// Returns the full direction word.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }

    /// Returns the single-letter shorthand.
    #[must_use]
    pub const fn shorthand(self) -> &'static str {
        match self {
            Direction::North => "n",
            Direction::South => "s",
            Direction::East => "e",
            Direction::West => "w",
            Direction::Up => "u",
            Direction::Down => "d",
        }
    }

    /// Looks up a direction by full name or shorthand.
    #[must_use]
    pub fn from_word(word: &str) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|dir| dir.name() == word || dir.shorthand() == word)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Direction::from_word(s)
            .ok_or_else(|| Error::new(ErrorKind::UnknownDirection(s.to_string())))
    }
}
