//! End-to-end tests
//!
//! Whole playthroughs through the session controller and the REPL.

mod playthrough;
mod properties;
mod repl;

/// Every step of a winning game.
pub const WALKTHROUGH: &[&str] = &[
    "dig",
    "n",
    "e",
    "take matches",
    "take apple",
    "n",
    "take oil",
    "take key",
    "s",
    "w",
    "s",
    "e",
    "use apple",
    "n",
    "take lens",
    "take coin",
    "s",
    "w",
    "n",
    "give coin to ghost",
    "n",
    "use key",
    "n",
    "take lantern",
    "use oil on lantern",
    "light lantern",
    "u",
    "u",
    "install lens",
    "place mirror",
    "use lantern",
];
