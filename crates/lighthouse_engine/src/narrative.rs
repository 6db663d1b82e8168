//! Fixed narrative text.
//!
//! Room and item text lives with the content table; this module holds the
//! replies that belong to actions.

/// Reply to blank input.
pub const EMPTY_INPUT: &str = "What would you like to do?";

/// The command summary.
pub const HELP: &str =
    "Commands: LOOK, GET, USE, TALK, GO (N/S/E/W/UP/DOWN), INVENTORY. Type LOOK <object> to examine things.";

/// Reply to quit.
pub const FAREWELL: &str = "The mist closes in behind you. Farewell, Morgan.";

/// Movement into a wall.
pub const NO_EXIT: &str = "You can't go that way.";

/// Take with nothing matching.
pub const CANT_TAKE: &str = "You can't take that.";

/// Use with no rule matching.
pub const CANT_USE: &str = "You can't use that here.";

/// Talk with nobody around.
pub const NO_ONE_HERE: &str = "There's no one here to talk to.";

/// Dig with nothing left to find.
pub const NOTHING_FOUND: &str = "You find nothing of interest.";

/// Empty inventory.
pub const EMPTY_HANDS: &str = "You aren't carrying anything.";

/// Reply when a turn hits an internal fault.
pub const NOTHING_HAPPENS: &str = "Nothing happens.";

/// Digging up the mirror shard.
pub const DIG_SHARD: &str =
    "You dig in the sand near the waterline and discover a perfectly polished mirror shard, glinting in the dim light!";

/// Taking the mirror shard from the sand.
pub const TAKE_SHARD: &str =
    "You dig in the sand near the waterline and find a perfectly polished mirror shard!";

/// The ghost's plea before receiving the coin.
pub const GHOST_PLEA: &str = "The ghost turns to you, her eyes filled with centuries of sorrow. 'Please... help us. My husband waits above, the light waits to shine again. Do you have an offering?'";

/// The ghost's reminder after receiving the coin.
pub const GHOST_HINT: &str = "'Light reunites what darkness divides. Please, restore the lighthouse.'";

/// Ringing the bell.
pub const BELL: &str = "You pull the rope and the bell rings out across the island. BONG... BONG... BONG... The sound echoes hauntingly. For a moment, you hear distant voices carried on the wind.";

/// The ending.
pub const ENDING: &str = "You hold up the lit lantern before the crystal lens. The light catches, refracts,
and BLAZES outward through the mirrors! The entire chamber fills with brilliant golden light!

Through the windows, you see the ghost ships on the horizon begin to glow. One by one,
spirits rise from the waves - sailors lost for centuries, finally free.

The ghost of Eliza appears beside you, radiant now, no longer sad. 'Thank you,' she whispers.
Another spirit joins her - Thomas, the lighthouse keeper, reunited with his love at last.

'The light will guide you home now,' they say together, and fade into the brilliant beams.

As dawn breaks, you see a ship on the horizon - a REAL ship, drawn by the lighthouse beam.
You are saved.

*** CONGRATULATIONS! YOU HAVE COMPLETED THE LIGHTHOUSE OF FORGOTTEN SOULS! ***

(Type QUIT to exit)";

/// Formats the reply for an unknown verb.
#[must_use]
pub fn not_understood(input: &str) -> String {
    format!("I don't understand '{input}'. Type HELP for commands.")
}

/// Formats the reply for looking at something absent.
#[must_use]
pub fn not_seen(object: &str) -> String {
    format!("You don't see any {object} here.")
}

/// Formats the reply for a successful take.
#[must_use]
pub fn taken(name: &str) -> String {
    format!("You take the {name}.")
}

/// Formats the inventory listing.
#[must_use]
pub fn carrying<'a>(names: impl IntoIterator<Item = &'a str>) -> String {
    let names: Vec<&str> = names.into_iter().collect();
    if names.is_empty() {
        EMPTY_HANDS.to_string()
    } else {
        format!("You are carrying: {}", names.join(", "))
    }
}
