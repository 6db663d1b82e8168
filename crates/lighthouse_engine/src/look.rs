//! Looking around and examining things.

use lighthouse_foundation::{Flag, Result};

use crate::narrative;
use crate::turn::{Turn, TurnContext};

/// The examine key that counts as reading the journal.
const JOURNAL_KEY: &str = "journal";

/// Describes the room, a feature of it, or a carried item.
///
/// Room features win over carried items. A carried item matches when its
/// display name contains the whole phrase, so "look lens" finds the crystal
/// lens.
pub(crate) fn look(ctx: &TurnContext<'_>) -> Result<Turn> {
    let object = ctx.command.object.without_leading("at");
    let room = ctx.room();

    if object.is_empty() || object.is_any(&["around", "room"]) {
        return Ok(Turn::succeeded(room.description, ctx.world.clone()));
    }

    let key = object.key();
    if let Some(text) = room.examine_text(&key) {
        let world = if key == JOURNAL_KEY {
            ctx.world.raise(Flag::ReadJournal)
        } else {
            ctx.world.clone()
        };
        return Ok(Turn::succeeded(text, world));
    }

    let carried = ctx
        .world
        .inventory()
        .find(|item| item.display_name().contains(object.as_str()));
    if let Some(item) = carried {
        let text = ctx.table.item(item).describe(|f| ctx.world.flag(f));
        return Ok(Turn::succeeded(text, ctx.world.clone()));
    }

    Ok(ctx.refuse(narrative::not_seen(object.as_str())))
}
