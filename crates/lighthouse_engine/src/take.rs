//! Picking things up.

use lighthouse_foundation::{ItemId, Result, RoomId};
use tracing::info;

use crate::narrative;
use crate::turn::{Turn, TurnContext};

/// Phrases that mean digging the shard out of the beach sand.
const SAND_WORDS: [&str; 4] = ["sand", "mirror", "shard", "mirror shard"];

/// Moves an item from the room into the inventory.
///
/// The phrase is tried as an item key first ("crystal lens"), then as an
/// alias ("lens"). Either way the item must be lying in the current room.
///
/// # Errors
///
/// Returns an error if the world refuses a transfer it just reported as
/// possible.
pub(crate) fn take(ctx: &TurnContext<'_>) -> Result<Turn> {
    let object = ctx.command.object.without_leading("up");
    let here = ctx.world.current_room();

    if here == RoomId::Beach && object.is_any(&SAND_WORDS) {
        if let Some((world, item)) = ctx.world.unearth(here) {
            info!(%item, room = %here, "item unearthed");
            return Ok(Turn::succeeded(narrative::TAKE_SHARD, world));
        }
    }

    let in_room = |item: &ItemId| ctx.world.room_has(here, *item);
    let item = object
        .key()
        .parse::<ItemId>()
        .ok()
        .filter(in_room)
        .or_else(|| ctx.table.item_by_alias(object.as_str()).filter(in_room));

    let Some(item) = item else {
        return Ok(ctx.refuse(narrative::CANT_TAKE));
    };

    let world = ctx.world.take_from_room(here, item)?;
    info!(%item, room = %here, "item taken");
    Ok(Turn::succeeded(narrative::taken(item.display_name()), world))
}
