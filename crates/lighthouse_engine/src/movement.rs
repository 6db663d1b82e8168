//! Movement between rooms.

use lighthouse_foundation::{Direction, Result, RoomId};
use tracing::info;

use crate::narrative;
use crate::turn::{Turn, TurnContext};

/// Words that mean "north" while standing at the lighthouse door.
const DOOR_WORDS: [&str; 3] = ["enter", "door", "lighthouse"];

/// Normalises the command into a direction.
///
/// The object is the direction if there is one ("go north"), otherwise the
/// verb itself ("n", "up").
fn direction(ctx: &TurnContext<'_>) -> Option<Direction> {
    let command = ctx.command;
    let word = if command.has_object() {
        command.object.as_str()
    } else {
        command.verb.as_str()
    };
    Direction::from_word(word).or_else(|| {
        (ctx.world.current_room() == RoomId::LighthouseExterior && DOOR_WORDS.contains(&word))
            .then_some(Direction::North)
    })
}

/// Moves the player, honouring gates.
///
/// Entering a room only describes it; it never fires events of its own.
pub(crate) fn go(ctx: &TurnContext<'_>) -> Result<Turn> {
    let Some(direction) = direction(ctx) else {
        return Ok(ctx.refuse(narrative::NO_EXIT));
    };
    let here = ctx.world.current_room();

    if let Some(gate) = ctx.table.gate(here, direction) {
        if !ctx.world.flag(gate.opened_by) {
            return Ok(ctx.refuse(gate.refusal));
        }
    }

    match ctx.room().exit(direction) {
        Some(to) => {
            info!(from = %here, to = %to, %direction, "room change");
            Ok(Turn::succeeded(
                ctx.table.room(to).description,
                ctx.world.move_to(to),
            ))
        }
        None => Ok(ctx.refuse(narrative::NO_EXIT)),
    }
}
