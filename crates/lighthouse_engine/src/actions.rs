//! Talking, ringing, digging and the meta commands.

use lighthouse_foundation::{Flag, Result, RoomId};
use tracing::info;

use crate::narrative;
use crate::turn::{Turn, TurnContext, TurnKind};

/// Words that ring the bell.
const BELL_WORDS: &[&str] = &["bell", "rope"];

/// Speaks to the ghost on the path.
pub(crate) fn talk(ctx: &TurnContext<'_>) -> Result<Turn> {
    if ctx.world.current_room() != RoomId::Path {
        return Ok(ctx.refuse(narrative::NO_ONE_HERE));
    }
    let reply = if ctx.world.flag(Flag::TalkedToGhost) {
        narrative::GHOST_HINT
    } else {
        narrative::GHOST_PLEA
    };
    Ok(Turn::succeeded(reply, ctx.world.clone()))
}

/// Rings the bell outside the lighthouse.
///
/// Anything other than ringing the bell there is not understood.
pub(crate) fn ring(ctx: &TurnContext<'_>) -> Result<Turn> {
    if ctx.world.current_room() == RoomId::LighthouseExterior
        && ctx.command.object.mentions(BELL_WORDS)
    {
        if !ctx.world.flag(Flag::BellRung) {
            info!(flag = %Flag::BellRung, "flag raised");
        }
        return Ok(Turn::succeeded(
            narrative::BELL,
            ctx.world.raise(Flag::BellRung),
        ));
    }
    Ok(ctx.not_understood())
}

/// Digs in the ground. Only the beach hides anything, and only once.
pub(crate) fn dig(ctx: &TurnContext<'_>) -> Result<Turn> {
    let here = ctx.world.current_room();
    if here == RoomId::Beach {
        if let Some((world, item)) = ctx.world.unearth(here) {
            info!(%item, room = %here, "item unearthed");
            return Ok(Turn::succeeded(narrative::DIG_SHARD, world));
        }
    }
    Ok(ctx.refuse(narrative::NOTHING_FOUND))
}

/// Lists carried items in pickup order.
pub(crate) fn inventory(ctx: &TurnContext<'_>) -> Result<Turn> {
    let listing = narrative::carrying(ctx.world.inventory().map(|item| item.display_name()));
    Ok(Turn::succeeded(listing, ctx.world.clone()))
}

/// Shows the command summary.
pub(crate) fn help(ctx: &TurnContext<'_>) -> Result<Turn> {
    Ok(Turn::succeeded(narrative::HELP, ctx.world.clone()))
}

/// Ends the session.
pub(crate) fn quit(ctx: &TurnContext<'_>) -> Result<Turn> {
    Ok(Turn::new(
        TurnKind::Quit,
        narrative::FAREWELL,
        ctx.world.clone(),
    ))
}
