//! Resolver tests.

use lighthouse_engine::{Resolver, TurnKind, narrative};
use lighthouse_foundation::{Flag, ItemId, RoomId};

use crate::play;

// =============================================================================
// Meta Commands
// =============================================================================

#[test]
fn blank_input_prompts() {
    let turn = play(&["   "]);
    assert_eq!(turn.kind, TurnKind::Empty);
    assert_eq!(turn.message, narrative::EMPTY_INPUT);
}

#[test]
fn unknown_verb_echoes_raw_input() {
    let turn = play(&["Frobnicate the SKY"]);
    assert_eq!(turn.kind, TurnKind::Unrecognized);
    assert_eq!(
        turn.message,
        "I don't understand 'Frobnicate the SKY'. Type HELP for commands."
    );
    assert_eq!(turn.world, Resolver::standard().new_world());
}

#[test]
fn help_and_question_mark_agree() {
    assert_eq!(play(&["help"]).message, narrative::HELP);
    assert_eq!(play(&["?"]).message, narrative::HELP);
}

#[test]
fn quit_says_farewell() {
    let turn = play(&["q"]);
    assert!(turn.is_quit());
    assert_eq!(turn.message, narrative::FAREWELL);
}

// =============================================================================
// Movement
// =============================================================================

#[test]
fn shorthand_and_long_form_move_alike() {
    let short = play(&["n"]);
    let long = play(&["go north"]);
    let bare = play(&["NORTH"]);
    assert_eq!(short.world.current_room(), RoomId::Path);
    assert_eq!(short.world, long.world);
    assert_eq!(long.world, bare.world);
    assert_eq!(short.message, long.message);
}

#[test]
fn walls_refuse() {
    let turn = play(&["west"]);
    assert_eq!(turn.kind, TurnKind::Refused);
    assert_eq!(turn.message, narrative::NO_EXIT);
    assert_eq!(turn.world.current_room(), RoomId::Beach);
}

#[test]
fn crab_blocks_the_cave() {
    let turn = play(&["e", "n"]);
    assert_eq!(turn.kind, TurnKind::Refused);
    assert!(turn.message.contains("crab blocks your path"));
    assert_eq!(turn.world.current_room(), RoomId::Cliffs);
}

#[test]
fn locked_door_blocks_entry() {
    let turn = play(&["n", "n", "enter"]);
    assert_eq!(turn.message, "The lighthouse door is locked. You'll need a key.");
    assert_eq!(turn.world.current_room(), RoomId::LighthouseExterior);
}

// =============================================================================
// Looking and Taking
// =============================================================================

#[test]
fn look_at_feature() {
    let turn = play(&["look at the ship"]);
    assert!(turn.message.starts_with("The wreckage of the \"Maiden's Hope\"."));
}

#[test]
fn look_at_missing_thing() {
    let turn = play(&["examine unicorn"]);
    assert_eq!(turn.kind, TurnKind::Refused);
    assert_eq!(turn.message, "You don't see any unicorn here.");
}

#[test]
fn reading_the_journal_raises_a_flag() {
    let resolver = Resolver::standard();
    let world = resolver
        .new_world()
        .raise(Flag::LighthouseDoorOpen)
        .move_to(RoomId::LighthouseInterior);
    let turn = resolver.resolve_line("read journal", &world);
    assert!(turn.message.contains("Thomas Blackwood"));
    assert!(turn.world.flag(Flag::ReadJournal));
}

#[test]
fn carried_lantern_describes_its_state() {
    let resolver = Resolver::standard();
    let world = resolver
        .new_world()
        .move_to(RoomId::LighthouseInterior)
        .take_from_room(RoomId::LighthouseInterior, ItemId::Lantern)
        .unwrap()
        .move_to(RoomId::Beach);
    let dark = resolver.resolve_line("look lantern", &world);
    assert_eq!(dark.message, "A brass lantern. It needs oil and a flame.");
    let lit = resolver.resolve_line("look lantern", &world.raise(Flag::LanternLit));
    assert_eq!(lit.message, "A brass lantern. It glows with a warm flame.");
}

#[test]
fn take_twice() {
    let first = play(&["take rope"]);
    assert_eq!(first.message, "You take the rope.");
    let second = play(&["take rope", "take rope"]);
    assert_eq!(second.kind, TurnKind::Refused);
    assert_eq!(second.message, narrative::CANT_TAKE);
    assert_eq!(second.world.inventory_len(), 1);
}

#[test]
fn take_by_alias_and_full_name() {
    let resolver = Resolver::standard();
    let world = resolver
        .new_world()
        .raise(Flag::CrabMoved)
        .move_to(RoomId::Cave);
    let by_alias = resolver.resolve_line("get lens", &world);
    let by_name = resolver.resolve_line("pick up the crystal lens", &world);
    assert_eq!(by_alias.world, by_name.world);
    assert!(by_alias.world.holds(ItemId::CrystalLens));
}

#[test]
fn shard_is_dug_up_once() {
    let dug = play(&["dig"]);
    assert_eq!(dug.message, narrative::DIG_SHARD);
    assert!(dug.world.holds(ItemId::MirrorShard));

    let again = play(&["dig", "take shard"]);
    assert_eq!(again.message, narrative::CANT_TAKE);
    let nothing = play(&["dig", "dig"]);
    assert_eq!(nothing.message, narrative::NOTHING_FOUND);
}

#[test]
fn taking_sand_unearths_the_shard() {
    let turn = play(&["take mirror shard"]);
    assert_eq!(turn.message, narrative::TAKE_SHARD);
    assert!(turn.world.holds(ItemId::MirrorShard));
}

#[test]
fn inventory_lists_in_pickup_order() {
    let turn = play(&["take rope", "take driftwood", "i"]);
    assert_eq!(turn.message, "You are carrying: rope, driftwood");
    assert_eq!(play(&["inventory"]).message, narrative::EMPTY_HANDS);
}

// =============================================================================
// Talking and Ringing
// =============================================================================

#[test]
fn nobody_to_talk_to_on_the_beach() {
    assert_eq!(play(&["talk"]).message, narrative::NO_ONE_HERE);
}

#[test]
fn ghost_pleads_until_offered_the_coin() {
    assert_eq!(play(&["n", "talk to ghost"]).message, narrative::GHOST_PLEA);
}

#[test]
fn bell_rings_only_at_the_lighthouse() {
    let rung = play(&["n", "n", "ring bell"]);
    assert_eq!(rung.message, narrative::BELL);
    assert!(rung.world.flag(Flag::BellRung));

    let nowhere = play(&["ring bell"]);
    assert_eq!(nowhere.kind, TurnKind::Unrecognized);
    assert!(!nowhere.world.flag(Flag::BellRung));
}
