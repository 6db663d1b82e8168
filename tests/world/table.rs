//! Room table tests.

use lighthouse_foundation::{Direction, Flag, ItemId, RoomId};
use lighthouse_world::RoomTable;

// =============================================================================
// Navigation Graph
// =============================================================================

#[test]
fn every_room_has_a_name_and_description() {
    let table = RoomTable::standard();
    for room in table.rooms() {
        assert!(!room.name.is_empty(), "{} has no name", room.id);
        assert!(!room.description.is_empty(), "{} has no description", room.id);
    }
}

#[test]
fn graph_matches_the_island() {
    let table = RoomTable::standard();
    let expected = [
        (RoomId::Beach, Direction::North, RoomId::Path),
        (RoomId::Beach, Direction::East, RoomId::Cliffs),
        (RoomId::Cliffs, Direction::West, RoomId::Beach),
        (RoomId::Cliffs, Direction::North, RoomId::Cave),
        (RoomId::Cave, Direction::South, RoomId::Cliffs),
        (RoomId::Path, Direction::South, RoomId::Beach),
        (RoomId::Path, Direction::North, RoomId::LighthouseExterior),
        (RoomId::Path, Direction::East, RoomId::Garden),
        (RoomId::Garden, Direction::West, RoomId::Path),
        (RoomId::Garden, Direction::North, RoomId::Shed),
        (RoomId::Shed, Direction::South, RoomId::Garden),
        (RoomId::LighthouseExterior, Direction::South, RoomId::Path),
        (RoomId::LighthouseExterior, Direction::North, RoomId::LighthouseInterior),
        (RoomId::LighthouseInterior, Direction::South, RoomId::LighthouseExterior),
        (RoomId::LighthouseInterior, Direction::Up, RoomId::LighthouseStairs),
        (RoomId::LighthouseStairs, Direction::Down, RoomId::LighthouseInterior),
        (RoomId::LighthouseStairs, Direction::Up, RoomId::LightChamber),
        (RoomId::LightChamber, Direction::Down, RoomId::LighthouseStairs),
    ];
    for (from, dir, to) in expected {
        assert_eq!(table.room(from).exit(dir), Some(to), "{from} {dir}");
    }
    let total: usize = table.rooms().map(|r| r.exits.len()).sum();
    assert_eq!(total, expected.len());
}

#[test]
fn exactly_two_gates() {
    let table = RoomTable::standard();
    let gated: Vec<_> = table
        .rooms()
        .flat_map(|room| Direction::ALL.into_iter().map(move |d| (room.id, d)))
        .filter_map(|(room, dir)| table.gate(room, dir))
        .map(|gate| gate.opened_by)
        .collect();
    assert_eq!(gated, vec![Flag::CrabMoved, Flag::LighthouseDoorOpen]);
}

// =============================================================================
// Items
// =============================================================================

#[test]
fn initial_placements() {
    let table = RoomTable::standard();
    assert_eq!(table.room(RoomId::Beach).items, &[ItemId::Driftwood, ItemId::Rope]);
    assert_eq!(table.room(RoomId::Beach).buried, &[ItemId::MirrorShard]);
    assert_eq!(
        table.room(RoomId::Cave).items,
        &[ItemId::CrystalLens, ItemId::AncientCoin]
    );
    assert_eq!(table.room(RoomId::Garden).items, &[ItemId::Matches, ItemId::Apple]);
    assert_eq!(table.room(RoomId::Shed).items, &[ItemId::OilCan, ItemId::SmallKey]);
    assert_eq!(
        table.room(RoomId::LighthouseInterior).items,
        &[ItemId::Lantern, ItemId::Journal]
    );
}

#[test]
fn aliases_resolve() {
    let table = RoomTable::standard();
    let cases = [
        ("lens", ItemId::CrystalLens),
        ("crystal", ItemId::CrystalLens),
        ("coin", ItemId::AncientCoin),
        ("key", ItemId::SmallKey),
        ("oil", ItemId::OilCan),
        ("can", ItemId::OilCan),
        ("wood", ItemId::Driftwood),
        ("book", ItemId::Journal),
    ];
    for (alias, item) in cases {
        assert_eq!(table.item_by_alias(alias), Some(item), "{alias}");
    }
}

#[test]
fn lantern_is_the_only_variable_description() {
    let table = RoomTable::standard();
    for item in ItemId::ALL {
        let def = table.item(item);
        let lowered = def.describe(|_| false);
        let raised = def.describe(|_| true);
        assert_eq!(lowered != raised, item == ItemId::Lantern, "{item}");
    }
}
