//! World state tests.

use lighthouse_foundation::{ErrorKind, Flag, ItemId, RoomId};
use lighthouse_world::{Placement, RoomTable, WorldState};
use proptest::prelude::*;

fn fresh() -> WorldState {
    WorldState::new(RoomTable::standard())
}

// =============================================================================
// Snapshots
// =============================================================================

#[test]
fn snapshots_are_independent() {
    let before = fresh();
    let after = before
        .take_from_room(RoomId::Beach, ItemId::Rope)
        .unwrap()
        .raise(Flag::BellRung)
        .move_to(RoomId::Path);

    assert_eq!(before, fresh());
    assert_eq!(after.current_room(), RoomId::Path);
    assert!(after.holds(ItemId::Rope));
    assert!(after.flag(Flag::BellRung));
}

#[test]
fn every_item_starts_somewhere() {
    let state = fresh();
    for item in ItemId::ALL {
        let placement = state.locate(item);
        assert!(
            matches!(placement, Some(Placement::Room(_) | Placement::Buried(_))),
            "{item} at {placement:?}"
        );
    }
}

#[test]
fn taking_from_the_wrong_room_fails() {
    let err = fresh()
        .take_from_room(RoomId::Cave, ItemId::Rope)
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::ItemNotPresent { item: ItemId::Rope, .. }));
}

#[test]
fn nothing_buried_outside_the_beach() {
    let state = fresh();
    for room in RoomId::ALL {
        assert_eq!(state.has_buried(room), room == RoomId::Beach, "{room}");
        if room != RoomId::Beach {
            assert!(state.unearth(room).is_none());
        }
    }
}

// =============================================================================
// Properties
// =============================================================================

#[derive(Clone, Debug)]
enum Op {
    Move(RoomId),
    Take(ItemId),
    Unearth,
    Consume(ItemId),
    Raise(Flag),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..RoomId::ALL.len()).prop_map(|i| Op::Move(RoomId::ALL[i])),
        (0..ItemId::ALL.len()).prop_map(|i| Op::Take(ItemId::ALL[i])),
        Just(Op::Unearth),
        (0..ItemId::ALL.len()).prop_map(|i| Op::Consume(ItemId::ALL[i])),
        (0..Flag::ALL.len()).prop_map(|i| Op::Raise(Flag::ALL[i])),
    ]
}

fn apply(state: &WorldState, op: &Op) -> WorldState {
    match op {
        Op::Move(room) => state.move_to(*room),
        Op::Take(item) => state
            .take_from_room(state.current_room(), *item)
            .unwrap_or_else(|_| state.clone()),
        Op::Unearth => state
            .unearth(state.current_room())
            .map_or_else(|| state.clone(), |(next, _)| next),
        Op::Consume(item) => state.consume(*item).unwrap_or_else(|_| state.clone()),
        Op::Raise(flag) => state.raise(*flag),
    }
}

proptest! {
    #[test]
    fn exclusivity_survives_any_sequence(ops in prop::collection::vec(op(), 0..60)) {
        let mut state = fresh();
        for op in &ops {
            state = apply(&state, op);
            prop_assert!(state.check_exclusivity().is_ok());
        }
    }

    #[test]
    fn flags_never_lower(ops in prop::collection::vec(op(), 0..60)) {
        let mut state = fresh();
        for op in &ops {
            let next = apply(&state, op);
            for (flag, raised) in state.flags() {
                if raised {
                    prop_assert!(next.flag(flag), "{} was lowered by {:?}", flag, op);
                }
            }
            state = next;
        }
    }

    #[test]
    fn inventory_has_no_duplicates(ops in prop::collection::vec(op(), 0..60)) {
        let mut state = fresh();
        for op in &ops {
            state = apply(&state, op);
        }
        let mut carried: Vec<_> = state.inventory().collect();
        let len = carried.len();
        carried.sort();
        carried.dedup();
        prop_assert_eq!(carried.len(), len);
    }
}
