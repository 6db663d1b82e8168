//! Per-session world state with immutable snapshots.
//!
//! `WorldState` is the mutable overlay on top of the static [`RoomTable`]:
//! where the player stands, which items still lie in (or under) each room,
//! what the player carries, and which flags are raised. It uses persistent
//! data structures, so clone is O(1) and every mutation returns a new
//! snapshot. A command resolves against one snapshot and the session commits
//! the result only once the command has finished, which makes each turn
//! atomic.

use std::fmt;

use im::{HashMap, HashSet, Vector};
use lighthouse_foundation::{Error, ErrorKind, Flag, ItemId, Result, RoomId};
use tracing::trace;

use crate::table::RoomTable;

/// Where an item currently lives.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Placement {
    /// Lying in a room, free to take
    Room(RoomId),
    /// Hidden in a room until dug up
    Buried(RoomId),
    /// Carried by the player
    Inventory,
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Placement::Room(room) => write!(f, "room {room}"),
            Placement::Buried(room) => write!(f, "buried in {room}"),
            Placement::Inventory => f.write_str("inventory"),
        }
    }
}

/// Immutable snapshot of session state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorldState {
    current_room: RoomId,
    room_items: HashMap<RoomId, Vector<ItemId>>,
    buried: HashMap<RoomId, Vector<ItemId>>,
    inventory: Vector<ItemId>,
    flags: HashSet<Flag>,
}

impl WorldState {
    /// Creates a fresh state from the table's initial placements.
    #[must_use]
    pub fn new(table: &RoomTable) -> Self {
        let mut room_items = HashMap::new();
        let mut buried = HashMap::new();
        for room in table.rooms() {
            room_items.insert(room.id, room.items.iter().copied().collect());
            buried.insert(room.id, room.buried.iter().copied().collect());
        }
        Self {
            current_room: table.start(),
            room_items,
            buried,
            inventory: Vector::new(),
            flags: HashSet::new(),
        }
    }

    // --- Queries ---

    /// Returns the room the player stands in.
    #[must_use]
    pub fn current_room(&self) -> RoomId {
        self.current_room
    }

    /// Iterates over the items lying in a room, in authoring order.
    pub fn room_items(&self, room: RoomId) -> impl Iterator<Item = ItemId> + '_ {
        self.room_items.get(&room).into_iter().flatten().copied()
    }

    /// Returns true if `item` lies (unburied) in `room`.
    #[must_use]
    pub fn room_has(&self, room: RoomId, item: ItemId) -> bool {
        self.room_items
            .get(&room)
            .is_some_and(|items| items.contains(&item))
    }

    /// Returns true if something is still buried in `room`.
    #[must_use]
    pub fn has_buried(&self, room: RoomId) -> bool {
        self.buried.get(&room).is_some_and(|items| !items.is_empty())
    }

    /// Iterates over carried items in the order they were picked up.
    pub fn inventory(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.inventory.iter().copied()
    }

    /// Returns the number of carried items.
    #[must_use]
    pub fn inventory_len(&self) -> usize {
        self.inventory.len()
    }

    /// Returns true if the player carries `item`.
    #[must_use]
    pub fn holds(&self, item: ItemId) -> bool {
        self.inventory.contains(&item)
    }

    /// Returns true if `flag` has been raised.
    #[must_use]
    pub fn flag(&self, flag: Flag) -> bool {
        self.flags.contains(&flag)
    }

    /// Iterates over every flag with its value, in declaration order.
    pub fn flags(&self) -> impl Iterator<Item = (Flag, bool)> + '_ {
        Flag::ALL.into_iter().map(|f| (f, self.flag(f)))
    }

    /// Finds where an item is. `None` means it has been used up.
    #[must_use]
    pub fn locate(&self, item: ItemId) -> Option<Placement> {
        self.placements()
            .find(|(placed, _)| *placed == item)
            .map(|(_, placement)| placement)
    }

    /// Iterates over every placed item: rooms first, then buried, then carried.
    fn placements(&self) -> impl Iterator<Item = (ItemId, Placement)> + '_ {
        let rooms = RoomId::ALL.into_iter().flat_map(move |room| {
            self.room_items(room)
                .map(move |item| (item, Placement::Room(room)))
        });
        let buried = RoomId::ALL.into_iter().flat_map(move |room| {
            self.buried
                .get(&room)
                .into_iter()
                .flatten()
                .map(move |item| (*item, Placement::Buried(room)))
        });
        let carried = self.inventory().map(|item| (item, Placement::Inventory));
        rooms.chain(buried).chain(carried)
    }

    /// Checks that every item occupies at most one slot across all containers.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::ItemAlreadyPlaced`] naming the first item found
    /// twice.
    pub fn check_exclusivity(&self) -> Result<()> {
        let mut seen = std::collections::HashMap::new();
        for (item, placement) in self.placements() {
            if let Some(first) = seen.insert(item, placement) {
                return Err(Error::new(ErrorKind::ItemAlreadyPlaced {
                    item,
                    place: format!("{first} and {placement}"),
                }));
            }
        }
        Ok(())
    }

    // --- Transitions ---

    /// Moves the player to `room`.
    #[must_use]
    pub fn move_to(&self, room: RoomId) -> WorldState {
        trace!(from = %self.current_room, to = %room, "move");
        WorldState {
            current_room: room,
            ..self.clone()
        }
    }

    /// Moves `item` from `room` into the inventory.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::ItemNotPresent`] if the room does not hold the
    /// item, or [`ErrorKind::ItemAlreadyPlaced`] if it is already carried.
    pub fn take_from_room(&self, room: RoomId, item: ItemId) -> Result<WorldState> {
        match self.locate(item) {
            Some(Placement::Room(here)) if here == room => {}
            Some(Placement::Inventory) => {
                return Err(Error::new(ErrorKind::ItemAlreadyPlaced {
                    item,
                    place: Placement::Inventory.to_string(),
                }));
            }
            _ => return Err(Error::item_not_present(item, format!("room {room}"))),
        }
        let mut items = self.room_items.get(&room).cloned().unwrap_or_default();
        items.retain(|placed| *placed != item);

        let mut inventory = self.inventory.clone();
        inventory.push_back(item);

        trace!(%item, %room, "take");
        Ok(WorldState {
            room_items: self.room_items.update(room, items),
            inventory,
            ..self.clone()
        })
    }

    /// Digs the first buried item out of `room` straight into the inventory.
    ///
    /// Returns `None` when nothing is left to find.
    #[must_use]
    pub fn unearth(&self, room: RoomId) -> Option<(WorldState, ItemId)> {
        let mut buried = self.buried.get(&room).cloned()?;
        let item = buried.pop_front()?;

        let mut inventory = self.inventory.clone();
        inventory.push_back(item);

        trace!(%item, %room, "unearth");
        Some((
            WorldState {
                buried: self.buried.update(room, buried),
                inventory,
                ..self.clone()
            },
            item,
        ))
    }

    /// Uses up a carried item. It leaves the world for good.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::ItemNotPresent`] if the item is not carried.
    pub fn consume(&self, item: ItemId) -> Result<WorldState> {
        let mut inventory = self.inventory.clone();
        let index = inventory
            .index_of(&item)
            .ok_or_else(|| Error::item_not_present(item, "the inventory"))?;
        inventory.remove(index);

        trace!(%item, "consume");
        Ok(WorldState {
            inventory,
            ..self.clone()
        })
    }

    /// Raises a flag. Raising an already raised flag is a no-op.
    #[must_use]
    pub fn raise(&self, flag: Flag) -> WorldState {
        if self.flag(flag) {
            return self.clone();
        }
        trace!(%flag, "raise");
        WorldState {
            flags: self.flags.update(flag),
            ..self.clone()
        }
    }
}
