//! The static content registry.

use std::collections::{HashMap, HashSet, VecDeque};

use lighthouse_foundation::{Direction, Error, ItemId, Result, RoomId};

use crate::content::{GATES, Gate, ITEMS, ItemDef, OPENING, ROOMS, RoomDef, START_ROOM};

/// Immutable registry of rooms, items and gates.
///
/// Rooms and items are stored in identifier order so lookups are a single
/// index; [`RoomTable::validate`] checks that ordering along with the rest of
/// the table's structural rules.
#[derive(Debug)]
pub struct RoomTable {
    rooms: &'static [RoomDef],
    items: &'static [ItemDef],
    gates: &'static [Gate],
    start: RoomId,
    opening: &'static str,
}

static STANDARD: RoomTable = RoomTable {
    rooms: &ROOMS,
    items: &ITEMS,
    gates: &GATES,
    start: START_ROOM,
    opening: OPENING,
};

impl RoomTable {
    /// Returns the table for The Lighthouse of Forgotten Souls.
    #[must_use]
    pub fn standard() -> &'static RoomTable {
        &STANDARD
    }

    /// Builds a table from custom content.
    #[must_use]
    pub const fn new(
        rooms: &'static [RoomDef],
        items: &'static [ItemDef],
        gates: &'static [Gate],
        start: RoomId,
        opening: &'static str,
    ) -> Self {
        Self {
            rooms,
            items,
            gates,
            start,
            opening,
        }
    }

    /// Returns the room every session starts in.
    #[must_use]
    pub fn start(&self) -> RoomId {
        self.start
    }

    /// Returns the message shown before the first command.
    #[must_use]
    pub fn opening(&self) -> &'static str {
        self.opening
    }

    /// Returns a room definition.
    ///
    /// # Panics
    ///
    /// Panics if the table has no entry for `id`. [`RoomTable::validate`]
    /// rejects such tables.
    #[must_use]
    pub fn room(&self, id: RoomId) -> &RoomDef {
        &self.rooms[id.index()]
    }

    /// Returns an item definition.
    ///
    /// # Panics
    ///
    /// Panics if the table has no entry for `id`. [`RoomTable::validate`]
    /// rejects such tables.
    #[must_use]
    pub fn item(&self, id: ItemId) -> &ItemDef {
        &self.items[id.index()]
    }

    /// Iterates over all rooms.
    pub fn rooms(&self) -> impl Iterator<Item = &RoomDef> {
        self.rooms.iter()
    }

    /// Returns the gate guarding `direction` out of `room`, if any.
    #[must_use]
    pub fn gate(&self, room: RoomId, direction: Direction) -> Option<&Gate> {
        self.gates
            .iter()
            .find(|g| g.room == room && g.direction == direction)
    }

    /// Resolves an alias (not a key) to an item.
    #[must_use]
    pub fn item_by_alias(&self, word: &str) -> Option<ItemId> {
        self.items
            .iter()
            .find(|def| def.aliases.iter().any(|a| *a == word))
            .map(|def| def.id)
    }

    /// Checks the structural rules of the table.
    ///
    /// # Errors
    ///
    /// Returns [`lighthouse_foundation::ErrorKind::InvalidContent`] when
    /// rooms or items are missing or out of order, an item is placed twice,
    /// a room has two exits in one direction, a gate has no matching exit,
    /// an alias is claimed twice, or a room cannot be reached from the start.
    pub fn validate(&self) -> Result<()> {
        self.validate_order()?;
        self.validate_placements()?;
        self.validate_exits()?;
        self.validate_aliases()?;
        self.validate_reachability()
    }

    fn validate_order(&self) -> Result<()> {
        if self.rooms.len() != RoomId::ALL.len() {
            return Err(Error::invalid_content(format!(
                "expected {} rooms, found {}",
                RoomId::ALL.len(),
                self.rooms.len()
            )));
        }
        for (def, id) in self.rooms.iter().zip(RoomId::ALL) {
            if def.id != id {
                return Err(Error::invalid_content(format!(
                    "room slot {} holds {} instead of {id}",
                    id.index(),
                    def.id
                )));
            }
        }
        if self.items.len() != ItemId::ALL.len() {
            return Err(Error::invalid_content(format!(
                "expected {} items, found {}",
                ItemId::ALL.len(),
                self.items.len()
            )));
        }
        for (def, id) in self.items.iter().zip(ItemId::ALL) {
            if def.id != id {
                return Err(Error::invalid_content(format!(
                    "item slot {} holds {} instead of {id}",
                    id.index(),
                    def.id
                )));
            }
        }
        Ok(())
    }

    fn validate_placements(&self) -> Result<()> {
        let mut seen: HashMap<ItemId, RoomId> = HashMap::new();
        for room in self.rooms {
            for item in room.items.iter().chain(room.buried) {
                if let Some(first) = seen.insert(*item, room.id) {
                    return Err(Error::invalid_content(format!(
                        "item {item} is placed in both {first} and {}",
                        room.id
                    )));
                }
            }
        }
        Ok(())
    }

    fn validate_exits(&self) -> Result<()> {
        for room in self.rooms {
            let mut directions = HashSet::new();
            for (dir, _) in room.exits {
                if !directions.insert(*dir) {
                    return Err(Error::invalid_content(format!(
                        "room {} has two exits {dir}",
                        room.id
                    )));
                }
            }
        }
        for gate in self.gates {
            if self.room(gate.room).exit(gate.direction).is_none() {
                return Err(Error::invalid_content(format!(
                    "gate on {} {} guards no exit",
                    gate.room, gate.direction
                )));
            }
        }
        Ok(())
    }

    fn validate_aliases(&self) -> Result<()> {
        let mut claimed: HashMap<&str, ItemId> = HashMap::new();
        for def in self.items {
            for alias in def.aliases {
                if let Some(owner) = claimed.insert(*alias, def.id) {
                    return Err(Error::invalid_content(format!(
                        "alias '{alias}' is claimed by both {owner} and {}",
                        def.id
                    )));
                }
                if ItemId::ALL.iter().any(|id| id.key() == *alias) {
                    return Err(Error::invalid_content(format!(
                        "alias '{alias}' of {} shadows an item key",
                        def.id
                    )));
                }
            }
        }
        Ok(())
    }

    fn validate_reachability(&self) -> Result<()> {
        let mut visited = HashSet::from([self.start]);
        let mut queue = VecDeque::from([self.start]);
        while let Some(room) = queue.pop_front() {
            for (_, to) in self.room(room).exits {
                if visited.insert(*to) {
                    queue.push_back(*to);
                }
            }
        }
        match RoomId::ALL.into_iter().find(|id| !visited.contains(id)) {
            Some(unreachable) => Err(Error::invalid_content(format!(
                "room {unreachable} cannot be reached from {}",
                self.start
            ))),
            None => Ok(()),
        }
    }
}
