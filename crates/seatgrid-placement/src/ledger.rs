//! Working state shared by every strategy.
//!
//! The catalog is flattened into indexed slots once per run. Seat usage
//! and emitted records live here, never on the catalog itself.

use tracing::{debug, warn};

use seat_core::{Room, RoomCatalog};

use crate::groups::Group;
use crate::record::{Allocation, AllocationRecord, NO_SPACE, RoomUsage};

/// A room as seen by the allocator.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Slot<'a> {
    pub block: &'a str,
    pub room: &'a Room,
    pub capacity: u32,
}

pub(crate) struct Ledger<'a> {
    slots: Vec<Slot<'a>>,
    used: Vec<u32>,
    seated: u64,
    min_chunk: u32,
    records: Vec<AllocationRecord>,
}

impl<'a> Ledger<'a> {
    pub fn new(catalog: &'a RoomCatalog, min_chunk: u32) -> Self {
        let slots: Vec<Slot<'a>> = catalog
            .rooms()
            .map(|(block, room)| Slot {
                block: &block.name,
                room,
                capacity: room.usable_capacity(),
            })
            .collect();
        let used = vec![0; slots.len()];

        Self {
            slots,
            used,
            seated: 0,
            min_chunk,
            records: Vec::new(),
        }
    }

    pub fn slot(&self, idx: usize) -> Slot<'a> {
        self.slots[idx]
    }

    pub fn position(&self, room_id: &str) -> Option<usize> {
        self.slots.iter().position(|s| s.room.id == room_id)
    }

    pub fn spare(&self, idx: usize) -> u32 {
        self.slots[idx].capacity - self.used[idx]
    }

    pub fn is_occupied(&self, idx: usize) -> bool {
        self.used[idx] > 0
    }

    /// Slot indices by capacity, largest first. Equal capacities keep
    /// catalog order.
    pub fn by_capacity_desc(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.slots.len()).collect();
        order.sort_by(|&a, &b| self.slots[b].capacity.cmp(&self.slots[a].capacity));
        order
    }

    /// Min-chunk guard used by the greedy and best-fit strategies. A chunk
    /// below the threshold may only top off an occupied room, or be the
    /// run's very first placement when it seats the whole remainder.
    pub fn admits(&self, idx: usize, chunk: u32, remaining: u32) -> bool {
        if chunk == 0 {
            return false;
        }
        chunk >= self.min_chunk
            || self.is_occupied(idx)
            || (chunk == remaining && self.seated == 0)
    }

    /// Lookahead's guard. A small chunk is only refused when it would open
    /// an empty room while other rooms are already occupied, so the run's
    /// first placement goes through even as a split.
    pub fn admits_opening(&self, idx: usize, chunk: u32) -> bool {
        chunk > 0 && (chunk >= self.min_chunk || self.is_occupied(idx) || self.seated == 0)
    }

    /// Seat `chunk` members of `group` in the slot, right after its
    /// current fill level.
    pub fn place(&mut self, idx: usize, group: &Group, chunk: u32) {
        debug_assert!(chunk > 0 && chunk <= self.spare(idx));

        let slot = self.slots[idx];
        let start = self.used[idx] + 1;
        let end = self.used[idx] + chunk;
        self.used[idx] = end;
        self.seated += u64::from(chunk);

        debug!(
            group = %group.id,
            room = %slot.room.id,
            block = slot.block,
            seats = chunk,
            start,
            end,
            "placed students"
        );

        self.records.push(AllocationRecord {
            group: group.id.clone(),
            room_id: slot.room.id.clone(),
            block: Some(slot.block.to_string()),
            seats: chunk,
            start_seat: Some(start),
            end_seat: Some(end),
            partial: chunk < group.size,
            error: false,
        });
    }

    /// Record the part of `group` that could not be seated.
    pub fn unseated(&mut self, group: &Group, remainder: u32) {
        if remainder == 0 {
            return;
        }

        warn!(
            group = %group.id,
            remainder,
            "could not seat all students — insufficient eligible capacity"
        );

        self.records.push(AllocationRecord {
            group: group.id.clone(),
            room_id: NO_SPACE.to_string(),
            block: None,
            seats: remainder,
            start_seat: None,
            end_seat: None,
            partial: remainder < group.size,
            error: true,
        });
    }

    pub fn finish(self) -> Allocation {
        let usage: RoomUsage = self
            .slots
            .iter()
            .zip(&self.used)
            .map(|(slot, &used)| (slot.room.id.clone(), used))
            .collect();

        Allocation {
            records: self.records,
            usage,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seat_core::Block;

    fn catalog() -> RoomCatalog {
        RoomCatalog::new(vec![
            Block::new("A", vec![Room::new("A1", 20), Room::new("A2", 50)]),
            Block::new("B", vec![Room::new("B1", 50), Room::new("B2", 0)]),
        ])
    }

    #[test]
    fn capacity_order_is_stable() {
        let catalog = catalog();
        let ledger = Ledger::new(&catalog, 1);
        let ids: Vec<&str> = ledger
            .by_capacity_desc()
            .into_iter()
            .map(|i| ledger.slot(i).room.id.as_str())
            .collect();
        assert_eq!(ids, ["A2", "B1", "A1", "B2"]);
    }

    #[test]
    fn guard_allows_first_whole_placement_only() {
        let catalog = catalog();
        let mut ledger = Ledger::new(&catalog, 10);
        assert!(ledger.admits(0, 5, 5));
        assert!(!ledger.admits(0, 5, 8));

        ledger.place(1, &Group::new("X", "1", 30), 30);
        assert!(!ledger.admits(0, 5, 5));
        // topping off the occupied room is fine
        assert!(ledger.admits(1, 5, 7));
    }

    #[test]
    fn opening_guard_lets_first_split_through() {
        let catalog = catalog();
        let mut ledger = Ledger::new(&catalog, 10);
        assert!(ledger.admits_opening(0, 5));
        assert!(!ledger.admits_opening(0, 0));

        ledger.place(0, &Group::new("X", "1", 30), 5);
        assert!(!ledger.admits_opening(1, 5));
        assert!(ledger.admits_opening(0, 5));
        assert!(ledger.admits_opening(1, 10));
    }

    #[test]
    fn zero_capacity_room_has_no_spare() {
        let catalog = catalog();
        let ledger = Ledger::new(&catalog, 1);
        assert_eq!(ledger.spare(3), 0);
        assert!(!ledger.admits(3, 0, 4));
    }

    #[test]
    fn seat_ranges_follow_fill_level() {
        let catalog = catalog();
        let mut ledger = Ledger::new(&catalog, 1);
        ledger.place(1, &Group::new("X", "1", 30), 30);
        ledger.place(1, &Group::new("Y", "1", 40), 15);
        let allocation = ledger.finish();

        let second = &allocation.records[1];
        assert_eq!((second.start_seat, second.end_seat), (Some(31), Some(45)));
        assert!(second.partial);
        assert_eq!(allocation.usage["A2"], 45);
        assert_eq!(allocation.usage["B2"], 0);
    }

    #[test]
    fn unseated_remainder_becomes_error_record() {
        let catalog = catalog();
        let mut ledger = Ledger::new(&catalog, 1);
        let group = Group::new("X", "1", 12);
        ledger.unseated(&group, 12);
        ledger.unseated(&group, 0);
        let allocation = ledger.finish();

        assert_eq!(allocation.records.len(), 1);
        let record = &allocation.records[0];
        assert!(record.error && !record.partial);
        assert_eq!(record.room_id, NO_SPACE);
        assert_eq!(record.start_seat, None);
    }
}
