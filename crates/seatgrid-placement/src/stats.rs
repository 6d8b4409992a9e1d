//! Aggregate metrics over an allocation.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use seat_core::{GroupInput, RoomCatalog};

use crate::record::Allocation;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    /// Sum of every input group's size, before validation.
    pub total_requested: u64,
    pub total_seated: u64,
    pub rooms_used: usize,
    pub blocks_used: usize,
    /// Full capacity of every room with at least one occupant.
    pub capacity_consumed: u64,
    pub wasted_seats: u64,
    /// Seated over consumed capacity, as a percentage. Range: 0.0..=100.0.
    pub efficiency: f64,
}

pub fn compute_stats(raw: &[GroupInput], allocation: &Allocation, catalog: &RoomCatalog) -> Stats {
    let total_requested = raw.iter().map(|g| g.size.max(0) as u64).sum();
    let total_seated = allocation.seated();

    let rooms: BTreeSet<&str> = allocation.placements().map(|r| r.room_id.as_str()).collect();
    let blocks: BTreeSet<&str> = allocation
        .placements()
        .filter_map(|r| r.block.as_deref())
        .collect();

    let capacity_consumed: u64 = catalog
        .rooms()
        .filter(|(_, room)| allocation.usage.get(&room.id).is_some_and(|&used| used > 0))
        .map(|(_, room)| u64::from(room.usable_capacity()))
        .sum();

    let efficiency = if capacity_consumed > 0 {
        total_seated as f64 / capacity_consumed as f64 * 100.0
    } else {
        0.0
    };

    Stats {
        total_requested,
        total_seated,
        rooms_used: rooms.len(),
        blocks_used: blocks.len(),
        capacity_consumed,
        wasted_seats: capacity_consumed.saturating_sub(total_seated),
        efficiency,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::greedy::greedy;
    use crate::groups::Group;
    use seat_core::{Block, Room};

    fn catalog() -> RoomCatalog {
        RoomCatalog::new(vec![
            Block::new("A", vec![Room::new("A1", 50)]),
            Block::new("B", vec![Room::new("B1", 40), Room::new("B2", 30)]),
        ])
    }

    #[test]
    fn counts_rooms_blocks_and_waste() {
        let catalog = catalog();
        let raw = vec![GroupInput::new("X", "1", 60), GroupInput::new("Y", "1", 0)];
        let allocation = greedy(&[Group::new("X", "1", 60)], &catalog, 1);
        let stats = compute_stats(&raw, &allocation, &catalog);

        assert_eq!(stats.total_requested, 60);
        assert_eq!(stats.total_seated, 60);
        assert_eq!(stats.rooms_used, 2);
        assert_eq!(stats.blocks_used, 2);
        assert_eq!(stats.capacity_consumed, 90);
        assert_eq!(stats.wasted_seats, 30);
        assert!((stats.efficiency - 66.666).abs() < 0.01);
    }

    #[test]
    fn empty_allocation_has_zero_efficiency() {
        let catalog = catalog();
        let stats = compute_stats(&[], &Allocation::default(), &catalog);
        assert_eq!(stats.capacity_consumed, 0);
        assert_eq!(stats.efficiency, 0.0);
    }

    #[test]
    fn error_records_do_not_count_as_seated() {
        let catalog = RoomCatalog::new(vec![Block::new("A", vec![Room::new("A1", 10)])]);
        let raw = vec![GroupInput::new("X", "1", 15)];
        let allocation = greedy(&[Group::new("X", "1", 15)], &catalog, 1);
        let stats = compute_stats(&raw, &allocation, &catalog);

        assert_eq!(stats.total_requested, 15);
        assert_eq!(stats.total_seated, 10);
        assert_eq!(stats.rooms_used, 1);
        assert_eq!(stats.efficiency, 100.0);
    }
}
