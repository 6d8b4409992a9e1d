//! Allocation output: per-room seat records and cumulative room usage.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use seat_core::GroupId;

/// Room id carried by records for students that could not be seated.
pub const NO_SPACE: &str = "NO SPACE";

/// Room id → seats filled so far. Every catalog room is present.
pub type RoomUsage = BTreeMap<String, u32>;

/// One slice of a group placed into one room, or the unseated remainder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationRecord {
    pub group: GroupId,
    /// Target room, or [`NO_SPACE`] for an error record.
    pub room_id: String,
    pub block: Option<String>,
    pub seats: u32,
    /// First seat, 1-based, relative to the room's fill level at placement.
    pub start_seat: Option<u32>,
    /// Last seat, inclusive.
    pub end_seat: Option<u32>,
    /// Fewer seats than the group's original size.
    pub partial: bool,
    pub error: bool,
}

impl AllocationRecord {
    pub fn is_placed(&self) -> bool {
        !self.error
    }
}

/// Result of a single allocation run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    /// Records in emission order.
    pub records: Vec<AllocationRecord>,
    pub usage: RoomUsage,
}

impl Allocation {
    /// Records that seat students in a real room.
    pub fn placements(&self) -> impl Iterator<Item = &AllocationRecord> {
        self.records.iter().filter(|r| r.is_placed())
    }

    /// `NO SPACE` records.
    pub fn errors(&self) -> impl Iterator<Item = &AllocationRecord> {
        self.records.iter().filter(|r| r.error)
    }

    pub fn records_for<'a>(&'a self, group: &'a GroupId) -> impl Iterator<Item = &'a AllocationRecord> {
        self.records.iter().filter(move |r| &r.group == group)
    }

    pub fn seated(&self) -> u64 {
        self.placements().map(|r| u64::from(r.seats)).sum()
    }

    pub fn unseated(&self) -> u64 {
        self.errors().map(|r| u64::from(r.seats)).sum()
    }

    pub fn is_complete(&self) -> bool {
        self.errors().next().is_none()
    }
}
