//! Group-major greedy filling.
//!
//! Backs both the `simple` and the `min-chunk` strategies: they share the
//! scan and differ only in the threshold preset they run with.

use seat_core::RoomCatalog;

use crate::groups::Group;
use crate::ledger::Ledger;
use crate::record::Allocation;

/// Seat each group, in the given order, into rooms sorted by capacity
/// (largest first). Each group makes one pass over the rooms; whatever
/// is left afterwards becomes a `NO SPACE` record.
pub fn greedy(groups: &[Group], catalog: &RoomCatalog, min_chunk: u32) -> Allocation {
    let mut ledger = Ledger::new(catalog, min_chunk);
    let order = ledger.by_capacity_desc();

    for group in groups {
        let mut remaining = group.size;

        for &slot in &order {
            if remaining == 0 {
                break;
            }
            let spare = ledger.spare(slot);
            if spare == 0 {
                continue;
            }
            let chunk = spare.min(remaining);
            if !ledger.admits(slot, chunk, remaining) {
                continue;
            }
            ledger.place(slot, group, chunk);
            remaining -= chunk;
        }

        ledger.unseated(group, remaining);
    }

    ledger.finish()
}
