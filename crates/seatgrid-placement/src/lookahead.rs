//! Room-major greedy filling with a perfect-fit fast path.
//!
//! Rooms are visited once each, largest first. A room is filled with
//! whole groups while any fits, and only then is the largest remaining
//! group split to use up the rest of the room.

use std::cmp::Reverse;

use seat_core::RoomCatalog;

use crate::groups::Group;
use crate::ledger::Ledger;
use crate::record::Allocation;

/// A group still waiting for seats, with its working size.
struct Pending<'g> {
    group: &'g Group,
    remaining: u32,
}

pub fn lookahead(groups: &[Group], catalog: &RoomCatalog, min_chunk: u32) -> Allocation {
    let mut ledger = Ledger::new(catalog, min_chunk);
    let mut pool: Vec<Pending<'_>> = groups
        .iter()
        .map(|group| Pending {
            group,
            remaining: group.size,
        })
        .collect();

    for slot in ledger.by_capacity_desc() {
        if pool.is_empty() {
            break;
        }
        fill_room(&mut ledger, &mut pool, slot);
    }

    for pending in &pool {
        ledger.unseated(pending.group, pending.remaining);
    }

    ledger.finish()
}

fn fill_room(ledger: &mut Ledger<'_>, pool: &mut Vec<Pending<'_>>, slot: usize) {
    let spare = ledger.spare(slot);
    if spare == 0 {
        return;
    }

    if let Some(idx) = pool.iter().position(|p| p.remaining == spare) {
        if ledger.admits_opening(slot, spare) {
            let pending = pool.remove(idx);
            ledger.place(slot, pending.group, spare);
            return;
        }
    }

    loop {
        let spare = ledger.spare(slot);
        if spare == 0 || pool.is_empty() {
            return;
        }

        // Largest group that fits whole; first one wins on ties.
        let whole = pool
            .iter()
            .enumerate()
            .filter(|(_, p)| p.remaining <= spare)
            .min_by_key(|(_, p)| Reverse(p.remaining))
            .map(|(idx, p)| (idx, p.remaining));

        if let Some((idx, size)) = whole {
            if !ledger.admits_opening(slot, size) {
                return;
            }
            let pending = pool.remove(idx);
            ledger.place(slot, pending.group, size);
            continue;
        }

        // Nothing fits whole: split the largest group across this room.
        pool.sort_by_key(|p| Reverse(p.remaining));
        let head = &mut pool[0];
        let chunk = spare.min(head.remaining);
        if !ledger.admits_opening(slot, chunk) {
            return;
        }
        ledger.place(slot, head.group, chunk);
        head.remaining -= chunk;
        if head.remaining == 0 {
            pool.remove(0);
        }
    }
}
