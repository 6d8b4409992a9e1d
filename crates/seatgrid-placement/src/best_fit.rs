//! Best-fit / first-fit-decreasing with block unlocking.
//!
//! Rooms are considered in an explicit block order. Only blocks up to the
//! unlock cursor are eligible; the cursor advances once every usable room
//! of the current block holds someone, so front blocks fill before back
//! blocks open. The cursor carries over from one group to the next.

use serde::{Deserialize, Serialize};
use tracing::debug;

use seat_core::RoomCatalog;

use crate::error::{AllocError, AllocResult};
use crate::groups::Group;
use crate::ledger::Ledger;
use crate::record::Allocation;

/// Room ids per block, in unlock order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockOrder(pub Vec<Vec<String>>);

impl BlockOrder {
    pub fn new(blocks: Vec<Vec<String>>) -> Self {
        Self(blocks)
    }

    /// The catalog's own block and room order.
    pub fn from_catalog(catalog: &RoomCatalog) -> Self {
        Self(
            catalog
                .blocks
                .iter()
                .map(|b| b.rooms.iter().map(|r| r.id.clone()).collect())
                .collect(),
        )
    }

    pub fn room_count(&self) -> usize {
        self.0.iter().map(Vec::len).sum()
    }
}

/// Block order resolved to ledger slot indices.
struct Blocks(Vec<Vec<usize>>);

impl Blocks {
    fn resolve(order: &BlockOrder, ledger: &Ledger<'_>) -> AllocResult<Self> {
        if order.room_count() == 0 {
            return Err(AllocError::EmptyBlockOrder);
        }

        let mut seen = Vec::new();
        let mut blocks = Vec::with_capacity(order.0.len());
        for ids in &order.0 {
            let mut slots = Vec::with_capacity(ids.len());
            for id in ids {
                let slot = ledger
                    .position(id)
                    .ok_or_else(|| AllocError::UnknownRoom(id.clone()))?;
                if seen.contains(&slot) {
                    return Err(AllocError::DuplicateRoom(id.clone()));
                }
                seen.push(slot);
                slots.push(slot);
            }
            blocks.push(slots);
        }
        Ok(Self(blocks))
    }

    fn eligible(&self, max_block: usize) -> impl Iterator<Item = usize> + '_ {
        self.0[..=max_block].iter().flatten().copied()
    }
}

struct BestFit<'a> {
    ledger: Ledger<'a>,
    blocks: Blocks,
    max_block: usize,
    /// Cursor value each group started with.
    unlocked: Vec<usize>,
}

impl<'a> BestFit<'a> {
    fn new(catalog: &'a RoomCatalog, min_chunk: u32, order: &BlockOrder) -> AllocResult<Self> {
        let ledger = Ledger::new(catalog, min_chunk);
        let blocks = Blocks::resolve(order, &ledger)?;
        let mut state = Self {
            ledger,
            blocks,
            max_block: 0,
            unlocked: Vec::new(),
        };
        // A leading block with no usable room would never open otherwise.
        state.unlock();
        Ok(state)
    }

    /// Advance the cursor past every block whose usable rooms are all occupied.
    fn unlock(&mut self) {
        let last = self.blocks.0.len() - 1;
        while self.max_block < last {
            let opened = self.blocks.0[self.max_block]
                .iter()
                .filter(|&&slot| self.ledger.slot(slot).capacity > 0)
                .all(|&slot| self.ledger.is_occupied(slot));
            if !opened {
                break;
            }
            self.max_block += 1;
            debug!(block = self.max_block, "unlocked next block");
        }
    }

    /// Tightest eligible room that seats the whole remainder, if the guard
    /// accepts it. A refused candidate is not replaced by a looser room.
    fn best_fit(&self, remaining: u32) -> Option<usize> {
        self.blocks
            .eligible(self.max_block)
            .filter(|&slot| self.ledger.spare(slot) >= remaining)
            .min_by_key(|&slot| self.ledger.spare(slot))
            .filter(|&slot| self.ledger.admits(slot, remaining, remaining))
    }

    /// First eligible room with any admissible space.
    fn first_fit(&self, remaining: u32) -> Option<(usize, u32)> {
        self.blocks.eligible(self.max_block).find_map(|slot| {
            let chunk = self.ledger.spare(slot).min(remaining);
            self.ledger
                .admits(slot, chunk, remaining)
                .then_some((slot, chunk))
        })
    }

    fn seat(&mut self, group: &Group) {
        self.unlocked.push(self.max_block);
        let mut remaining = group.size;

        while remaining > 0 {
            let choice = match self.best_fit(remaining) {
                Some(slot) => Some((slot, remaining)),
                None => self.first_fit(remaining),
            };
            let Some((slot, chunk)) = choice else {
                break;
            };
            self.ledger.place(slot, group, chunk);
            remaining -= chunk;
            self.unlock();
        }

        self.ledger.unseated(group, remaining);
    }
}

fn run(
    groups: &[Group],
    catalog: &RoomCatalog,
    min_chunk: u32,
    order: &BlockOrder,
) -> AllocResult<(Allocation, Vec<usize>)> {
    let mut state = BestFit::new(catalog, min_chunk, order)?;
    for group in groups {
        state.seat(group);
    }
    Ok((state.ledger.finish(), state.unlocked))
}

/// Seat each group, in the given order, preferring the tightest room
/// that takes the whole remainder and otherwise the first room with
/// space, restricted to the blocks unlocked so far.
pub fn best_fit(
    groups: &[Group],
    catalog: &RoomCatalog,
    min_chunk: u32,
    order: &BlockOrder,
) -> AllocResult<Allocation> {
    run(groups, catalog, min_chunk, order).map(|(allocation, _)| allocation)
}
