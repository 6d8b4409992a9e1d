//! Allocation entry point — validates a run and dispatches to a strategy.
//!
//! 1. Reject structurally invalid input (no rooms, bad threshold, bad groups)
//! 2. Normalize groups, largest first
//! 3. Run the selected strategy on a fresh working copy

use std::collections::HashSet;

use tracing::{info, warn};

use seat_core::{GroupInput, RoomCatalog, Strategy};

use crate::best_fit::{BlockOrder, best_fit};
use crate::error::{AllocError, AllocResult};
use crate::greedy::greedy;
use crate::groups::{Group, NormalizePolicy, normalize_groups};
use crate::lookahead::lookahead;
use crate::record::Allocation;

/// Strategy selection and its parameters for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct AllocationRequest {
    pub strategy: Strategy,
    pub min_chunk: i64,
    /// Unlock order for best-fit. Defaults to the catalog's block order.
    pub block_order: Option<BlockOrder>,
}

impl AllocationRequest {
    /// Request using the strategy's preset threshold.
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            min_chunk: i64::from(strategy.preset_min_chunk()),
            block_order: None,
        }
    }

    pub fn with_min_chunk(mut self, min_chunk: i64) -> Self {
        self.min_chunk = min_chunk;
        self
    }

    pub fn with_block_order(mut self, order: BlockOrder) -> Self {
        self.block_order = Some(order);
        self
    }
}

/// Reject catalogs the allocator cannot work with.
pub fn validate_catalog(catalog: &RoomCatalog) -> AllocResult<()> {
    if catalog.is_empty() {
        return Err(AllocError::EmptyCatalog);
    }
    let mut seen = HashSet::new();
    for (_, room) in catalog.rooms() {
        if !seen.insert(room.id.as_str()) {
            return Err(AllocError::DuplicateRoom(room.id.clone()));
        }
    }
    Ok(())
}

/// Run `strategy` on already-normalized groups, in the order given.
pub fn run_strategy(
    strategy: Strategy,
    groups: &[Group],
    catalog: &RoomCatalog,
    min_chunk: u32,
    block_order: Option<&BlockOrder>,
) -> AllocResult<Allocation> {
    match strategy {
        Strategy::Simple | Strategy::MinChunk => Ok(greedy(groups, catalog, min_chunk)),
        Strategy::Lookahead => Ok(lookahead(groups, catalog, min_chunk)),
        Strategy::BestFit => match block_order {
            Some(order) => best_fit(groups, catalog, min_chunk, order),
            None => best_fit(groups, catalog, min_chunk, &BlockOrder::from_catalog(catalog)),
        },
    }
}

/// Validate the inputs and seat `groups` into `catalog`.
///
/// Groups with blank labels or non-positive sizes fail the run, as does a
/// threshold below one. Students that do not fit are reported as
/// `NO SPACE` records, not as an error.
pub fn allocate(
    groups: &[GroupInput],
    catalog: &RoomCatalog,
    req: &AllocationRequest,
) -> AllocResult<Allocation> {
    validate_catalog(catalog)?;

    if req.min_chunk < 1 {
        return Err(AllocError::InvalidMinChunk(req.min_chunk));
    }
    let min_chunk = u32::try_from(req.min_chunk).unwrap_or(u32::MAX);

    let groups = normalize_groups(groups, NormalizePolicy::Reject)?;
    let allocation = run_strategy(
        req.strategy,
        &groups,
        catalog,
        min_chunk,
        req.block_order.as_ref(),
    )?;

    let unseated = allocation.unseated();
    if unseated > 0 {
        warn!(
            strategy = %req.strategy,
            unseated,
            "allocation finished with unseated students"
        );
    }
    info!(
        strategy = %req.strategy,
        min_chunk,
        groups = groups.len(),
        seated = allocation.seated(),
        unseated,
        "allocation complete"
    );

    Ok(allocation)
}
