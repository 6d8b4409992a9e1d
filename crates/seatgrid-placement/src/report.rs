//! Run reports and their human-readable formatting.

use serde::{Deserialize, Serialize};

use seat_core::{GroupInput, RoomCatalog, Strategy};

use crate::error::AllocResult;
use crate::placer::{AllocationRequest, allocate};
use crate::record::Allocation;
use crate::stats::{Stats, compute_stats};

/// Everything one run produced, ready to print or serialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    pub strategy: Strategy,
    pub min_chunk: i64,
    #[serde(flatten)]
    pub allocation: Allocation,
    pub stats: Stats,
}

impl RunReport {
    /// Allocate and compute stats in one go.
    pub fn run(
        groups: &[GroupInput],
        catalog: &RoomCatalog,
        req: &AllocationRequest,
    ) -> AllocResult<Self> {
        let allocation = allocate(groups, catalog, req)?;
        let stats = compute_stats(groups, &allocation, catalog);
        Ok(Self {
            strategy: req.strategy,
            min_chunk: req.min_chunk,
            allocation,
            stats,
        })
    }
}

pub fn format_report(report: &RunReport) -> String {
    let mut out = String::new();
    let stats = &report.stats;

    out.push_str("\n╔══════════════════════════════════════════╗\n");
    out.push_str("║  SeatGrid Allocation                     ║\n");
    out.push_str("╠══════════════════════════════════════════╣\n");
    out.push_str(&format!("║  Strategy:   {:<28}║\n", report.strategy.label()));
    out.push_str(&format!("║  Min chunk:  {:<28}║\n", report.min_chunk));
    out.push_str(&format!("║  Efficiency: {:<28}║\n", format!("{:.1}%", stats.efficiency)));
    out.push_str("╚══════════════════════════════════════════╝\n\n");

    out.push_str(&format!(
        "Students: {} requested, {} seated\n",
        stats.total_requested, stats.total_seated
    ));
    out.push_str(&format!(
        "Rooms:    {} used across {} blocks ({} seats, {} empty)\n\n",
        stats.rooms_used, stats.blocks_used, stats.capacity_consumed, stats.wasted_seats
    ));

    let placements: Vec<_> = report.allocation.placements().collect();
    if !placements.is_empty() {
        out.push_str("PLACEMENTS:\n\n");
        for r in placements {
            let block = r.block.as_deref().unwrap_or("-");
            let range = match (r.start_seat, r.end_seat) {
                (Some(start), Some(end)) => format!("{start}-{end}"),
                _ => "-".to_string(),
            };
            let marker = if r.partial { "  (split)" } else { "" };
            out.push_str(&format!(
                "  {:<16} {:<10} {:<10} seats {:<9} {:>4}{marker}\n",
                r.group.to_string(),
                r.room_id,
                block,
                range,
                r.seats
            ));
        }
        out.push('\n');
    }

    let errors: Vec<_> = report.allocation.errors().collect();
    if !errors.is_empty() {
        out.push_str("❌ UNSEATED:\n\n");
        for r in errors {
            out.push_str(&format!("  • {} — {} students without a room\n", r.group, r.seats));
        }
        out.push('\n');
    }

    out
}

/// One row per strategy, for side-by-side comparison.
pub fn format_comparison(reports: &[RunReport]) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{:<24} {:>5} {:>8} {:>8} {:>6} {:>7} {:>7} {:>7}\n",
        "STRATEGY", "MIN", "SEATED", "UNSEAT", "ROOMS", "BLOCKS", "WASTED", "EFF%"
    ));
    for report in reports {
        let stats = &report.stats;
        out.push_str(&format!(
            "{:<24} {:>5} {:>8} {:>8} {:>6} {:>7} {:>7} {:>7.1}\n",
            report.strategy.label(),
            report.min_chunk,
            stats.total_seated,
            report.allocation.unseated(),
            stats.rooms_used,
            stats.blocks_used,
            stats.wasted_seats,
            stats.efficiency
        ));
    }

    out
}
