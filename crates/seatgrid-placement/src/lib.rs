//! SeatGrid allocation engine — seat student groups into exam rooms.
//!
//! Given validated groups and a read-only room catalog, the engine
//! produces an ordered list of seat records plus per-room usage. It does
//! no I/O and keeps no state between runs; capacity shortfall is reported
//! through `NO SPACE` records rather than as an error.
//!
//! # Components
//!
//! - **`groups`** — Group normalization (validation, largest first)
//! - **`greedy`** — Simple and min-chunk greedy strategies
//! - **`lookahead`** — Room-major filling with perfect-fit fast path
//! - **`best_fit`** — Best-fit / first-fit with block unlocking
//! - **`placer`** — Run validation and strategy dispatch
//! - **`stats`** — Aggregate metrics
//! - **`report`** — Text and JSON reports
//! - **`convert`** — Requests from `seat.toml` configuration

pub mod best_fit;
pub mod convert;
pub mod error;
pub mod greedy;
pub mod groups;
mod ledger;
pub mod lookahead;
pub mod placer;
pub mod record;
pub mod report;
pub mod stats;

pub use best_fit::{BlockOrder, best_fit};
pub use convert::{config_to_request, request_for_strategy};
pub use error::{AllocError, AllocResult};
pub use greedy::greedy;
pub use groups::{Group, NormalizePolicy, normalize_groups};
pub use lookahead::lookahead;
pub use placer::{AllocationRequest, allocate, run_strategy, validate_catalog};
pub use record::{Allocation, AllocationRecord, NO_SPACE, RoomUsage};
pub use report::{RunReport, format_comparison, format_report};
pub use stats::{Stats, compute_stats};
