//! Allocation error types.

use thiserror::Error;

/// Result type alias for allocation operations.
pub type AllocResult<T> = Result<T, AllocError>;

/// Structural problems that stop a run before any seat is assigned.
///
/// Capacity shortfall is not an error: it shows up as `NO SPACE`
/// records in the allocation itself.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AllocError {
    #[error("room catalog has no rooms")]
    EmptyCatalog,

    #[error("block order lists no rooms")]
    EmptyBlockOrder,

    #[error("min chunk must be at least 1, got {0}")]
    InvalidMinChunk(i64),

    #[error("invalid group at position {index}: {reason}")]
    InvalidGroup { index: usize, reason: String },

    #[error("room id appears more than once: {0}")]
    DuplicateRoom(String),

    #[error("block order names a room missing from the catalog: {0}")]
    UnknownRoom(String),
}
