use std::collections::TryReserveError;

use thiserror::Error;

/// Errors surfaced by [`HeapTree`](crate::HeapTree).
#[derive(Debug, Error)]
pub enum HeapError {
    /// The ordering mode was changed on a heap that already holds elements.
    #[error("heap must be empty to change ordering mode")]
    InvalidState,
    /// No free child slot at the insertion cursor. The store is corrupted.
    #[error("no free child slot for cursor {cursor} (checked position {pos})")]
    InvariantViolation { cursor: usize, pos: usize },
    #[error("invalid heap configuration: {0}")]
    InvalidConfig(&'static str),
    #[error("failed to grow heap store: {0}")]
    Allocation(#[from] TryReserveError),
}

pub type HeapResult<T> = Result<T, HeapError>;
