//! Crate-wide error type.

use thiserror::Error;

/// Errors surfaced by input validation and by the exact solver's
/// resource checks.
///
/// Solvers never swallow these or fall back to a zero result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum KnapsackError {
    /// An order value is negative or not finite.
    #[error("order {index}: value must be finite and non-negative, got {value}")]
    InvalidValue { index: usize, value: String },

    /// A raw order weight is negative, not finite, or not integral.
    #[error("order {index}: weight must be a non-negative integer, got {weight}")]
    InvalidWeight { index: usize, weight: f64 },

    /// A raw capacity is negative, not finite, or not integral.
    #[error("capacity must be a non-negative integer, got {0}")]
    InvalidCapacity(f64),

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The DP table would exceed the configured cell limit
    /// (or `usize::MAX` when the dimensions overflow).
    #[error("dp table of {rows} x {cols} cells exceeds the limit of {limit} cells")]
    TableTooLarge {
        rows: usize,
        cols: usize,
        limit: usize,
    },

    /// A total value does not fit in the value type.
    #[error("total order value overflows the value type")]
    ValueOverflow,

    /// The allocator refused the DP table.
    #[error("failed to allocate a dp table of {cells} cells")]
    AllocationFailed { cells: usize },
}
