//! DP solver configuration.

use crate::error::KnapsackError;

/// Order in which DP table cells are computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FillOrder {
    /// Top-down memoized evaluation from the target cell, computing only
    /// the sub-problems it depends on.
    #[default]
    DemandDriven,

    /// Row-major iterative fill of the whole table.
    BottomUp,
}

/// Configuration for [`MemoizedDpSolver`](super::MemoizedDpSolver).
///
/// # Examples
///
/// ```
/// use u_knapsack::dp::{DpConfig, FillOrder};
///
/// let config = DpConfig::default()
///     .with_fill(FillOrder::BottomUp)
///     .with_max_table_cells(10_000_000);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DpConfig {
    /// Cell evaluation order.
    pub fill: FillOrder,

    /// Upper bound on `rows * cols`. `None` = limited only by memory.
    pub max_table_cells: Option<usize>,
}

impl DpConfig {
    /// Sets the cell evaluation order.
    pub fn with_fill(mut self, fill: FillOrder) -> Self {
        self.fill = fill;
        self
    }

    /// Sets the upper bound on table cells.
    pub fn with_max_table_cells(mut self, cells: usize) -> Self {
        self.max_table_cells = Some(cells);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), KnapsackError> {
        if self.max_table_cells == Some(0) {
            return Err(KnapsackError::InvalidConfig(
                "max_table_cells must be positive".into(),
            ));
        }
        Ok(())
    }
}
