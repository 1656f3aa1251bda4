//! Exact dynamic programming.
//!
//! Standard 0-1 knapsack recurrence over a `(k+1) x (W+1)` table, where
//! `k` counts the orders with `0 < weight <= W`:
//!
//! ```text
//! m(0, j) = 0
//! m(i, 0) = 0
//! m(i, j) = m(i-1, j)                                 if w(i) > j
//! m(i, j) = max(m(i-1, j), m(i-1, j - w(i)) + v(i))   otherwise
//! ```
//!
//! The table can be filled demand-driven (memoized, only the cells
//! reachable from `m(k, W)`) or bottom-up (every cell, row-major). Both
//! produce identical results. Neither uses native recursion: the
//! demand-driven fill runs on an explicit work stack whose depth is
//! bounded by `k + 1`.
//!
//! Time and memory are O(k * W). Use [`DpConfig::with_max_table_cells`]
//! to cap the table size.

mod config;
mod runner;
mod table;

pub use config::{DpConfig, FillOrder};
pub use runner::MemoizedDpSolver;
pub use table::{Cell, DpTable};
