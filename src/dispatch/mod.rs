//! Strategy selection.
//!
//! [`Dispatcher`] routes a problem to one of the three solvers. With the
//! default [`Strategy::Auto`] policy the exact DP solver is used unless the
//! input is large enough that its O(n * W) table becomes impractical, in
//! which case the greedy approximation takes over. Exhaustive search is
//! never chosen automatically; request it explicitly for diagnostics.

mod config;
mod engine;

pub use config::{DispatchConfig, Strategy, DEFAULT_MAX_TABLE_CELLS};
pub use engine::Dispatcher;
