//! Greedy value-density approximation.
//!
//! Ranks orders by value per unit of weight and packs them in that order,
//! skipping any that would overflow the capacity. Runs in O(n log n) and
//! needs no table, which makes it the fallback for inputs too large for
//! the exact solver.
//!
//! The result is a lower bound on the optimum, not the optimum. With
//! orders `60/10`, `100/20`, `120/30` (value/weight) and capacity 50, the
//! densities are 6, 5 and 4: greedy packs the first two (value 160,
//! weight 30) and then cannot fit the third, while the optimum takes the
//! second and third for 220.

mod config;
mod runner;

pub use config::{GreedyConfig, TieBreaker};
pub use runner::GreedySolver;
