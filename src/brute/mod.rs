//! Exhaustive search.
//!
//! Enumerates every subset of the orders that individually fit and keeps
//! the most valuable feasible one. Time is exponential in the number of
//! orders (up to 2^n subsets), so the solver is a correctness oracle for
//! small inputs and a diagnostic tool only. The dispatcher never selects
//! it automatically.

mod combinations;
mod runner;

pub use runner::BruteForceSolver;
