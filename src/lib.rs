//! 0-1 knapsack engine for order batching.
//!
//! Given candidate orders (each with a value and an integral weight) and a
//! payload weight limit, computes the most valuable subset that fits.
//!
//! - **Memoized DP** ([`dp`]): exact, O(n * W) time and memory. The
//!   default strategy.
//! - **Brute force** ([`brute`]): exact, exponential. A correctness oracle
//!   for small inputs.
//! - **Greedy** ([`greedy`]): value-density heuristic for inputs too
//!   large for the exact solver. A lower bound, not the optimum.
//! - **Dispatching** ([`dispatch`]): picks a strategy from problem size
//!   using caller-tunable thresholds.
//!
//! # Examples
//!
//! ```
//! use u_knapsack::order::Order;
//!
//! let orders = [
//!     Order::new(10.0_f64, 5),
//!     Order::new(40.0, 4),
//!     Order::new(30.0, 6),
//!     Order::new(50.0, 3),
//! ];
//! let best = u_knapsack::maximum_value(&orders, 10).unwrap();
//! assert!((best - 90.0).abs() < 1e-9);
//! ```

pub mod brute;
pub mod dispatch;
pub mod dp;
pub mod error;
pub mod generate;
pub mod greedy;
pub mod order;
mod solver;

pub use error::KnapsackError;
pub use solver::Solver;

use dispatch::{DispatchConfig, Dispatcher};
use order::{validate_orders, Order, Value};

/// Maximum total value of any subset of `orders` whose total weight does
/// not exceed `maximum_weight`, using the default dispatch policy.
///
/// Order values are validated first; negative or non-finite values are
/// rejected with [`KnapsackError::InvalidValue`].
pub fn maximum_value<V: Value>(
    orders: &[Order<V>],
    maximum_weight: usize,
) -> Result<V, KnapsackError> {
    maximum_value_with(orders, maximum_weight, &DispatchConfig::default())
}

/// Like [`maximum_value`], with a caller-supplied dispatch configuration.
pub fn maximum_value_with<V: Value>(
    orders: &[Order<V>],
    maximum_weight: usize,
    config: &DispatchConfig,
) -> Result<V, KnapsackError> {
    validate_orders(orders)?;
    Dispatcher::new(config.clone())?.solve(orders, maximum_weight)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::Strategy;

    #[test]
    fn test_canonical_scenario() {
        let orders = [
            Order::new(10u32, 5),
            Order::new(40, 4),
            Order::new(30, 6),
            Order::new(50, 3),
        ];
        assert_eq!(maximum_value(&orders, 10).unwrap(), 90);
    }

    #[test]
    fn test_rejects_negative_value() {
        let orders = [Order::new(1.0, 1), Order::new(-2.0, 1)];
        assert!(matches!(
            maximum_value(&orders, 5),
            Err(KnapsackError::InvalidValue { index: 1, .. })
        ));
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config =
            DispatchConfig::default().with_dp(dp::DpConfig::default().with_max_table_cells(0));
        let orders = [Order::new(1u32, 1)];
        assert!(matches!(
            maximum_value_with(&orders, 1, &config),
            Err(KnapsackError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_huge_capacity_answers_greedily() {
        let orders = [Order::new(1.0, 1)];
        assert_eq!(maximum_value(&orders, 1 << 40), Ok(1.0));
    }

    #[test]
    fn test_value_overflow_is_reported() {
        let orders = [Order::new(u32::MAX, 1), Order::new(10u32, 1)];
        assert_eq!(maximum_value(&orders, 2), Err(KnapsackError::ValueOverflow));
    }

    #[test]
    fn test_with_greedy_strategy() {
        let orders = [Order::new(60u32, 10), Order::new(100, 20), Order::new(120, 30)];
        let config = DispatchConfig::default().with_strategy(Strategy::Greedy);
        assert_eq!(maximum_value_with(&orders, 50, &config).unwrap(), 160);
        assert_eq!(maximum_value(&orders, 50).unwrap(), 220);
    }

    #[test]
    fn test_raw_input_pipeline() {
        use crate::order::{parse_capacity, parse_orders, RawOrder};

        let raw = [
            RawOrder::new(10.0, 5.0),
            RawOrder::new(40.0, 4.0),
            RawOrder::new(30.0, 6.0),
            RawOrder::new(50.0, 3.0),
        ];
        let orders = parse_orders(&raw).unwrap();
        let capacity = parse_capacity(10.0).unwrap();
        let best = maximum_value(&orders, capacity).unwrap();
        assert!((best - 90.0).abs() < 1e-9);
    }
}
