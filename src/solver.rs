//! The common solver contract.

use crate::error::KnapsackError;
use crate::order::{Order, Selection, Value};

/// A 0-1 knapsack solving strategy.
///
/// Implementors choose a feasible subset of `orders` whose total weight
/// does not exceed `capacity`. Exact strategies return the optimum;
/// approximate ones return a lower bound on it.
///
/// Solvers assume their input has already been validated (see
/// [`crate::order::validate_orders`]).
///
/// # Examples
///
/// ```
/// use u_knapsack::dp::MemoizedDpSolver;
/// use u_knapsack::order::Order;
/// use u_knapsack::Solver;
///
/// let orders = [Order::new(60u32, 10), Order::new(100, 20), Order::new(120, 30)];
/// let best = MemoizedDpSolver::default().solve(&orders, 50).unwrap();
/// assert_eq!(best, 220);
/// ```
pub trait Solver<V: Value> {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Chooses a feasible subset of orders.
    fn select(&self, orders: &[Order<V>], capacity: usize)
        -> Result<Selection<V>, KnapsackError>;

    /// Returns only the total value of [`select`](Solver::select).
    fn solve(&self, orders: &[Order<V>], capacity: usize) -> Result<V, KnapsackError> {
        self.select(orders, capacity).map(|s| s.value)
    }
}
