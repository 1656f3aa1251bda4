//! Solver routing.

use tracing::debug;

use super::config::{DispatchConfig, Strategy};
use crate::brute::BruteForceSolver;
use crate::dp::MemoizedDpSolver;
use crate::error::KnapsackError;
use crate::greedy::GreedySolver;
use crate::order::{Order, Selection, Value};
use crate::solver::Solver;

/// Routes each problem to a solver according to a [`DispatchConfig`].
///
/// # Examples
///
/// ```
/// use u_knapsack::dispatch::{DispatchConfig, Dispatcher, Strategy};
/// use u_knapsack::order::Order;
/// use u_knapsack::Solver;
///
/// let orders = [Order::new(60u32, 10), Order::new(100, 20), Order::new(120, 30)];
///
/// let exact = Dispatcher::default();
/// assert_eq!(exact.choose(&orders, 50), Strategy::Exact);
/// assert_eq!(exact.solve(&orders, 50).unwrap(), 220);
///
/// // Trade exactness for scale: anything above two orders goes greedy.
/// let fast = Dispatcher::new(DispatchConfig::default().with_greedy_threshold(2)).unwrap();
/// assert_eq!(fast.choose(&orders, 50), Strategy::Greedy);
/// assert_eq!(fast.solve(&orders, 50).unwrap(), 160);
/// ```
#[derive(Debug, Clone)]
pub struct Dispatcher {
    config: DispatchConfig,
    exact: MemoizedDpSolver,
    greedy: GreedySolver,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::from_valid(DispatchConfig::default())
    }
}

impl Dispatcher {
    /// Creates a dispatcher, rejecting invalid configurations.
    pub fn new(config: DispatchConfig) -> Result<Self, KnapsackError> {
        config.validate()?;
        Ok(Self::from_valid(config))
    }

    fn from_valid(config: DispatchConfig) -> Self {
        Self {
            exact: MemoizedDpSolver::new(config.dp.clone()),
            greedy: GreedySolver::new(config.greedy.clone()),
            config,
        }
    }

    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    /// Resolves the configured strategy for this input. Never returns
    /// [`Strategy::Auto`].
    pub fn choose<V: Value>(&self, orders: &[Order<V>], capacity: usize) -> Strategy {
        match self.config.strategy {
            Strategy::Auto => {}
            explicit => return explicit,
        }

        if orders.len() > self.config.greedy_threshold {
            return Strategy::Greedy;
        }

        match (
            MemoizedDpSolver::table_cells(orders, capacity),
            self.config.dp.max_table_cells,
        ) {
            (None, _) => Strategy::Greedy,
            (Some(cells), Some(limit)) if cells > limit => Strategy::Greedy,
            _ => Strategy::Exact,
        }
    }
}

impl<V: Value> Solver<V> for Dispatcher {
    fn name(&self) -> &'static str {
        "dispatcher"
    }

    fn select(
        &self,
        orders: &[Order<V>],
        capacity: usize,
    ) -> Result<Selection<V>, KnapsackError> {
        let strategy = self.choose(orders, capacity);
        let solver: &dyn Solver<V> = match strategy {
            Strategy::BruteForce => &BruteForceSolver,
            Strategy::Greedy => &self.greedy,
            Strategy::Exact | Strategy::Auto => &self.exact,
        };

        debug!(
            strategy = ?strategy,
            solver = solver.name(),
            orders = orders.len(),
            capacity,
            "dispatching knapsack problem"
        );
        solver.select(orders, capacity)
    }
}
