//! Density ranking and packing.

use std::cmp::Ordering;

use tracing::trace;

use super::config::{GreedyConfig, TieBreaker};
use crate::error::KnapsackError;
use crate::order::{Candidates, Order, Selection, Value};
use crate::solver::Solver;

/// Fast approximate solver. Only fails if the total value overflows `V`.
///
/// # Examples
///
/// ```
/// use u_knapsack::greedy::GreedySolver;
/// use u_knapsack::order::Order;
/// use u_knapsack::Solver;
///
/// let orders = [Order::new(60u32, 10), Order::new(100, 20), Order::new(120, 30)];
/// // The optimum is 220; greedy stops at 160.
/// assert_eq!(GreedySolver::default().solve(&orders, 50).unwrap(), 160);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GreedySolver {
    config: GreedyConfig,
}

impl GreedySolver {
    /// Creates a solver with the given configuration.
    pub fn new(config: GreedyConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GreedyConfig {
        &self.config
    }

    /// Sorts `indices` by density, highest first.
    fn rank<V: Value>(&self, orders: &[Order<V>], indices: &[usize]) -> Vec<usize> {
        let mut ranked: Vec<(usize, f64)> =
            indices.iter().map(|&i| (i, orders[i].density())).collect();

        ranked.sort_by(|&(a, da), &(b, db)| {
            db.total_cmp(&da).then_with(|| match self.config.tie_breaker {
                TieBreaker::PreserveOrder => Ordering::Equal,
                TieBreaker::LighterFirst => orders[a].weight.cmp(&orders[b].weight),
                TieBreaker::HeavierFirst => orders[b].weight.cmp(&orders[a].weight),
            })
        });

        ranked.into_iter().map(|(i, _)| i).collect()
    }
}

impl<V: Value> Solver<V> for GreedySolver {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn select(
        &self,
        orders: &[Order<V>],
        capacity: usize,
    ) -> Result<Selection<V>, KnapsackError> {
        let candidates = Candidates::new(orders, capacity);
        let mut chosen = candidates.free.clone();

        if candidates.fitting.is_empty() {
            return Selection::from_indices(orders, chosen);
        }

        let mut payload = 0usize;
        let mut skipped = 0usize;
        for i in self.rank(orders, &candidates.fitting) {
            if payload == capacity {
                break;
            }
            let weight = orders[i].weight;
            if weight > capacity - payload {
                skipped += 1;
                continue;
            }
            payload += weight;
            chosen.push(i);
        }

        trace!(
            fitting = candidates.fitting.len(),
            chosen = chosen.len(),
            skipped,
            payload,
            "greedy packing finished"
        );
        Selection::from_indices(orders, chosen)
    }
}
