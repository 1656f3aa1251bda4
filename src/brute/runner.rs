//! Exhaustive subset enumeration.

use tracing::trace;

use super::combinations::Combinations;
use crate::error::KnapsackError;
use crate::order::{Order, Selection, Value};
use crate::solver::Solver;

/// Exact solver that evaluates every subset.
///
/// Subsets are visited from the largest size to the smallest; the first
/// subset reaching a strictly greater value wins. Returns the empty
/// selection when no order fits.
///
/// Only suitable for tens of orders at most. Running out of time on
/// larger inputs is expected behavior, not a defect.
///
/// # Examples
///
/// ```
/// use u_knapsack::brute::BruteForceSolver;
/// use u_knapsack::order::Order;
/// use u_knapsack::Solver;
///
/// let orders = [
///     Order::new(10u32, 5),
///     Order::new(40, 4),
///     Order::new(30, 6),
///     Order::new(50, 3),
/// ];
/// let sel = BruteForceSolver.select(&orders, 10).unwrap();
/// assert_eq!(sel.value, 90);
/// assert_eq!(sel.indices, vec![1, 3]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BruteForceSolver;

impl<V: Value> Solver<V> for BruteForceSolver {
    fn name(&self) -> &'static str {
        "brute-force"
    }

    fn select(
        &self,
        orders: &[Order<V>],
        capacity: usize,
    ) -> Result<Selection<V>, KnapsackError> {
        // An order heavier than the capacity can never be part of a feasible subset.
        let fitting: Vec<usize> = orders
            .iter()
            .enumerate()
            .filter(|(_, o)| o.weight <= capacity)
            .map(|(i, _)| i)
            .collect();

        let mut best = Selection::empty();
        let mut evaluated = 0usize;

        for size in (1..=fitting.len()).rev() {
            let mut combos = Combinations::new(fitting.len(), size);
            while let Some(combo) = combos.advance() {
                evaluated += 1;
                let mut value = V::zero();
                let mut weight = 0usize;
                for &c in combo {
                    let order = &orders[fitting[c]];
                    weight = weight.saturating_add(order.weight);
                    if weight > capacity {
                        break;
                    }
                    value = value
                        .accumulate(order.value)
                        .ok_or(KnapsackError::ValueOverflow)?;
                }
                if weight <= capacity && value > best.value {
                    best = Selection {
                        value,
                        weight,
                        indices: combo.iter().map(|&c| fitting[c]).collect(),
                    };
                }
            }
        }

        trace!(
            orders = orders.len(),
            fitting = fitting.len(),
            evaluated,
            "brute-force search finished"
        );
        Ok(best)
    }
}
