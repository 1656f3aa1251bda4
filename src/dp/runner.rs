//! DP table fill and selection recovery.

use tracing::trace;

use super::config::{DpConfig, FillOrder};
use super::table::DpTable;
use crate::error::KnapsackError;
use crate::order::{Candidates, Order, Selection, Value};
use crate::solver::Solver;

/// Exact 0-1 knapsack solver, the default production strategy.
///
/// Zero-weight orders are always included; the table is built over the
/// orders with `0 < weight <= capacity` only, since heavier orders can
/// never be chosen.
///
/// # Examples
///
/// ```
/// use u_knapsack::dp::{DpConfig, FillOrder, MemoizedDpSolver};
/// use u_knapsack::order::Order;
/// use u_knapsack::Solver;
///
/// let orders = [
///     Order::new(10.0_f64, 5),
///     Order::new(40.0, 4),
///     Order::new(30.0, 6),
///     Order::new(50.0, 3),
/// ];
/// let solver = MemoizedDpSolver::new(DpConfig::default().with_fill(FillOrder::BottomUp));
/// let best = solver.solve(&orders, 10).unwrap();
/// assert!((best - 90.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoizedDpSolver {
    config: DpConfig,
}

/// Fitting orders addressed by 1-based table row.
struct Items<'a, V> {
    orders: &'a [Order<V>],
    fitting: &'a [usize],
}

impl<V: Value> Items<'_, V> {
    fn weight(&self, i: usize) -> usize {
        self.orders[self.fitting[i - 1]].weight
    }

    fn value(&self, i: usize) -> V {
        self.orders[self.fitting[i - 1]].value
    }
}

impl MemoizedDpSolver {
    /// Creates a solver with the given configuration.
    pub fn new(config: DpConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DpConfig {
        &self.config
    }

    /// Number of cells the table for this input would have, or `None` if
    /// the count overflows `usize`.
    pub fn table_cells<V: Value>(orders: &[Order<V>], capacity: usize) -> Option<usize> {
        let rows = Candidates::new(orders, capacity).fitting.len() + 1;
        rows.checked_mul(capacity.checked_add(1)?)
    }

    /// Fills and returns the memo table for `orders` under `capacity`.
    ///
    /// Rows follow the fitting orders in input order.
    pub fn fill_table<V: Value>(
        &self,
        orders: &[Order<V>],
        capacity: usize,
    ) -> Result<DpTable<V>, KnapsackError> {
        let candidates = Candidates::new(orders, capacity);
        let items = Items {
            orders,
            fitting: &candidates.fitting,
        };
        self.fill(&items, capacity)
    }

    fn fill<V: Value>(
        &self,
        items: &Items<'_, V>,
        capacity: usize,
    ) -> Result<DpTable<V>, KnapsackError> {
        let rows = items.fitting.len() + 1;
        let cols = capacity
            .checked_add(1)
            .ok_or(KnapsackError::TableTooLarge {
                rows,
                cols: usize::MAX,
                limit: usize::MAX,
            })?;
        let mut table = DpTable::allocate(rows, cols, self.config.max_table_cells)?;

        match self.config.fill {
            FillOrder::DemandDriven => {
                fill_demand_driven(&mut table, items, (rows - 1, capacity))?
            }
            FillOrder::BottomUp => fill_bottom_up(&mut table, items)?,
        }

        trace!(
            rows,
            cols,
            computed = table.computed_cells(),
            fill = ?self.config.fill,
            "dp table filled"
        );
        Ok(table)
    }
}

/// Memoized evaluation of `target` on an explicit stack.
///
/// Each pushed frame is one row above its parent, so the stack never holds
/// more than `rows` frames.
fn fill_demand_driven<V: Value>(
    table: &mut DpTable<V>,
    items: &Items<'_, V>,
    target: (usize, usize),
) -> Result<(), KnapsackError> {
    let mut stack = vec![target];

    while let Some(&(i, j)) = stack.last() {
        if table.get(i, j).is_some() {
            stack.pop();
            continue;
        }

        // Row 0 and column 0 are preset, so i >= 1 and j >= 1 here.
        let Some(exclude) = table.get(i - 1, j) else {
            stack.push((i - 1, j));
            continue;
        };

        let w = items.weight(i);
        let best = if w > j {
            exclude
        } else {
            let Some(rest) = table.get(i - 1, j - w) else {
                stack.push((i - 1, j - w));
                continue;
            };
            exclude.max_of(include(rest, items.value(i))?)
        };

        table.set(i, j, best);
        stack.pop();
    }
    Ok(())
}

fn fill_bottom_up<V: Value>(
    table: &mut DpTable<V>,
    items: &Items<'_, V>,
) -> Result<(), KnapsackError> {
    for i in 1..table.rows() {
        let w = items.weight(i);
        let v = items.value(i);
        for j in 1..table.cols() {
            let exclude = table.value(i - 1, j);
            let best = if w > j {
                exclude
            } else {
                exclude.max_of(include(table.value(i - 1, j - w), v)?)
            };
            table.set(i, j, best);
        }
    }
    Ok(())
}

fn include<V: Value>(rest: V, value: V) -> Result<V, KnapsackError> {
    rest.accumulate(value).ok_or(KnapsackError::ValueOverflow)
}

/// Walks back from `(rows - 1, capacity)` and collects the included orders.
///
/// Only cells on the dependency path of the target are read, all of which
/// are computed under either fill order.
fn backtrack<V: Value>(table: &DpTable<V>, items: &Items<'_, V>, capacity: usize) -> Vec<usize> {
    let mut chosen = Vec::new();
    let mut j = capacity;
    for i in (1..table.rows()).rev() {
        if table.value(i, j) > table.value(i - 1, j) {
            chosen.push(items.fitting[i - 1]);
            j -= items.weight(i);
        }
    }
    chosen
}

impl<V: Value> Solver<V> for MemoizedDpSolver {
    fn name(&self) -> &'static str {
        "memoized-dp"
    }

    fn select(
        &self,
        orders: &[Order<V>],
        capacity: usize,
    ) -> Result<Selection<V>, KnapsackError> {
        let candidates = Candidates::new(orders, capacity);
        let mut chosen = candidates.free.clone();

        if !candidates.fitting.is_empty() {
            let items = Items {
                orders,
                fitting: &candidates.fitting,
            };
            let table = self.fill(&items, capacity)?;
            chosen.extend(backtrack(&table, &items, capacity));
        }

        Selection::from_indices(orders, chosen)
    }
}
