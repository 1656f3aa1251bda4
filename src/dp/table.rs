//! Memo table.

use crate::error::KnapsackError;
use crate::order::Value;

/// State of one sub-problem.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cell<V> {
    /// Not computed yet.
    Unset,
    /// Best value for this sub-problem.
    Computed(V),
}

/// Row-major `rows x cols` table of [`Cell`]s.
///
/// Cell `(i, j)` holds the best value using the first `i` fitting orders
/// with weight budget `j`. Row 0 and column 0 are zero from construction.
/// A computed cell is never overwritten.
#[derive(Debug, Clone)]
pub struct DpTable<V> {
    rows: usize,
    cols: usize,
    cells: Vec<Cell<V>>,
    computed: usize,
}

impl<V: Value> DpTable<V> {
    /// Allocates the table, refusing sizes above `limit` cells.
    pub(crate) fn allocate(
        rows: usize,
        cols: usize,
        limit: Option<usize>,
    ) -> Result<Self, KnapsackError> {
        let too_large = |limit| KnapsackError::TableTooLarge { rows, cols, limit };
        let len = rows.checked_mul(cols).ok_or(too_large(usize::MAX))?;
        if let Some(limit) = limit {
            if len > limit {
                return Err(too_large(limit));
            }
        }

        let mut cells = Vec::new();
        cells
            .try_reserve_exact(len)
            .map_err(|_| KnapsackError::AllocationFailed { cells: len })?;
        cells.resize(len, Cell::Unset);

        let mut table = Self {
            rows,
            cols,
            cells,
            computed: 0,
        };
        for j in 0..cols {
            table.set(0, j, V::zero());
        }
        for i in 1..rows {
            table.set(i, 0, V::zero());
        }
        Ok(table)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of cells in the computed state, base cases included.
    pub fn computed_cells(&self) -> usize {
        self.computed
    }

    /// Returns the state of cell `(i, j)`.
    pub fn cell(&self, i: usize, j: usize) -> Cell<V> {
        self.cells[i * self.cols + j]
    }

    /// Returns the value of cell `(i, j)` if computed.
    pub fn get(&self, i: usize, j: usize) -> Option<V> {
        match self.cell(i, j) {
            Cell::Computed(v) => Some(v),
            Cell::Unset => None,
        }
    }

    /// Value of a cell the caller knows to be computed.
    pub(crate) fn value(&self, i: usize, j: usize) -> V {
        match self.cell(i, j) {
            Cell::Computed(v) => v,
            Cell::Unset => unreachable!("dp cell ({i}, {j}) read before it was computed"),
        }
    }

    pub(crate) fn set(&mut self, i: usize, j: usize, value: V) {
        let idx = i * self.cols + j;
        debug_assert!(
            matches!(self.cells[idx], Cell::Unset),
            "dp cell ({i}, {j}) computed twice"
        );
        self.cells[idx] = Cell::Computed(value);
        self.computed += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_cases_zeroed() {
        let table = DpTable::<u32>::allocate(3, 4, None).unwrap();
        for j in 0..4 {
            assert_eq!(table.get(0, j), Some(0));
        }
        for i in 0..3 {
            assert_eq!(table.get(i, 0), Some(0));
        }
        assert_eq!(table.cell(1, 1), Cell::Unset);
        // row 0 (4 cells) + column 0 below it (2 cells)
        assert_eq!(table.computed_cells(), 6);
    }

    #[test]
    fn test_limit_enforced() {
        let err = DpTable::<f64>::allocate(10, 10, Some(99)).unwrap_err();
        assert_eq!(
            err,
            KnapsackError::TableTooLarge {
                rows: 10,
                cols: 10,
                limit: 99
            }
        );
        assert!(DpTable::<f64>::allocate(10, 10, Some(100)).is_ok());
    }

    #[test]
    fn test_dimension_overflow() {
        let err = DpTable::<u64>::allocate(usize::MAX, 2, None).unwrap_err();
        assert!(matches!(
            err,
            KnapsackError::TableTooLarge {
                limit: usize::MAX,
                ..
            }
        ));
    }
}
