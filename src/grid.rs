use bit_set::BitSet;
use std::fmt;

use crate::units::{ColumnsCount, RowsCount};


/// A fixed size two dimensional grid of flags addressed by `(row, column)`.
///
/// Used for the visited cells and for the open vertical and horizontal walls of a maze. Either
/// count may be zero, e.g. the horizontal walls of a single row maze, in which case the grid
/// holds nothing and every lookup is out of bounds.
#[derive(Clone, PartialEq, Eq)]
pub struct BoolGrid {
    rows: usize,
    columns: usize,
    bits: BitSet,
}

impl BoolGrid {
    /// All flags start false.
    pub fn new(rows: RowsCount, columns: ColumnsCount) -> BoolGrid {
        let (RowsCount(rows), ColumnsCount(columns)) = (rows, columns);
        BoolGrid {
            rows,
            columns,
            bits: BitSet::with_capacity(rows * columns),
        }
    }

    #[inline]
    pub fn rows(&self) -> RowsCount {
        RowsCount(self.rows)
    }

    #[inline]
    pub fn columns(&self) -> ColumnsCount {
        ColumnsCount(self.columns)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rows * self.columns
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    fn index(&self, row: usize, column: usize) -> Option<usize> {
        if row < self.rows && column < self.columns {
            Some(row * self.columns + column)
        } else {
            None
        }
    }

    /// The flag at `(row, column)`, or None when out of bounds.
    #[inline]
    pub fn get(&self, row: usize, column: usize) -> Option<bool> {
        self.index(row, column).map(|i| self.bits.contains(i))
    }

    /// True only for an in bounds flag that is set.
    #[inline]
    pub fn is_set(&self, row: usize, column: usize) -> bool {
        self.get(row, column).unwrap_or(false)
    }

    /// Set the flag at `(row, column)`.
    /// Returns false, changing nothing, when out of bounds.
    pub(crate) fn set(&mut self, row: usize, column: usize) -> bool {
        match self.index(row, column) {
            Some(i) => {
                self.bits.insert(i);
                true
            }
            None => false,
        }
    }

    /// Number of flags that are set.
    #[inline]
    pub fn count_set(&self) -> usize {
        self.bits.len()
    }

    #[inline]
    pub fn all_set(&self) -> bool {
        self.count_set() == self.len()
    }

    /// Row by row copy of the flags.
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        (0..self.rows)
            .map(|row| (0..self.columns).map(|column| self.is_set(row, column)).collect())
            .collect()
    }

    /// `(row, column)` of every set flag in row major order.
    pub fn iter_set(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let columns = self.columns;
        self.bits.iter().map(move |i| (i / columns, i % columns))
    }
}

impl fmt::Debug for BoolGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "BoolGrid :: rows: {}, columns: {}, set: {}", self.rows, self.columns, self.count_set())
    }
}
