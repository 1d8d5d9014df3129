use rand::Rng;

use crate::cells::{CellCoordinate, CoordinateSmallVec, Direction};
use crate::errors::*;
use crate::grid_iterators::{BatchIter, BatchIterType, CellIter};
use crate::units::{ColumnsCount, EdgesCount, NodesCount, RowsCount};


/// The fixed size of one rectangular maze.
///
/// Both counts are at least 1, which `new` enforces, so every other method can assume a
/// non-empty grid.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct GridDimensions {
    rows: RowsCount,
    columns: ColumnsCount,
}

impl GridDimensions {
    pub fn new(rows: RowsCount, columns: ColumnsCount) -> Result<GridDimensions> {
        let (RowsCount(r), ColumnsCount(c)) = (rows, columns);
        if r == 0 || c == 0 {
            bail!(ErrorKind::InvalidDimensions(r, c));
        }
        if r.checked_mul(c).is_none() {
            bail!(ErrorKind::InvalidDimensions(r, c));
        }

        Ok(GridDimensions { rows, columns })
    }

    #[inline(always)]
    pub fn size(&self) -> NodesCount {
        NodesCount(self.rows.0 * self.columns.0)
    }

    #[inline(always)]
    pub fn rows(&self) -> RowsCount {
        self.rows
    }

    #[inline(always)]
    pub fn columns(&self) -> ColumnsCount {
        self.columns
    }

    /// Shape of the vertical wall grid: `rows x (columns - 1)`.
    #[inline]
    pub fn vertical_walls_shape(&self) -> (RowsCount, ColumnsCount) {
        (self.rows, ColumnsCount(self.columns.0 - 1))
    }

    /// Shape of the horizontal wall grid: `(rows - 1) x columns`.
    #[inline]
    pub fn horizontal_walls_shape(&self) -> (RowsCount, ColumnsCount) {
        (RowsCount(self.rows.0 - 1), self.columns)
    }

    /// Cell count and interior wall count, i.e. the node and edge count of the full grid graph.
    pub fn graph_size(&self) -> (NodesCount, EdgesCount) {
        let (RowsCount(r), ColumnsCount(c)) = (self.rows, self.columns);
        let walls = r * (c - 1) + (r - 1) * c;
        (self.size(), EdgesCount(walls))
    }

    #[inline]
    pub fn is_valid_coordinate(&self, coord: CellCoordinate) -> bool {
        coord.row < self.rows.0 && coord.column < self.columns.0
    }

    /// Convert a coordinate to a one dimensional row major index in the range 0..size.
    /// Returns None if the coordinate is invalid.
    #[inline]
    pub fn coordinate_to_index(&self, coord: CellCoordinate) -> Option<usize> {
        if self.is_valid_coordinate(coord) {
            Some(coord.row * self.columns.0 + coord.column)
        } else {
            None
        }
    }

    /// A uniformly random cell. The row is drawn before the column.
    pub fn random_cell<R: Rng + ?Sized>(&self, rng: &mut R) -> CellCoordinate {
        let row = rng.gen_range(0..self.rows.0);
        let column = rng.gen_range(0..self.columns.0);
        CellCoordinate::new(row, column)
    }

    pub fn neighbour_at_direction(&self,
                                  coord: CellCoordinate,
                                  direction: Direction)
                                  -> Option<CellCoordinate> {
        coord.offset(direction).filter(|neighbour| self.is_valid_coordinate(*neighbour))
    }

    /// Cells that are directly below, above, right or left of a cell, whether or not a wall
    /// separates them.
    pub fn neighbours(&self, coord: CellCoordinate) -> CoordinateSmallVec {
        Direction::ALL
            .iter()
            .filter_map(|dir| self.neighbour_at_direction(coord, *dir))
            .collect()
    }

    /// The cell at the top left, where the token starts.
    #[inline]
    pub fn near_corner(&self) -> CellCoordinate {
        CellCoordinate::new(0, 0)
    }

    /// The cell at the bottom right, where the goal sits.
    #[inline]
    pub fn far_corner(&self) -> CellCoordinate {
        CellCoordinate::new(self.rows.0 - 1, self.columns.0 - 1)
    }

    #[inline]
    pub fn iter(&self) -> CellIter {
        CellIter::new(*self)
    }

    #[inline]
    pub fn iter_row(&self) -> BatchIter {
        BatchIter::new(BatchIterType::Row, *self)
    }

    #[inline]
    pub fn iter_column(&self) -> BatchIter {
        BatchIter::new(BatchIterType::Column, *self)
    }
}
