use smallvec::SmallVec;
use std::convert::From;
use std::fmt;

use crate::grid_dimensions::GridDimensions;
use crate::units::{ColumnIndex, RowIndex};

pub type CoordinateSmallVec = SmallVec<[CellCoordinate; 4]>;

/// A cell in a rectangular maze, rows counting down from the top and columns counting right
/// from the left edge.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct CellCoordinate {
    pub row: usize,
    pub column: usize,
}

impl CellCoordinate {
    pub fn new(row: usize, column: usize) -> CellCoordinate {
        CellCoordinate { row, column }
    }

    #[inline]
    pub fn from_row_column_indices(row_index: RowIndex, col_index: ColumnIndex) -> Self {
        let (RowIndex(row), ColumnIndex(column)) = (row_index, col_index);
        CellCoordinate::new(row, column)
    }

    #[inline]
    pub fn from_row_major_index(index: usize, dimensions: &GridDimensions) -> CellCoordinate {
        let width = dimensions.columns().0;
        CellCoordinate::new(index / width, index % width)
    }

    /// Creates a new coordinate offset 1 cell away in the given direction.
    /// Returns None if the coordinate would be negative. The result is not bounds checked
    /// against any grid, see `GridDimensions::neighbour_at_direction`.
    pub fn offset(self, dir: Direction) -> Option<CellCoordinate> {
        let CellCoordinate { row, column } = self;
        match dir {
            Direction::Down => Some(CellCoordinate::new(row + 1, column)),
            Direction::Up => {
                if row > 0 {
                    Some(CellCoordinate::new(row - 1, column))
                } else {
                    None
                }
            }
            Direction::Right => Some(CellCoordinate::new(row, column + 1)),
            Direction::Left => {
                if column > 0 {
                    Some(CellCoordinate::new(row, column - 1))
                } else {
                    None
                }
            }
        }
    }
}

impl From<(usize, usize)> for CellCoordinate {
    fn from(row_column_pair: (usize, usize)) -> CellCoordinate {
        CellCoordinate::new(row_column_pair.0, row_column_pair.1)
    }
}

impl fmt::Display for CellCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub enum Direction {
    Down,
    Up,
    Right,
    Left,
}

impl Direction {
    /// The candidate order a cell considers its neighbours in before shuffling.
    pub const ALL: [Direction; 4] = [Direction::Down, Direction::Up, Direction::Right, Direction::Left];

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Down => Direction::Up,
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Left => Direction::Right,
        }
    }
}

/// One interior wall of the maze.
///
/// A vertical wall at `(row, column)` separates cell `(row, column)` from `(row, column + 1)`.
/// A horizontal wall at `(row, column)` separates cell `(row, column)` from `(row + 1, column)`.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug)]
pub enum WallPosition {
    Vertical { row: usize, column: usize },
    Horizontal { row: usize, column: usize },
}

impl WallPosition {
    /// The wall crossed when stepping from `coord` in `direction`.
    /// Returns None when the step would leave the top or left edge. Steps off the bottom or right
    /// edge give a wall position outside of the wall grids, which lookups then reject.
    pub fn between(coord: CellCoordinate, direction: Direction) -> Option<WallPosition> {
        let CellCoordinate { row, column } = coord;
        match direction {
            Direction::Left => {
                if column > 0 {
                    Some(WallPosition::Vertical { row, column: column - 1 })
                } else {
                    None
                }
            }
            Direction::Right => Some(WallPosition::Vertical { row, column }),
            Direction::Up => {
                if row > 0 {
                    Some(WallPosition::Horizontal { row: row - 1, column })
                } else {
                    None
                }
            }
            Direction::Down => Some(WallPosition::Horizontal { row, column }),
        }
    }

    /// The two cells either side of the wall, top/left cell first.
    pub fn cells(self) -> (CellCoordinate, CellCoordinate) {
        match self {
            WallPosition::Vertical { row, column } => {
                (CellCoordinate::new(row, column), CellCoordinate::new(row, column + 1))
            }
            WallPosition::Horizontal { row, column } => {
                (CellCoordinate::new(row, column), CellCoordinate::new(row + 1, column))
            }
        }
    }
}
