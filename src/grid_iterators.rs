use crate::cells::CellCoordinate;
use crate::grid_dimensions::GridDimensions;
use crate::units::{ColumnIndex, ColumnsCount, RowIndex, RowsCount};

/// Row major iteration over every cell of a grid.
#[derive(Debug, Copy, Clone)]
pub struct CellIter {
    dimensions: GridDimensions,
    current_cell_number: usize,
    cells_count: usize,
}

impl CellIter {
    pub(crate) fn new(dimensions: GridDimensions) -> CellIter {
        CellIter {
            dimensions,
            current_cell_number: 0,
            cells_count: dimensions.size().0,
        }
    }
}

impl ExactSizeIterator for CellIter {} // default impl using size_hint()
impl Iterator for CellIter {
    type Item = CellCoordinate;
    fn next(&mut self) -> Option<Self::Item> {
        if self.current_cell_number < self.cells_count {
            let coord = CellCoordinate::from_row_major_index(self.current_cell_number,
                                                             &self.dimensions);
            self.current_cell_number += 1;
            Some(coord)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let lower_bound = self.cells_count - self.current_cell_number;
        let upper_bound = lower_bound;
        (lower_bound, Some(upper_bound))
    }
}

#[derive(Debug, Copy, Clone)]
pub(crate) enum BatchIterType {
    Row,
    Column,
}

/// Iteration over whole rows (top to bottom) or whole columns (left to right) of a grid.
#[derive(Debug, Copy, Clone)]
pub struct BatchIter {
    iter_type: BatchIterType,
    iter_initial_length: usize,
    current_index: usize,
    rows: RowsCount,
    columns: ColumnsCount,
}

impl BatchIter {
    pub(crate) fn new(iter_type: BatchIterType, dimensions: GridDimensions) -> BatchIter {
        let rows = dimensions.rows();
        let columns = dimensions.columns();
        BatchIter {
            iter_type,
            iter_initial_length: match iter_type {
                BatchIterType::Row => rows.0,
                BatchIterType::Column => columns.0,
            },
            current_index: 0,
            rows,
            columns,
        }
    }
}

impl ExactSizeIterator for BatchIter {}
impl Iterator for BatchIter {
    type Item = Vec<CellCoordinate>;
    fn next(&mut self) -> Option<Self::Item> {
        if self.current_index >= self.iter_initial_length {
            return None;
        }

        let index = self.current_index;
        let coords = match self.iter_type {
            BatchIterType::Row => {
                (0..self.columns.0)
                    .map(|i| CellCoordinate::from_row_column_indices(RowIndex(index), ColumnIndex(i)))
                    .collect()
            }
            BatchIterType::Column => {
                (0..self.rows.0)
                    .map(|i| CellCoordinate::from_row_column_indices(RowIndex(i), ColumnIndex(index)))
                    .collect()
            }
        };
        self.current_index += 1;
        Some(coords)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let lower_bound = self.iter_initial_length - self.current_index;
        let upper_bound = lower_bound;
        (lower_bound, Some(upper_bound))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dims(rows: usize, columns: usize) -> GridDimensions {
        GridDimensions::new(RowsCount(rows), ColumnsCount(columns)).unwrap()
    }

    #[test]
    fn cell_iter() {
        let d = dims(2, 2);
        assert_eq!(d.iter().collect::<Vec<CellCoordinate>>(),
                   &[CellCoordinate::new(0, 0),
                     CellCoordinate::new(0, 1),
                     CellCoordinate::new(1, 0),
                     CellCoordinate::new(1, 1)]);
        assert_eq!(dims(3, 5).iter().len(), 15);
    }

    #[test]
    fn row_iter() {
        let d = dims(2, 3);
        assert_eq!(d.iter_row().collect::<Vec<Vec<CellCoordinate>>>(),
                   vec![vec![CellCoordinate::new(0, 0), CellCoordinate::new(0, 1), CellCoordinate::new(0, 2)],
                        vec![CellCoordinate::new(1, 0), CellCoordinate::new(1, 1), CellCoordinate::new(1, 2)]]);
    }

    #[test]
    fn column_iter() {
        let d = dims(2, 3);
        let columns = d.iter_column().collect::<Vec<Vec<CellCoordinate>>>();
        assert_eq!(columns.len(), 3);
        assert_eq!(columns[2], vec![CellCoordinate::new(0, 2), CellCoordinate::new(1, 2)]);
    }
}
