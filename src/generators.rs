use log::{debug, trace};
use rand::Rng;

use crate::cells::{CellCoordinate, Direction, WallPosition};
use crate::errors::*;
use crate::grid_dimensions::GridDimensions;
use crate::maze::Maze;
use crate::units::{ColumnsCount, RowsCount};

/// Shuffle a slice in place with the Fisher-Yates algorithm.
///
/// Walks a counter down from the slice length, each time swapping the last unshuffled item with
/// one drawn uniformly from the unshuffled prefix (itself included). Every permutation is
/// equally likely as long as `rng` is uniform. One random draw per item, last position first.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    let mut counter = items.len();
    while counter > 0 {
        let index = rng.gen_range(0..counter);
        counter -= 1;
        items.swap(counter, index);
    }
}

/// Validate the dimensions and generate a maze with `recursive_backtracker`.
pub fn generate<R: Rng + ?Sized>(rows: usize, columns: usize, rng: &mut R) -> Result<Maze> {
    let dimensions = GridDimensions::new(RowsCount(rows), ColumnsCount(columns))?;
    Ok(recursive_backtracker(dimensions, rng))
}

// A cell on the carving path and how far through its shuffled neighbours it has got.
struct Frame {
    cell: CellCoordinate,
    candidates: [Direction; 4],
    next_candidate: usize,
}

impl Frame {
    fn new<R: Rng + ?Sized>(cell: CellCoordinate, rng: &mut R) -> Frame {
        let mut candidates = Direction::ALL;
        shuffle(&mut candidates, rng);
        Frame {
            cell,
            candidates,
            next_candidate: 0,
        }
    }
}

/// Carve a perfect maze with a randomized depth first traversal.
///
/// Starts from a random cell. Entering a cell marks it visited and shuffles its four candidate
/// directions. The first candidate in that order that leads to an in bounds unvisited neighbour
/// has its wall opened and the neighbour is entered straight away. When a cell runs out of
/// candidates the traversal backtracks to the cell it came from and carries on with that cell's
/// remaining candidates.
///
/// The path is held on an explicit stack rather than the call stack, so large grids cannot
/// overflow it. The visiting order, and so the order random numbers are consumed in, is the
/// same as for the recursive formulation: start row, start column, then one shuffle per cell.
pub fn recursive_backtracker<R: Rng + ?Sized>(dimensions: GridDimensions, rng: &mut R) -> Maze {
    let mut maze = Maze::unvisited(dimensions);

    let start = dimensions.random_cell(rng);
    debug!("carving {}x{} maze from {}", dimensions.rows().0, dimensions.columns().0, start);

    maze.mark_visited(start);
    let mut stack = vec![Frame::new(start, rng)];

    while let Some(frame) = stack.last_mut() {
        if frame.next_candidate == frame.candidates.len() {
            stack.pop();
            continue;
        }

        let direction = frame.candidates[frame.next_candidate];
        frame.next_candidate += 1;
        let cell = frame.cell;

        let next = match dimensions.neighbour_at_direction(cell, direction) {
            Some(neighbour) => neighbour,
            None => continue,
        };
        if maze.is_visited(next) {
            continue;
        }

        if let Some(wall) = WallPosition::between(cell, direction) {
            trace!("opening {:?} between {} and {}", wall, cell, next);
            maze.open_wall(wall);
        }
        maze.mark_visited(next);
        stack.push(Frame::new(next, rng));
    }

    debug!("carved {} passages", maze.open_walls_count());
    maze
}
