use std::fmt::{Debug, Display, LowerHex};

use itertools::Itertools;
use num::traits::{Bounded, CheckedAdd, One, Unsigned, Zero};
use smallvec::SmallVec;

use crate::cells::CellCoordinate;
use crate::maze::Maze;
use crate::utils;
use crate::utils::FnvHashMap;


// Stands in for a generic parameter alias: any unsigned integer that can count steps and be
// printed as hex in a cell body.
pub trait MaxDistance
    : Zero + One + Bounded + CheckedAdd + Unsigned + Debug + Clone + Copy + Display + LowerHex + Ord
    {
}
impl<T> MaxDistance for T
    where T: Zero + One + Bounded + CheckedAdd + Unsigned + Debug + Clone + Copy + Display + LowerHex + Ord
{
}


/// Step counts from one start cell to every cell reachable from it.
#[derive(Debug, Clone)]
pub struct Distances<MaxDistanceT = u32> {
    start_coordinate: CellCoordinate,
    distances: FnvHashMap<CellCoordinate, MaxDistanceT>,
    max_distance: MaxDistanceT,
}

impl<MaxDistanceT> Distances<MaxDistanceT>
    where MaxDistanceT: MaxDistance
{
    /// Flood fill outwards from `start_coordinate` through the open walls.
    /// Returns None if the start is not a cell of the maze, or if some reachable cell is further
    /// away than `MaxDistanceT` can count.
    pub fn for_maze(maze: &Maze, start_coordinate: CellCoordinate) -> Option<Distances<MaxDistanceT>> {

        if !maze.dimensions().is_valid_coordinate(start_coordinate) {
            return None;
        }

        let mut max = Zero::zero();
        let mut distances = utils::fnv_hashmap(maze.size());
        distances.insert(start_coordinate, Zero::zero());

        // Every passage is one step, so a cell's first recorded distance is already its
        // shortest and the map doubles as the visited set.
        let mut frontier = vec![start_coordinate];
        while !frontier.is_empty() {

            let mut new_frontier = vec![];
            for cell_coord in &frontier {

                let distance_to_cell: MaxDistanceT = distances[cell_coord];
                if distance_to_cell > max {
                    max = distance_to_cell;
                }

                let links = maze.links(*cell_coord).unwrap_or_default();
                for link_coordinate in &links {
                    if !distances.contains_key(link_coordinate) {
                        let distance_to_link = distance_to_cell.checked_add(&MaxDistanceT::one())?;
                        distances.insert(*link_coordinate, distance_to_link);
                        new_frontier.push(*link_coordinate);
                    }
                }
            }
            frontier = new_frontier;
        }

        Some(Distances {
            start_coordinate,
            distances,
            max_distance: max,
        })
    }

    #[inline(always)]
    pub fn start(&self) -> CellCoordinate {
        self.start_coordinate
    }

    #[inline(always)]
    pub fn max(&self) -> MaxDistanceT {
        self.max_distance
    }

    /// None if the cell is unreachable or not part of the maze.
    #[inline(always)]
    pub fn distance_from_start_to(&self, coord: CellCoordinate) -> Option<MaxDistanceT> {
        self.distances.get(&coord).cloned()
    }

    #[inline]
    pub fn reachable_count(&self) -> usize {
        self.distances.len()
    }

    /// Every cell at the maximum distance, in row major order.
    pub fn furthest_points(&self) -> SmallVec<[CellCoordinate; 8]> {
        let furthest_distance = self.max();
        self.distances
            .iter()
            .filter(|&(_, distance)| *distance == furthest_distance)
            .map(|(coord, _)| *coord)
            .sorted()
            .collect()
    }
}

/// The route from the start of `distances_from_start` to `end_point`, both ends included.
/// Returns None when `end_point` cannot be reached.
pub fn shortest_path<MaxDistanceT>(maze: &Maze,
                                   distances_from_start: &Distances<MaxDistanceT>,
                                   end_point: CellCoordinate)
                                   -> Option<Vec<CellCoordinate>>
    where MaxDistanceT: MaxDistance
{
    let mut current_distance = distances_from_start.distance_from_start_to(end_point)?;
    let start = distances_from_start.start();
    let mut path = vec![end_point];
    let mut current_coord = end_point;

    while current_coord != start {

        let closest_to_start = maze.links(current_coord)?
            .iter()
            .filter_map(|coord| {
                distances_from_start.distance_from_start_to(*coord).map(|d| (*coord, d))
            })
            .min_by_key(|&(_, distance)| distance);

        match closest_to_start {
            Some((closer_coord, closer_distance)) if closer_distance < current_distance => {
                current_coord = closer_coord;
                current_distance = closer_distance;
                path.push(current_coord);
            }
            // Distances were computed for some other maze.
            _ => return None,
        }
    }

    path.reverse();
    Some(path)
}

/// The longest route through a perfect maze.
///
/// The cell furthest from any cell is one end of a longest path, the other end is the cell
/// furthest from that. On a maze with loops or unreachable areas this is just some long path.
pub fn longest_path(maze: &Maze) -> Vec<CellCoordinate> {
    let arbitrary_start_point = maze.dimensions().near_corner();

    let first_distances = match Distances::<u32>::for_maze(maze, arbitrary_start_point) {
        Some(d) => d,
        None => return vec![],
    };
    let long_path_start = first_distances.furthest_points()[0];

    let distances_from_start = match Distances::<u32>::for_maze(maze, long_path_start) {
        Some(d) => d,
        None => return vec![],
    };
    let end_point = distances_from_start.furthest_points()[0];

    shortest_path(maze, &distances_from_start, end_point).unwrap_or_default()
}

/// The route a token at the near corner takes to the goal at the far corner.
pub fn solution_path(maze: &Maze) -> Option<Vec<CellCoordinate>> {
    let dimensions = maze.dimensions();
    let distances = Distances::<u32>::for_maze(maze, dimensions.near_corner())?;
    shortest_path(maze, &distances, dimensions.far_corner())
}


#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;
    use rand::SeedableRng;
    use rand_xorshift::XorShiftRng;

    use super::*;
    use crate::cells::WallPosition;
    use crate::generators;
    use crate::grid_dimensions::GridDimensions;
    use crate::units::{ColumnsCount, RowsCount};

    fn gc(row: usize, column: usize) -> CellCoordinate {
        CellCoordinate::new(row, column)
    }

    fn blank(rows: usize, columns: usize) -> Maze {
        Maze::unvisited(GridDimensions::new(RowsCount(rows), ColumnsCount(columns)).unwrap())
    }

    // 2x2 with the bottom right only reachable by going down first:
    //  S   X
    //  |
    //  X - E
    fn hook() -> Maze {
        let mut m = blank(2, 2);
        m.open_wall(WallPosition::Horizontal { row: 0, column: 0 });
        m.open_wall(WallPosition::Vertical { row: 1, column: 0 });
        m
    }

    fn generated(rows: usize, columns: usize, seed: u64) -> Maze {
        generators::generate(rows, columns, &mut XorShiftRng::seed_from_u64(seed)).unwrap()
    }

    #[test]
    fn distances_construction_requires_valid_start_coordinate() {
        let m = blank(3, 3);
        assert!(Distances::<u32>::for_maze(&m, gc(3, 0)).is_none());
        assert!(Distances::<u32>::for_maze(&m, gc(0, 3)).is_none());
    }

    #[test]
    fn start() {
        let m = blank(3, 3);
        let distances = Distances::<u32>::for_maze(&m, gc(1, 1)).unwrap();
        assert_eq!(distances.start(), gc(1, 1));
    }

    #[test]
    fn distances_to_unreachable_cells_is_none() {
        let m = blank(3, 3);
        let start = gc(0, 0);
        let distances = Distances::<u8>::for_maze(&m, start).unwrap();
        for coord in m.dimensions().iter() {
            if coord == start {
                assert_eq!(distances.distance_from_start_to(coord), Some(0));
            } else {
                assert_eq!(distances.distance_from_start_to(coord), None);
            }
        }
        assert_eq!(distances.reachable_count(), 1);
    }

    #[test]
    fn distances_along_a_hook() {
        let m = hook();
        let distances = Distances::<u16>::for_maze(&m, gc(0, 0)).unwrap();
        assert_eq!(distances.distance_from_start_to(gc(0, 0)), Some(0));
        assert_eq!(distances.distance_from_start_to(gc(1, 0)), Some(1));
        assert_eq!(distances.distance_from_start_to(gc(1, 1)), Some(2));
        assert_eq!(distances.distance_from_start_to(gc(0, 1)), None);
        assert_eq!(distances.max(), 2);
        assert_eq!(&*distances.furthest_points(), &[gc(1, 1)]);
    }

    #[test]
    fn distances_too_long_for_the_counter_type_is_none() {
        // A single row is one corridor: the far end is 299 steps away.
        let m = generated(1, 300, 1);
        assert!(Distances::<u8>::for_maze(&m, gc(0, 0)).is_none());

        let distances = Distances::<u16>::for_maze(&m, gc(0, 0)).unwrap();
        assert_eq!(distances.max(), 299);
        assert_eq!(&*distances.furthest_points(), &[gc(0, 299)]);

        // 255 steps still fits.
        let m = generated(1, 256, 1);
        assert_eq!(Distances::<u8>::for_maze(&m, gc(0, 0)).map(|d| d.max()), Some(255));
    }

    #[test]
    fn shortest_path_along_a_hook() {
        let m = hook();
        let distances = Distances::<u32>::for_maze(&m, gc(0, 0)).unwrap();
        assert_eq!(shortest_path(&m, &distances, gc(1, 1)),
                   Some(vec![gc(0, 0), gc(1, 0), gc(1, 1)]));
        assert_eq!(shortest_path(&m, &distances, gc(0, 0)), Some(vec![gc(0, 0)]));
        assert_eq!(shortest_path(&m, &distances, gc(0, 1)), None);
    }

    #[test]
    fn distances_from_another_maze_give_no_path() {
        let distances = Distances::<u32>::for_maze(&hook(), gc(0, 0)).unwrap();
        let other = blank(2, 2);
        assert_eq!(shortest_path(&other, &distances, gc(1, 1)), None);
    }

    #[test]
    fn longest_path_in_a_corridor() {
        let m = generated(1, 7, 3);
        let path = longest_path(&m);
        assert_eq!(path.len(), 7);
        let ends = [path[0], path[6]];
        assert!(ends.contains(&gc(0, 0)) && ends.contains(&gc(0, 6)));
    }

    #[test]
    fn longest_path_of_a_single_cell() {
        let m = generated(1, 1, 3);
        assert_eq!(longest_path(&m), vec![gc(0, 0)]);
    }

    #[test]
    fn solution_path_runs_corner_to_corner() {
        let m = generated(8, 10, 77);
        let path = solution_path(&m).expect("perfect mazes connect every cell");
        assert_eq!(path.first(), Some(&gc(0, 0)));
        assert_eq!(path.last(), Some(&gc(7, 9)));
        for (a, b) in path.iter().tuple_windows() {
            assert!(m.is_linked(*a, *b));
        }
    }

    #[test]
    fn quickcheck_every_cell_reachable_from_the_start() {
        fn p(rows: u8, columns: u8, seed: u64) -> bool {
            let (rows, columns) = (rows as usize % 16 + 1, columns as usize % 16 + 1);
            let m = generated(rows, columns, seed);
            let distances = Distances::<u32>::for_maze(&m, gc(0, 0)).unwrap();

            // A tree has exactly one path to each cell, so every path is as long as its
            // distance and no longer than the longest path.
            let longest = longest_path(&m).len();
            distances.reachable_count() == rows * columns &&
            m.dimensions().iter().all(|coord| {
                let d = distances.distance_from_start_to(coord).unwrap() as usize;
                let path = shortest_path(&m, &distances, coord).unwrap();
                path.len() == d + 1 && path.len() <= longest
            })
        }
        quickcheck(p as fn(u8, u8, u64) -> bool);
    }
}
