use petgraph::algo;
use petgraph::graph::{NodeIndex, UnGraph};

use crate::cells::{CellCoordinate, CoordinateSmallVec, Direction, WallPosition};
use crate::grid::BoolGrid;
use crate::grid_dimensions::GridDimensions;
use crate::units::{EdgesCount, NodesCount};


/// The topology of one generated maze: which cells were visited and which interior walls are
/// open.
///
/// A `Maze` is plain data. Generation fills it in once and it is never changed afterwards, so
/// the only mutators are crate private.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    dimensions: GridDimensions,
    visited: BoolGrid,
    vertical_walls: BoolGrid,
    horizontal_walls: BoolGrid,
}

impl Maze {
    /// Every cell unvisited and every wall closed.
    pub(crate) fn unvisited(dimensions: GridDimensions) -> Maze {
        let (vertical_rows, vertical_columns) = dimensions.vertical_walls_shape();
        let (horizontal_rows, horizontal_columns) = dimensions.horizontal_walls_shape();
        Maze {
            dimensions,
            visited: BoolGrid::new(dimensions.rows(), dimensions.columns()),
            vertical_walls: BoolGrid::new(vertical_rows, vertical_columns),
            horizontal_walls: BoolGrid::new(horizontal_rows, horizontal_columns),
        }
    }

    #[inline]
    pub fn dimensions(&self) -> &GridDimensions {
        &self.dimensions
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.dimensions.size().0
    }

    /// `rows x columns`, set for each visited cell.
    #[inline]
    pub fn visited(&self) -> &BoolGrid {
        &self.visited
    }

    /// `rows x (columns - 1)`, set for each open wall between horizontally adjacent cells.
    #[inline]
    pub fn vertical_walls(&self) -> &BoolGrid {
        &self.vertical_walls
    }

    /// `(rows - 1) x columns`, set for each open wall between vertically adjacent cells.
    #[inline]
    pub fn horizontal_walls(&self) -> &BoolGrid {
        &self.horizontal_walls
    }

    /// Hand over the visited, vertical wall and horizontal wall grids.
    pub fn into_parts(self) -> (BoolGrid, BoolGrid, BoolGrid) {
        (self.visited, self.vertical_walls, self.horizontal_walls)
    }

    #[inline]
    pub fn is_visited(&self, coord: CellCoordinate) -> bool {
        self.visited.is_set(coord.row, coord.column)
    }

    pub(crate) fn mark_visited(&mut self, coord: CellCoordinate) -> bool {
        self.visited.set(coord.row, coord.column)
    }

    /// Is the wall open? Walls outside of the maze are never open.
    pub fn is_wall_open(&self, wall: WallPosition) -> bool {
        match wall {
            WallPosition::Vertical { row, column } => self.vertical_walls.is_set(row, column),
            WallPosition::Horizontal { row, column } => self.horizontal_walls.is_set(row, column),
        }
    }

    /// Returns false if the wall is not inside the maze.
    pub(crate) fn open_wall(&mut self, wall: WallPosition) -> bool {
        match wall {
            WallPosition::Vertical { row, column } => self.vertical_walls.set(row, column),
            WallPosition::Horizontal { row, column } => self.horizontal_walls.set(row, column),
        }
    }

    pub fn open_walls_count(&self) -> usize {
        self.vertical_walls.count_set() + self.horizontal_walls.count_set()
    }

    /// Is there a passage from `coord` to its neighbour in `direction`?
    pub fn is_neighbour_linked(&self, coord: CellCoordinate, direction: Direction) -> bool {
        self.dimensions.is_valid_coordinate(coord) &&
        WallPosition::between(coord, direction).map_or(false, |wall| self.is_wall_open(wall))
    }

    /// Are two cells joined by an open wall? The argument order does not matter.
    pub fn is_linked(&self, a: CellCoordinate, b: CellCoordinate) -> bool {
        Direction::ALL
            .iter()
            .any(|dir| a.offset(*dir) == Some(b) && self.is_neighbour_linked(a, *dir))
    }

    /// Cells reachable from a cell through one open wall.
    /// Returns None for a coordinate outside of the maze.
    pub fn links(&self, coord: CellCoordinate) -> Option<CoordinateSmallVec> {
        if !self.dimensions.is_valid_coordinate(coord) {
            return None;
        }

        let linked = Direction::ALL
            .iter()
            .filter(|dir| self.is_neighbour_linked(coord, **dir))
            .filter_map(|dir| coord.offset(*dir))
            .collect();
        Some(linked)
    }

    /// Every open wall, vertical walls first, each grid in row major order.
    pub fn iter_open_walls(&self) -> impl Iterator<Item = WallPosition> + '_ {
        let verticals = self.vertical_walls
            .iter_set()
            .map(|(row, column)| WallPosition::Vertical { row, column });
        let horizontals = self.horizontal_walls
            .iter_set()
            .map(|(row, column)| WallPosition::Horizontal { row, column });
        verticals.chain(horizontals)
    }

    /// Every closed interior wall, vertical walls first, each grid in row major order.
    pub fn iter_closed_walls(&self) -> impl Iterator<Item = WallPosition> + '_ {
        let verticals = closed_positions(&self.vertical_walls)
            .map(|(row, column)| WallPosition::Vertical { row, column });
        let horizontals = closed_positions(&self.horizontal_walls)
            .map(|(row, column)| WallPosition::Horizontal { row, column });
        verticals.chain(horizontals)
    }

    /// Pairs of linked cells, one pair per open wall.
    pub fn iter_links(&self) -> impl Iterator<Item = (CellCoordinate, CellCoordinate)> + '_ {
        self.iter_open_walls().map(WallPosition::cells)
    }

    /// The passages as an undirected graph. Node indices are the row major cell indices and
    /// each edge carries the open wall it crosses.
    pub fn to_graph(&self) -> UnGraph<CellCoordinate, WallPosition, u32> {
        let (NodesCount(nodes), EdgesCount(edges)) = self.dimensions.graph_size();
        let mut graph = UnGraph::with_capacity(nodes, edges);
        for coord in self.dimensions.iter() {
            let _ = graph.add_node(coord);
        }

        for wall in self.iter_open_walls() {
            let (a, b) = wall.cells();
            if let (Some(a_index), Some(b_index)) = (self.dimensions.coordinate_to_index(a),
                                                     self.dimensions.coordinate_to_index(b)) {
                graph.add_edge(NodeIndex::new(a_index), NodeIndex::new(b_index), wall);
            }
        }
        graph
    }

    /// A perfect maze has a single route between any two cells: its passages form a spanning
    /// tree over all the cells.
    pub fn is_perfect(&self) -> bool {
        if self.open_walls_count() != self.size() - 1 {
            return false;
        }
        let graph = self.to_graph();
        algo::connected_components(&graph) == 1 && !algo::is_cyclic_undirected(&graph)
    }
}

fn closed_positions(grid: &BoolGrid) -> impl Iterator<Item = (usize, usize)> + '_ {
    let columns = grid.columns().0;
    (0..grid.len())
        .map(move |i| (i / columns, i % columns))
        .filter(move |&(row, column)| !grid.is_set(row, column))
}
