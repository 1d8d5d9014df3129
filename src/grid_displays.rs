use std::fmt;

use crate::cells::{CellCoordinate, Direction};
use crate::maze::Maze;
use crate::pathing::{Distances, MaxDistance};
use crate::utils::{self, FnvHashSet};

/// Text content of a maze cell when drawing the maze as text.
pub trait GridDisplay {
    /// Render the contents of a grid cell as text.
    /// The String should be 3 glyphs long, padded if required.
    fn render_cell_body(&self, _: CellCoordinate) -> String {
        String::from("   ")
    }
}

impl<MaxDistanceT> GridDisplay for Distances<MaxDistanceT>
    where MaxDistanceT: MaxDistance
{
    fn render_cell_body(&self, coord: CellCoordinate) -> String {
        if let Some(d) = self.distance_from_start_to(coord) {
            // centre align, padding 3, lowercase hexadecimal
            format!("{:^3x}", d)
        } else {
            String::from("   ")
        }
    }
}

#[derive(Debug)]
pub struct PathDisplay {
    on_path_coordinates: FnvHashSet<CellCoordinate>,
}
impl PathDisplay {
    pub fn new(path: &[CellCoordinate]) -> Self {
        let mut on_path_coordinates = utils::fnv_hashset(path.len());
        on_path_coordinates.extend(path.iter().cloned());
        PathDisplay { on_path_coordinates }
    }
}
impl GridDisplay for PathDisplay {
    fn render_cell_body(&self, coord: CellCoordinate) -> String {
        if self.on_path_coordinates.contains(&coord) {
            String::from(" . ")
        } else {
            String::from("   ")
        }
    }
}

/// Marks where the token starts (`S`) and where the goal is (`E`).
#[derive(Debug)]
pub struct StartEndPointsDisplay {
    start_coordinates: Vec<CellCoordinate>,
    end_coordinates: Vec<CellCoordinate>,
}
impl StartEndPointsDisplay {
    pub fn new(starts: Vec<CellCoordinate>, ends: Vec<CellCoordinate>) -> StartEndPointsDisplay {
        StartEndPointsDisplay {
            start_coordinates: starts,
            end_coordinates: ends,
        }
    }
}
impl GridDisplay for StartEndPointsDisplay {
    fn render_cell_body(&self, coord: CellCoordinate) -> String {
        if self.start_coordinates.contains(&coord) {
            String::from(" S ")
        } else if self.end_coordinates.contains(&coord) {
            String::from(" E ")
        } else {
            String::from("   ")
        }
    }
}

/// A maze together with what to draw inside each of its cells.
pub struct MazeView<'a> {
    maze: &'a Maze,
    grid_display: Option<&'a dyn GridDisplay>,
}

impl<'a> MazeView<'a> {
    pub fn new(maze: &'a Maze, grid_display: Option<&'a dyn GridDisplay>) -> MazeView<'a> {
        MazeView { maze, grid_display }
    }
}

impl<'a> fmt::Display for MazeView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        const WALL_L: &str = "╴";
        const WALL_R: &str = "╶";
        const WALL_U: &str = "╵";
        const WALL_D: &str = "╷";
        const WALL_LR_3: &str = "───";
        const WALL_LR: &str = "─";
        const WALL_UD: &str = "│";
        const WALL_LD: &str = "┐";
        const WALL_RU: &str = "└";
        const WALL_LU: &str = "┘";
        const WALL_RD: &str = "┌";
        const WALL_LRU: &str = "┴";
        const WALL_LRD: &str = "┬";
        const WALL_LRUD: &str = "┼";
        const WALL_RUD: &str = "├";
        const WALL_LUD: &str = "┤";

        let maze = self.maze;
        let dimensions = maze.dimensions();
        let columns_count = dimensions.columns().0;
        let rows_count = dimensions.rows().0;

        // The top boundary, broken only where a vertical wall meets it.
        let mut output = String::from(WALL_RD);
        for column in 0..columns_count {
            output.push_str(WALL_LR_3);
            let is_last_column = column == columns_count - 1;
            let right_open = maze.is_neighbour_linked(CellCoordinate::new(0, column), Direction::Right);
            output.push_str(if is_last_column {
                WALL_LD
            } else if right_open {
                WALL_LR
            } else {
                WALL_LRD
            });
        }
        output.push('\n');

        for (row_index, row) in dimensions.iter_row().enumerate() {

            let is_last_row = row_index == rows_count - 1;

            // Each cell draws its body, its right wall and its bottom wall plus bottom right
            // corner. The top wall belongs to the row above, the left boundary to the row start.
            let mut middle_section = String::from(WALL_UD);
            let mut bottom_section = String::new();

            for (column_index, cell_coord) in row.into_iter().enumerate() {

                let is_first_column = column_index == 0;
                let is_last_column = column_index == columns_count - 1;
                let right_open = maze.is_neighbour_linked(cell_coord, Direction::Right);
                let down_open = maze.is_neighbour_linked(cell_coord, Direction::Down);

                match self.grid_display {
                    Some(displayer) => middle_section.push_str(&displayer.render_cell_body(cell_coord)),
                    None => middle_section.push_str("   "),
                }
                middle_section.push_str(if right_open { " " } else { WALL_UD });

                if is_first_column {
                    bottom_section.push_str(if is_last_row {
                        WALL_RU
                    } else if down_open {
                        WALL_UD
                    } else {
                        WALL_RUD
                    });
                }
                bottom_section.push_str(if down_open { "   " } else { WALL_LR_3 });

                let corner = match (is_last_row, is_last_column) {
                    (true, true) => WALL_LU,
                    (true, false) => if right_open { WALL_LR } else { WALL_LRU },
                    (false, true) => if down_open { WALL_UD } else { WALL_LUD },
                    (false, false) => {
                        let right_neighbour = CellCoordinate::new(cell_coord.row, cell_coord.column + 1);
                        let down_neighbour = CellCoordinate::new(cell_coord.row + 1, cell_coord.column);
                        let show_right_section = !maze.is_neighbour_linked(right_neighbour, Direction::Down);
                        let show_down_section = !maze.is_neighbour_linked(down_neighbour, Direction::Right);
                        let show_up_section = !right_open;
                        let show_left_section = !down_open;

                        match (show_left_section, show_right_section, show_up_section, show_down_section) {
                            (true, true, true, true) => WALL_LRUD,
                            (true, true, true, false) => WALL_LRU,
                            (true, true, false, true) => WALL_LRD,
                            (true, false, true, true) => WALL_LUD,
                            (false, true, true, true) => WALL_RUD,
                            (true, true, false, false) => WALL_LR,
                            (false, false, true, true) => WALL_UD,
                            (false, true, true, false) => WALL_RU,
                            (true, false, false, true) => WALL_LD,
                            (true, false, true, false) => WALL_LU,
                            (false, true, false, true) => WALL_RD,
                            (true, false, false, false) => WALL_L,
                            (false, true, false, false) => WALL_R,
                            (false, false, true, false) => WALL_U,
                            (false, false, false, true) => WALL_D,
                            (false, false, false, false) => " ",
                        }
                    }
                };
                bottom_section.push_str(corner);
            }

            output.push_str(&middle_section);
            output.push('\n');
            output.push_str(&bottom_section);
            output.push('\n');
        }

        write!(f, "{}", output)
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&MazeView::new(self, None), f)
    }
}


#[cfg(test)]
mod tests {
    use rand::rngs::mock::StepRng;

    use super::*;
    use crate::generators;
    use crate::pathing;

    fn zero_draw_maze(rows: usize, columns: usize) -> Maze {
        generators::generate(rows, columns, &mut StepRng::new(0, 0)).unwrap()
    }

    #[test]
    fn single_cell() {
        let m = zero_draw_maze(1, 1);
        assert_eq!(format!("{}", m), "┌───┐\n│   │\n└───┘\n");
    }

    #[test]
    fn corridor() {
        let m = zero_draw_maze(1, 3);
        assert_eq!(format!("{}", m),
                   "┌───────────┐\n\
                    │           │\n\
                    └───────────┘\n");
    }

    #[test]
    fn two_by_two() {
        // Open: right of (0, 0), right of (1, 0), below (0, 1).
        let m = zero_draw_maze(2, 2);
        assert_eq!(format!("{}", m),
                   "┌───────┐\n\
                    │       │\n\
                    ├───╴   │\n\
                    │       │\n\
                    └───────┘\n");
    }

    #[test]
    fn cell_bodies() {
        let m = zero_draw_maze(1, 3);
        let marks = StartEndPointsDisplay::new(vec![CellCoordinate::new(0, 0)],
                                               vec![CellCoordinate::new(0, 2)]);
        let text = format!("{}", MazeView::new(&m, Some(&marks)));
        assert!(text.contains("│ S       E │"));

        let path = PathDisplay::new(&pathing::solution_path(&m).unwrap());
        let text = format!("{}", MazeView::new(&m, Some(&path)));
        assert!(text.contains("│ .   .   . │"));

        let distances = pathing::Distances::<u32>::for_maze(&m, CellCoordinate::new(0, 0)).unwrap();
        let text = format!("{}", MazeView::new(&m, Some(&distances)));
        assert!(text.contains("│ 0   1   2 │"));
    }

    #[test]
    fn every_line_has_the_same_width() {
        let m = generators::generate(6, 9, &mut StepRng::new(3, 7)).unwrap();
        let text = format!("{}", m);
        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 2 * 6 + 1);
        for line in lines {
            assert_eq!(line.chars().count(), 4 * 9 + 1);
        }
    }
}
