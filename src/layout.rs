//! Geometry handed to an external physics or rendering engine.
//!
//! Every closed interior wall becomes a thin static rectangle centred on the wall's midpoint.
//! The four edges of the play area get thick border rectangles, the goal sits in the far corner
//! cell and the token starts in the near corner cell. Positions are rectangle and circle
//! centres, in the same units as the requested width and height, with y growing downwards.

use log::debug;

use crate::cells::{CellCoordinate, WallPosition};
use crate::errors::*;
use crate::grid_dimensions::GridDimensions;
use crate::maze::Maze;
use crate::units::{Height, Width};

/// Thickness of an interior wall obstacle.
pub const WALL_THICKNESS: f32 = 5.0;
/// Thickness of the play area border obstacles.
pub const BORDER_THICKNESS: f32 = 40.0;
/// Side of the goal marker as a fraction of a cell side.
pub const GOAL_SCALE: f32 = 0.7;
/// Token radius as a fraction of the shorter cell side.
pub const TOKEN_RADIUS_SCALE: f32 = 0.25;

/// What a body is, so that collision callbacks can tell bodies apart.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub enum BodyLabel {
    Wall,
    Border,
    Goal,
    Token,
}

#[derive(PartialEq, Copy, Clone, Debug)]
pub struct Rectangle {
    pub label: BodyLabel,
    pub center_x: f32,
    pub center_y: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(PartialEq, Copy, Clone, Debug)]
pub struct Circle {
    pub label: BodyLabel,
    pub center_x: f32,
    pub center_y: f32,
    pub radius: f32,
}

#[derive(Debug, Clone)]
pub struct MazeLayout {
    pub width: f32,
    pub height: f32,
    pub unit_length_x: f32,
    pub unit_length_y: f32,
    /// One per closed interior wall, vertical walls first.
    pub walls: Vec<Rectangle>,
    /// Top, bottom, left, right.
    pub borders: [Rectangle; 4],
    pub goal: Rectangle,
    pub token: Circle,
    dimensions: GridDimensions,
}

impl MazeLayout {
    pub fn new(maze: &Maze, width: Width, height: Height) -> Result<MazeLayout> {
        let (Width(width), Height(height)) = (width, height);
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            bail!(ErrorKind::InvalidLayoutSize(width, height));
        }

        let dimensions = *maze.dimensions();
        let unit_length_x = width / dimensions.columns().0 as f32;
        let unit_length_y = height / dimensions.rows().0 as f32;

        let walls = maze.iter_closed_walls()
            .map(|wall| wall_obstacle(wall, unit_length_x, unit_length_y))
            .collect::<Vec<_>>();

        let border = |center_x, center_y, width, height| Rectangle {
            label: BodyLabel::Border,
            center_x,
            center_y,
            width,
            height,
        };
        let borders = [border(width / 2.0, 0.0, width, BORDER_THICKNESS),
                       border(width / 2.0, height, width, BORDER_THICKNESS),
                       border(0.0, height / 2.0, BORDER_THICKNESS, height),
                       border(width, height / 2.0, BORDER_THICKNESS, height)];

        let goal = Rectangle {
            label: BodyLabel::Goal,
            center_x: width - unit_length_x / 2.0,
            center_y: height - unit_length_y / 2.0,
            width: unit_length_x * GOAL_SCALE,
            height: unit_length_y * GOAL_SCALE,
        };

        let token = Circle {
            label: BodyLabel::Token,
            center_x: unit_length_x / 2.0,
            center_y: unit_length_y / 2.0,
            radius: unit_length_x.min(unit_length_y) * TOKEN_RADIUS_SCALE,
        };

        debug!("laid out {} wall obstacles over {}x{}", walls.len(), width, height);

        Ok(MazeLayout {
            width,
            height,
            unit_length_x,
            unit_length_y,
            walls,
            borders,
            goal,
            token,
            dimensions,
        })
    }

    /// The cell containing a point, or None for points outside the play area.
    pub fn cell_at(&self, x: f32, y: f32) -> Option<CellCoordinate> {
        if !(x >= 0.0 && y >= 0.0 && x < self.width && y < self.height) {
            return None;
        }
        // Division can round a point just short of the far edge up to the next cell.
        let column = ((x / self.unit_length_x) as usize).min(self.dimensions.columns().0 - 1);
        let row = ((y / self.unit_length_y) as usize).min(self.dimensions.rows().0 - 1);
        Some(CellCoordinate::new(row, column))
    }
}

fn wall_obstacle(wall: WallPosition, unit_length_x: f32, unit_length_y: f32) -> Rectangle {
    match wall {
        WallPosition::Horizontal { row, column } => Rectangle {
            label: BodyLabel::Wall,
            center_x: column as f32 * unit_length_x + unit_length_x / 2.0,
            center_y: row as f32 * unit_length_y + unit_length_y,
            width: unit_length_x,
            height: WALL_THICKNESS,
        },
        WallPosition::Vertical { row, column } => Rectangle {
            label: BodyLabel::Wall,
            center_x: column as f32 * unit_length_x + unit_length_x,
            center_y: row as f32 * unit_length_y + unit_length_y / 2.0,
            width: WALL_THICKNESS,
            height: unit_length_y,
        },
    }
}
