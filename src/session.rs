//! The win condition of the ball-in-a-maze game, without any physics.
//!
//! The token starts in the near corner and the goal is in the far corner. The world is held
//! (walls static, no gravity) until the token reaches the goal, at which point it is released.

use log::info;

use crate::cells::{CellCoordinate, Direction};
use crate::layout::BodyLabel;
use crate::maze::Maze;

/// Velocity change applied to the token for one directional input.
pub const VELOCITY_STEP: f32 = 5.0;

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum WorldState {
    /// Play in progress: walls are static.
    Held,
    /// The goal was reached: walls are let go.
    Released,
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum MoveOutcome {
    Moved(CellCoordinate),
    /// A wall or the maze edge is in the way; the token stays put.
    Blocked,
    /// This move reached the goal and released the world.
    Won,
    /// The world was already released; nothing moves any more.
    AlreadyWon,
}

#[derive(PartialEq, Copy, Clone, Debug, Default)]
pub struct Velocity {
    pub x: f32,
    pub y: f32,
}

impl Velocity {
    /// The velocity after one directional input. Up is towards negative y.
    pub fn nudged(self, direction: Direction) -> Velocity {
        let Velocity { x, y } = self;
        match direction {
            Direction::Up => Velocity { x, y: y - VELOCITY_STEP },
            Direction::Down => Velocity { x, y: y + VELOCITY_STEP },
            Direction::Left => Velocity { x: x - VELOCITY_STEP, y },
            Direction::Right => Velocity { x: x + VELOCITY_STEP, y },
        }
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    maze: Maze,
    token: CellCoordinate,
    goal: CellCoordinate,
    state: WorldState,
}

impl Session {
    pub fn new(maze: Maze) -> Session {
        let token = maze.dimensions().near_corner();
        let goal = maze.dimensions().far_corner();
        Session {
            maze,
            token,
            goal,
            state: WorldState::Held,
        }
    }

    #[inline]
    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    #[inline]
    pub fn token(&self) -> CellCoordinate {
        self.token
    }

    #[inline]
    pub fn goal(&self) -> CellCoordinate {
        self.goal
    }

    #[inline]
    pub fn state(&self) -> WorldState {
        self.state
    }

    #[inline]
    pub fn is_won(&self) -> bool {
        self.state == WorldState::Released
    }

    /// Move the token one cell through an open wall.
    pub fn step(&mut self, direction: Direction) -> MoveOutcome {
        if self.is_won() {
            return MoveOutcome::AlreadyWon;
        }
        // A single cell maze starts with the token on the goal.
        if self.token == self.goal {
            self.release();
            return MoveOutcome::Won;
        }
        if !self.maze.is_neighbour_linked(self.token, direction) {
            return MoveOutcome::Blocked;
        }

        match self.maze.dimensions().neighbour_at_direction(self.token, direction) {
            Some(next) => {
                self.token = next;
                if next == self.goal {
                    self.release();
                    MoveOutcome::Won
                } else {
                    MoveOutcome::Moved(next)
                }
            }
            None => MoveOutcome::Blocked,
        }
    }

    /// Collision callback from the physics engine. The token touching the goal, in either
    /// order, releases the world. Returns true only for the collision that caused the win.
    pub fn collision_started(&mut self, a: BodyLabel, b: BodyLabel) -> bool {
        let is_win_pair = match (a, b) {
            (BodyLabel::Token, BodyLabel::Goal) | (BodyLabel::Goal, BodyLabel::Token) => true,
            _ => false,
        };
        if is_win_pair && !self.is_won() {
            self.release();
            true
        } else {
            false
        }
    }

    /// Whether bodies with this label should be static in the current world state. Walls only
    /// stay put while the world is held; borders and the goal never move.
    pub fn is_static(&self, label: BodyLabel) -> bool {
        match label {
            BodyLabel::Wall => self.state == WorldState::Held,
            BodyLabel::Border | BodyLabel::Goal => true,
            BodyLabel::Token => false,
        }
    }

    fn release(&mut self) {
        info!("token reached the goal at {}", self.goal);
        self.state = WorldState::Released;
    }
}


#[cfg(test)]
mod tests {
    use rand::rngs::mock::StepRng;
    use rand::SeedableRng;
    use rand_xorshift::XorShiftRng;

    use super::*;
    use crate::generators;
    use crate::pathing;

    fn zero_draw_session(rows: usize, columns: usize) -> Session {
        Session::new(generators::generate(rows, columns, &mut StepRng::new(0, 0)).unwrap())
    }

    #[test]
    fn starts_held_at_the_near_corner() {
        let s = zero_draw_session(3, 4);
        assert_eq!(s.state(), WorldState::Held);
        assert_eq!(s.token(), CellCoordinate::new(0, 0));
        assert_eq!(s.goal(), CellCoordinate::new(2, 3));
        assert!(!s.is_won());
        assert!(s.is_static(BodyLabel::Wall));
    }

    #[test]
    fn walls_block_moves() {
        // 2x2 zero draws: (0, 0) is only open to the right.
        let mut s = zero_draw_session(2, 2);
        assert_eq!(s.step(Direction::Down), MoveOutcome::Blocked);
        assert_eq!(s.step(Direction::Up), MoveOutcome::Blocked);
        assert_eq!(s.step(Direction::Left), MoveOutcome::Blocked);
        assert_eq!(s.token(), CellCoordinate::new(0, 0));
    }

    #[test]
    fn reaching_the_goal_wins() {
        let mut s = zero_draw_session(2, 2);
        assert_eq!(s.step(Direction::Right), MoveOutcome::Moved(CellCoordinate::new(0, 1)));
        assert_eq!(s.step(Direction::Down), MoveOutcome::Won);
        assert!(s.is_won());
        assert!(!s.is_static(BodyLabel::Wall));
        assert!(s.is_static(BodyLabel::Goal));
        assert_eq!(s.step(Direction::Left), MoveOutcome::AlreadyWon);
        assert_eq!(s.token(), CellCoordinate::new(1, 1));
    }

    #[test]
    fn following_the_solution_path_wins() {
        let maze = generators::generate(9, 13, &mut XorShiftRng::seed_from_u64(21)).unwrap();
        let path = pathing::solution_path(&maze).unwrap();
        let mut s = Session::new(maze);

        let mut last = MoveOutcome::Blocked;
        for (from, to) in path.iter().zip(path.iter().skip(1)) {
            let direction = Direction::ALL
                .iter()
                .cloned()
                .find(|dir| from.offset(*dir) == Some(*to))
                .unwrap();
            last = s.step(direction);
        }
        assert_eq!(last, MoveOutcome::Won);
        assert_eq!(s.state(), WorldState::Released);
    }

    #[test]
    fn single_cell_maze_wins_on_first_step() {
        let mut s = zero_draw_session(1, 1);
        assert_eq!(s.step(Direction::Right), MoveOutcome::Won);
    }

    #[test]
    fn token_goal_collision_releases_the_world() {
        let mut s = zero_draw_session(3, 3);
        assert!(!s.collision_started(BodyLabel::Token, BodyLabel::Wall));
        assert!(!s.collision_started(BodyLabel::Wall, BodyLabel::Goal));
        assert_eq!(s.state(), WorldState::Held);

        assert!(s.collision_started(BodyLabel::Goal, BodyLabel::Token));
        assert_eq!(s.state(), WorldState::Released);

        // Only the first contact is the win event.
        assert!(!s.collision_started(BodyLabel::Token, BodyLabel::Goal));
    }

    #[test]
    fn nudges() {
        let v = Velocity::default()
            .nudged(Direction::Right)
            .nudged(Direction::Right)
            .nudged(Direction::Up);
        assert_eq!(v, Velocity { x: 10.0, y: -5.0 });
        assert_eq!(v.nudged(Direction::Left).nudged(Direction::Down),
                   Velocity { x: 5.0, y: 0.0 });
    }
}
