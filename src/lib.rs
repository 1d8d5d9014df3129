//! **maze_carver** carves random perfect mazes with a randomized depth first traversal and
//! tracks the win condition of a token rolling from one corner of the maze to a goal in the
//! other.
//!
//! The maze itself is plain data, three boolean grids (visited cells, open vertical walls,
//! open horizontal walls), so that a rendering or physics layer can turn it into whatever bodies
//! it needs. `layout` computes those bodies' geometry.

#[macro_use]
extern crate error_chain;

pub mod cells;
pub mod errors;
pub mod generators;
pub mod grid;
pub mod grid_dimensions;
pub mod grid_displays;
pub mod grid_iterators;
pub mod layout;
pub mod maze;
pub mod pathing;
pub mod session;
pub mod units;
mod utils;
