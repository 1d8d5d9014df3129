use docopt::Docopt;
use error_chain::{bail, ChainedError};
use log::{info, warn};
use maze_carver::{
    errors::*,
    generators,
    grid_displays::{GridDisplay, MazeView, PathDisplay, StartEndPointsDisplay},
    layout::MazeLayout,
    maze::Maze,
    pathing,
    units::{Height, Width},
};
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;
use serde_derive::Deserialize;
use std::{
    fs::File,
    io::prelude::*,
    process,
};

const USAGE: &str = "Maze carver

Usage:
    maze_carver_driver -h | --help
    maze_carver_driver [(--grid-size=<n>|[--rows=<r> --columns=<c>])] [--seed=<s>] [text [--text-out=<path>] [--show-path|--show-distances|--mark-start-end]] [--save-edges=<path>]
    maze_carver_driver layout [--width=<w> --height=<h>] [(--grid-size=<n>|[--rows=<r> --columns=<c>])] [--seed=<s>]

Options:
    -h --help              Show this screen.
    --grid-size=<n>        The grid is n * n cells.
    --rows=<r>             The number of cell rows [default: 8].
    --columns=<c>          The number of cell columns [default: 10].
    --seed=<s>             Seed the random number generator for a reproducible maze.
    --text-out=<path>      Output file path for the text rendering of the maze instead of stdout.
    --show-path            Mark the route from the top left start to the bottom right goal.
    --show-distances       Show the distance from the top left start to every cell, in hex.
    --mark-start-end       Draw an 'S' (start) and 'E' (goal) in the corner cells.
    --save-edges=<path>    Serialize the maze to a text file: each line is a pair of numbers. Line 1: n(#vertices) m(#edges). Line 2+ edge between vertices. Uses 1-based vertex indices.
    --width=<w>            Layout width in pixels [default: 800].
    --height=<h>           Layout height in pixels [default: 600].
";

#[derive(Debug, Deserialize)]
struct MazeArgs {
    flag_grid_size: Option<usize>,
    flag_rows: usize,
    flag_columns: usize,
    flag_seed: Option<u64>,
    cmd_text: bool,
    flag_text_out: String,
    flag_show_path: bool,
    flag_show_distances: bool,
    flag_mark_start_end: bool,
    flag_save_edges: String,
    cmd_layout: bool,
    flag_width: f32,
    flag_height: f32,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("{}", e.display_chain());
        process::exit(1);
    }
}

fn run() -> Result<()> {

    let args: MazeArgs = Docopt::new(USAGE).and_then(|d| d.deserialize())
                                           .unwrap_or_else(|e| e.exit());

    let (rows, columns) = if let Some(square_grid_size) = args.flag_grid_size {
        (square_grid_size, square_grid_size)
    } else {
        (args.flag_rows, args.flag_columns)
    };

    let maze = match args.flag_seed {
        Some(seed) => generators::generate(rows, columns, &mut XorShiftRng::seed_from_u64(seed))?,
        None => generators::generate(rows, columns, &mut rand::thread_rng())?,
    };
    info!("generated a {}x{} maze with {} open walls", rows, columns, maze.open_walls_count());

    if !maze.is_perfect() {
        warn!("generated maze is not a spanning tree");
    }

    if !args.flag_save_edges.is_empty() {
        save_maze_graph(&maze, &args.flag_save_edges)?;
    }

    if args.cmd_layout {
        print_layout(&maze, args.flag_width, args.flag_height)?;
        return Ok(());
    }

    // Draw the maze unless the only thing asked for was the edge list
    let do_text_render = args.cmd_text || args.flag_save_edges.is_empty();
    if !do_text_render {
        return Ok(());
    }

    let grid_display = maze_grid_display(&maze, &args);
    let text = format!("{}", MazeView::new(&maze, grid_display.as_ref().map(|d| &**d)));

    if args.flag_text_out.is_empty() {
        print!("{}", text);
    } else {
        write_text_to_file(&text, &args.flag_text_out)
            .chain_err(|| format!("Failed to write maze to text file {}", args.flag_text_out))?;
    }

    Ok(())
}

/// Decide what each cell shows in the text rendering: the solution route, the distances from
/// the start, start and goal markers, or nothing.
fn maze_grid_display(maze: &Maze, maze_args: &MazeArgs) -> Option<Box<dyn GridDisplay>> {
    let dimensions = maze.dimensions();

    if maze_args.flag_show_path {
        match pathing::solution_path(maze) {
            Some(path) => Some(Box::new(PathDisplay::new(&path))),
            None => {
                warn!("no route from start to goal, marking the corners instead");
                Some(Box::new(StartEndPointsDisplay::new(vec![dimensions.near_corner()],
                                                         vec![dimensions.far_corner()])))
            }
        }
    } else if maze_args.flag_show_distances {
        pathing::Distances::<u32>::for_maze(maze, dimensions.near_corner())
            .map(|distances| Box::new(distances) as Box<dyn GridDisplay>)
    } else if maze_args.flag_mark_start_end {
        Some(Box::new(StartEndPointsDisplay::new(vec![dimensions.near_corner()],
                                                 vec![dimensions.far_corner()])))
    } else {
        None
    }
}

fn print_layout(maze: &Maze, width: f32, height: f32) -> Result<()> {
    let layout = MazeLayout::new(maze, Width(width), Height(height))?;

    println!("unit {} x {}", layout.unit_length_x, layout.unit_length_y);
    for body in layout.borders.iter().chain(layout.walls.iter()).chain(Some(&layout.goal)) {
        println!("{:?} rectangle centre ({}, {}) size {} x {}",
                 body.label, body.center_x, body.center_y, body.width, body.height);
    }
    println!("{:?} circle centre ({}, {}) radius {}",
             layout.token.label, layout.token.center_x, layout.token.center_y, layout.token.radius);

    Ok(())
}

fn write_text_to_file(data: &str, file_name: &str) -> Result<()> {
    let mut f = File::create(file_name)?;
    f.write_all(data.as_bytes())?;
    Ok(())
}

fn save_maze_graph(maze: &Maze, file_path: &str) -> Result<()> {

    let dimensions = maze.dimensions();
    let mut graph_data = format!("{} {}\n", maze.size(), maze.open_walls_count());

    for (src, dst) in maze.iter_links() {
        match (dimensions.coordinate_to_index(src), dimensions.coordinate_to_index(dst)) {
            (Some(index_a), Some(index_b)) => {
                graph_data.push_str(&format!("{} {}\n", index_a + 1, index_b + 1));
            }
            _ => bail!(ErrorKind::InvalidCoordinate(src.row, src.column)),
        }
    }

    write_text_to_file(&graph_data, file_path)
        .chain_err(|| format!("Failed to write maze graph to text file {}", file_path))?;

    Ok(())
}
