// Create the Error, ErrorKind, ResultExt, and Result types.
// Result is a typedef of std `Result` with the error type our own `Error`.
// Other modules `use errors::*;` to get access to everything `error_chain!` creates.
#![allow(deprecated)]

error_chain! {

    foreign_links {
        Io(::std::io::Error);
        DocOpt(::docopt::Error);
    }

    errors {
        InvalidDimensions(rows: usize, columns: usize) {
            description("invalid maze dimensions")
            display("invalid maze dimensions: {} rows by {} columns, both must be at least 1", rows, columns)
        }

        InvalidCoordinate(row: usize, column: usize) {
            description("coordinate outside of the maze")
            display("coordinate (row {}, column {}) is outside of the maze", row, column)
        }

        InvalidLayoutSize(width: f32, height: f32) {
            description("invalid layout size")
            display("invalid layout size {} x {}, both must be finite and positive", width, height)
        }
    }
}
