pub mod error;
pub mod generators;
pub mod logging;
pub mod maze;

pub use error::MazeError;
pub use generators::{MazeConfig, Paint, generate_maze, generate_maze_seeded};
pub use maze::{Cell, Coord, Maze, Wormhole};
