pub mod grid;
pub mod iterators;
pub mod loaders;
pub mod types;

pub use grid::{Dense1dMaze, Dense2dMaze, Maze, SparseMaze};
pub use iterators::CellIterExt;
pub use loaders::config::{MazeConfig, StorageKind, build_maze, load_maze, load_maze_config};
pub use types::{MazeError, MazeInfo};
