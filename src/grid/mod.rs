pub mod bounds;
pub mod dense1d;
pub mod dense2d;
pub mod sparse;
pub mod traits;

pub use dense1d::Dense1dMaze;
pub use dense2d::Dense2dMaze;
pub use sparse::SparseMaze;
pub use traits::Maze;
