use glam::IVec2;

use crate::types::{MazeError, MazeInfo};

/// Shared maze interface for the dense and sparse backends.
///
/// Cells are addressed as `(row, col)`, zero based. Every backend validates
/// the address before touching storage, so a failed call leaves the maze
/// unchanged.
pub trait Maze {
    fn info(&self) -> &MazeInfo;
    fn width(&self) -> u32 {
        self.info().width()
    }
    fn height(&self) -> u32 {
        self.info().height()
    }

    /// Value every cell takes after construction or the latest [`Maze::clear`].
    fn default_value(&self) -> bool;

    /// Whether the cell is open (passable).
    fn is_open(&self, row: i32, col: i32) -> Result<bool, MazeError>;
    fn set_cell(&mut self, row: i32, col: i32, value: bool) -> Result<(), MazeError>;

    /// Reset every cell to `default_value`, which also becomes the new default.
    fn clear(&mut self, default_value: bool);

    /// All cells in row-major order. Each call starts a fresh traversal.
    fn cells(&self) -> Box<dyn Iterator<Item = bool> + '_>;

    /// Like [`Maze::is_open`] with `pos.x` as the column and `pos.y` as the row.
    fn is_open_at(&self, pos: IVec2) -> Result<bool, MazeError> {
        self.is_open(pos.y, pos.x)
    }

    fn set_cell_at(&mut self, pos: IVec2, value: bool) -> Result<(), MazeError> {
        self.set_cell(pos.y, pos.x, value)
    }

    fn count_open(&self) -> usize {
        self.cells().filter(|&open| open).count()
    }
}
