use log::debug;

use crate::grid::Maze;
use crate::iterators::Dense1dIter;
use crate::types::{DEFAULT_VALUE, MazeError, MazeInfo};

/// Dense maze backed by a single row-major `Vec<bool>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dense1dMaze {
    info: MazeInfo,
    data: Vec<bool>,
    default_value: bool,
}

impl Dense1dMaze {
    pub fn new(width: i32, height: i32, default_value: bool) -> Result<Self, MazeError> {
        let info = MazeInfo::new(width, height)?;
        debug!("dense1d maze {width}x{height}, default {default_value}");
        Ok(Self {
            info,
            data: vec![default_value; info.len()],
            default_value,
        })
    }

    /// Maze with every cell open.
    pub fn open(width: i32, height: i32) -> Result<Self, MazeError> {
        Self::new(width, height, DEFAULT_VALUE)
    }

    pub fn info(&self) -> &MazeInfo {
        &self.info
    }

    pub fn width(&self) -> u32 {
        self.info.width()
    }

    pub fn height(&self) -> u32 {
        self.info.height()
    }

    pub fn default_value(&self) -> bool {
        self.default_value
    }

    pub fn is_open(&self, row: i32, col: i32) -> Result<bool, MazeError> {
        let idx = self.info.linear_index(row, col)?;
        Ok(self.data[idx])
    }

    pub fn set_cell(&mut self, row: i32, col: i32, value: bool) -> Result<(), MazeError> {
        let idx = self.info.linear_index(row, col)?;
        self.data[idx] = value;
        Ok(())
    }

    pub fn clear(&mut self, default_value: bool) {
        debug!("dense1d clear, default {default_value}");
        self.default_value = default_value;
        self.data.fill(default_value);
    }

    pub fn iter(&self) -> Dense1dIter<'_> {
        Dense1dIter::new(&self.data)
    }

    pub fn data(&self) -> &[bool] {
        &self.data
    }
}

impl Maze for Dense1dMaze {
    fn info(&self) -> &MazeInfo {
        self.info()
    }

    fn default_value(&self) -> bool {
        self.default_value()
    }

    fn is_open(&self, row: i32, col: i32) -> Result<bool, MazeError> {
        self.is_open(row, col)
    }

    fn set_cell(&mut self, row: i32, col: i32, value: bool) -> Result<(), MazeError> {
        self.set_cell(row, col, value)
    }

    fn clear(&mut self, default_value: bool) {
        self.clear(default_value)
    }

    fn cells(&self) -> Box<dyn Iterator<Item = bool> + '_> {
        Box::new(self.iter())
    }
}

impl<'a> IntoIterator for &'a Dense1dMaze {
    type Item = bool;
    type IntoIter = Dense1dIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_cell_writes_row_major_slot() {
        let mut maze = Dense1dMaze::new(4, 3, true).unwrap();
        maze.set_cell(2, 1, false).unwrap();
        assert!(!maze.data()[2 * 4 + 1]);
        assert_eq!(maze.data().iter().filter(|&&v| !v).count(), 1);
    }

    #[test]
    fn clear_overwrites_every_slot() {
        let mut maze = Dense1dMaze::open(5, 5).unwrap();
        maze.set_cell(0, 0, false).unwrap();
        maze.set_cell(4, 4, false).unwrap();
        maze.clear(false);
        assert!(!maze.default_value());
        assert!(maze.data().iter().all(|&v| !v));
    }

    #[test]
    fn failed_set_leaves_data_untouched() {
        let mut maze = Dense1dMaze::new(3, 2, false).unwrap();
        let before = maze.clone();
        assert!(maze.set_cell(2, 0, true).is_err());
        assert!(maze.set_cell(0, -1, true).is_err());
        assert_eq!(maze, before);
    }
}
