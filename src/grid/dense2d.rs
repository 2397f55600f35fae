use log::debug;

use crate::grid::Maze;
use crate::iterators::Dense2dIter;
use crate::types::{DEFAULT_VALUE, MazeError, MazeInfo};

/// Dense maze backed by one independent `Vec<bool>` per row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dense2dMaze {
    info: MazeInfo,
    cells: Vec<Vec<bool>>,
    default_value: bool,
}

impl Dense2dMaze {
    pub fn new(width: i32, height: i32, default_value: bool) -> Result<Self, MazeError> {
        let info = MazeInfo::new(width, height)?;
        debug!("dense2d maze {width}x{height}, default {default_value}");
        let cells = vec![vec![default_value; info.width() as usize]; info.height() as usize];
        Ok(Self {
            info,
            cells,
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
        self.check(row, col)?;
        Ok(self.cells[row as usize][col as usize])
    }

    pub fn set_cell(&mut self, row: i32, col: i32, value: bool) -> Result<(), MazeError> {
        self.check(row, col)?;
        self.cells[row as usize][col as usize] = value;
        Ok(())
    }

    pub fn clear(&mut self, default_value: bool) {
        debug!("dense2d clear, default {default_value}");
        self.default_value = default_value;
        for row in &mut self.cells {
            for cell in row.iter_mut() {
                *cell = default_value;
            }
        }
    }

    pub fn iter(&self) -> Dense2dIter<'_> {
        Dense2dIter::new(&self.cells, self.info.width() as usize)
    }

    pub fn rows(&self) -> &[Vec<bool>] {
        &self.cells
    }

    fn check(&self, row: i32, col: i32) -> Result<(), MazeError> {
        self.info.linear_index(row, col).map(|_| ())
    }
}

impl Maze for Dense2dMaze {
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

impl<'a> IntoIterator for &'a Dense2dMaze {
    type Item = bool;
    type IntoIter = Dense2dIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
