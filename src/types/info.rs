//! Maze metadata.

use crate::grid::bounds;
use crate::types::MazeError;

/// Fixed dimensions of a maze. Validated on construction and never changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MazeInfo {
    width: u32,
    height: u32,
}

impl MazeInfo {
    /// Fails with [`MazeError::Dimension`] if either dimension is not positive.
    pub fn new(width: i32, height: i32) -> Result<Self, MazeError> {
        if width <= 0 || height <= 0 {
            return Err(MazeError::Dimension { width, height });
        }
        Ok(Self {
            width: width as u32,
            height: height as u32,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of cells, `width * height`.
    #[inline]
    pub fn len(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Always false: a maze has at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        bounds::in_bounds(row, col, self.width, self.height)
    }

    /// Validate `(row, col)` and map it to its row-major linear index.
    pub fn linear_index(&self, row: i32, col: i32) -> Result<usize, MazeError> {
        bounds::validate(row, col, self.width, self.height)?;
        Ok((row as usize) * (self.width as usize) + (col as usize))
    }
}
