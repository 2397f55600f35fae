pub mod dense;
pub mod sparse;

pub use dense::{Dense1dIter, Dense2dIter};
pub use sparse::SparseIter;

use crate::types::MazeError;

/// Fallible stepping for cell iterators.
///
/// `Iterator::next` reports the end with `None`; `next_cell` reports it as
/// [`MazeError::ExhaustedSequence`] for callers that treat reading past the
/// last cell as an error.
pub trait CellIterExt: Iterator<Item = bool> {
    fn next_cell(&mut self) -> Result<bool, MazeError> {
        self.next().ok_or(MazeError::ExhaustedSequence)
    }
}

impl<I: Iterator<Item = bool> + ?Sized> CellIterExt for I {}
