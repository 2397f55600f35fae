use crate::types::MazeError;

/// Returns true if `row` is in `[0, height)` and `col` is in `[0, width)`.
#[inline]
pub fn in_bounds(row: i32, col: i32, width: u32, height: u32) -> bool {
    // Negative values wrap to large u32s and fail the comparison.
    (row as u32) < height && (col as u32) < width
}

/// Check a cell address before any storage access.
pub fn validate(row: i32, col: i32, width: u32, height: u32) -> Result<(), MazeError> {
    if !in_bounds(row, col, width, height) {
        return Err(MazeError::CellIndexOutOfBounds {
            row,
            col,
            width,
            height,
        });
    }
    Ok(())
}
