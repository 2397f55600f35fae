use std::iter::FusedIterator;

/// Row-major scan over a flat slot vector.
#[derive(Debug, Clone)]
pub struct Dense1dIter<'a> {
    data: &'a [bool],
    index: usize,
}

impl<'a> Dense1dIter<'a> {
    pub(crate) fn new(data: &'a [bool]) -> Self {
        Self { data, index: 0 }
    }
}

impl Iterator for Dense1dIter<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        let value = *self.data.get(self.index)?;
        self.index += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.data.len() - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Dense1dIter<'_> {}
impl FusedIterator for Dense1dIter<'_> {}

/// Row-major scan over per-row vectors: column first, wrapping to the next row at `width`.
#[derive(Debug, Clone)]
pub struct Dense2dIter<'a> {
    rows: &'a [Vec<bool>],
    width: usize,
    row: usize,
    col: usize,
}

impl<'a> Dense2dIter<'a> {
    pub(crate) fn new(rows: &'a [Vec<bool>], width: usize) -> Self {
        Self {
            rows,
            width,
            row: 0,
            col: 0,
        }
    }
}

impl Iterator for Dense2dIter<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        let value = *self.rows.get(self.row)?.get(self.col)?;
        self.col += 1;
        if self.col >= self.width {
            self.col = 0;
            self.row += 1;
        }
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let consumed = self.row * self.width + self.col;
        let remaining = self.rows.len() * self.width - consumed;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Dense2dIter<'_> {}
impl FusedIterator for Dense2dIter<'_> {}
