use std::iter::FusedIterator;

use crate::grid::sparse::Node;

/// Row-major walk over a sparse maze.
///
/// Holds a cursor into the stored chain. At each linear index the cursor node
/// is yielded and advanced if it sits on that index, otherwise the default is
/// yielded and the cursor stays put. The chain is never rescanned from the
/// head.
#[derive(Debug, Clone)]
pub struct SparseIter<'a> {
    cursor: Option<&'a Node>,
    index: usize,
    len: usize,
    default_value: bool,
}

impl<'a> SparseIter<'a> {
    pub(crate) fn new(head: Option<&'a Node>, len: usize, default_value: bool) -> Self {
        Self {
            cursor: head,
            index: 0,
            len,
            default_value,
        }
    }
}

impl Iterator for SparseIter<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.len {
            return None;
        }

        let value = match self.cursor {
            Some(node) if node.index == self.index => {
                self.cursor = node.next.as_deref();
                node.value
            }
            _ => self.default_value,
        };
        self.index += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SparseIter<'_> {}
impl FusedIterator for SparseIter<'_> {}
