//! Sparse maze: only cells that differ from the default value are stored.
//!
//! Stored cells live in a singly-linked chain hanging off a sentinel link.
//! Each node owns its successor, and nodes are kept in strictly increasing
//! linear-index order with no duplicates. A node exists for a cell iff the
//! cell's value differs from the current default, so `stored_cell_count`
//! always equals the chain length.

use log::{debug, trace};

use crate::grid::Maze;
use crate::iterators::SparseIter;
use crate::types::{DEFAULT_VALUE, MazeError, MazeInfo};

pub(crate) type Link = Option<Box<Node>>;

#[derive(Debug)]
pub(crate) struct Node {
    pub(crate) value: bool,
    /// Row-major linear index of the cell.
    pub(crate) index: usize,
    pub(crate) next: Link,
}

#[derive(Debug)]
pub struct SparseMaze {
    info: MazeInfo,
    default_value: bool,
    /// Sentinel: owns the first stored node, never holds a cell itself.
    head: Link,
    stored_cell_count: usize,
}

/// Outcome of a single `set_cell` on the chain.
enum Splice {
    Inserted,
    Removed,
    Updated,
    Unchanged,
}

impl SparseMaze {
    pub fn new(width: i32, height: i32, default_value: bool) -> Result<Self, MazeError> {
        let info = MazeInfo::new(width, height)?;
        debug!("sparse maze {width}x{height}, default {default_value}");
        Ok(Self {
            info,
            default_value,
            head: None,
            stored_cell_count: 0,
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

    /// Number of cells currently differing from the default.
    pub fn stored_cell_count(&self) -> usize {
        self.stored_cell_count
    }

    /// Stored `(linear index, value)` pairs in chain order.
    pub fn stored_cells(&self) -> impl Iterator<Item = (usize, bool)> + '_ {
        self.nodes().map(|node| (node.index, node.value))
    }

    pub fn is_open(&self, row: i32, col: i32) -> Result<bool, MazeError> {
        let index = self.info.linear_index(row, col)?;
        let found = self
            .nodes()
            .find(|node| node.index >= index)
            .filter(|node| node.index == index);
        Ok(found.map_or(self.default_value, |node| node.value))
    }

    pub fn set_cell(&mut self, row: i32, col: i32, value: bool) -> Result<(), MazeError> {
        let index = self.info.linear_index(row, col)?;
        let default_value = self.default_value;

        let splice = {
            let link = self.seek_mut(index);
            let present = matches!(link, Some(node) if node.index == index);
            match (present, value == default_value) {
                (true, true) => {
                    if let Some(node) = link.take() {
                        *link = node.next;
                    }
                    Splice::Removed
                }
                (true, false) => {
                    if let Some(node) = link.as_mut() {
                        node.value = value;
                    }
                    Splice::Updated
                }
                (false, false) => {
                    let next = link.take();
                    *link = Some(Box::new(Node { value, index, next }));
                    Splice::Inserted
                }
                (false, true) => Splice::Unchanged,
            }
        };

        match splice {
            Splice::Inserted => {
                self.stored_cell_count += 1;
                trace!("sparse insert at {index}, {} stored", self.stored_cell_count);
            }
            Splice::Removed => {
                self.stored_cell_count -= 1;
                trace!("sparse remove at {index}, {} stored", self.stored_cell_count);
            }
            Splice::Updated | Splice::Unchanged => {}
        }
        Ok(())
    }

    /// Detaches the whole chain from the sentinel and resets the count.
    pub fn clear(&mut self, default_value: bool) {
        debug!(
            "sparse clear, default {default_value}, dropping {} stored cells",
            self.stored_cell_count
        );
        self.default_value = default_value;
        let detached = self.head.take();
        self.stored_cell_count = 0;
        drop_chain(detached);
    }

    pub fn iter(&self) -> SparseIter<'_> {
        SparseIter::new(self.head.as_deref(), self.info.len(), self.default_value)
    }

    fn nodes(&self) -> Nodes<'_> {
        Nodes {
            cursor: self.head.as_deref(),
        }
    }

    /// The link holding the first node with `index >= target`, or the tail link.
    /// Inserting at this link keeps the chain sorted.
    fn seek_mut(&mut self, target: usize) -> &mut Link {
        let mut link = &mut self.head;
        while matches!(link, Some(node) if node.index < target) {
            if let Some(node) = link {
                link = &mut node.next;
            }
        }
        link
    }
}

impl Drop for SparseMaze {
    fn drop(&mut self) {
        drop_chain(self.head.take());
    }
}

/// Unlinks nodes one at a time so long chains don't recurse in `Drop`.
fn drop_chain(mut link: Link) {
    while let Some(mut node) = link {
        link = node.next.take();
    }
}

struct Nodes<'a> {
    cursor: Option<&'a Node>,
}

impl<'a> Iterator for Nodes<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.cursor?;
        self.cursor = node.next.as_deref();
        Some(node)
    }
}

impl Maze for SparseMaze {
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

impl<'a> IntoIterator for &'a SparseMaze {
    type Item = bool;
    type IntoIter = SparseIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_chain_sorted(maze: &SparseMaze) {
        let indices: Vec<usize> = maze.stored_cells().map(|(i, _)| i).collect();
        assert!(indices.windows(2).all(|w| w[0] < w[1]), "{indices:?}");
        assert_eq!(indices.len(), maze.stored_cell_count());
        for (_, value) in maze.stored_cells() {
            assert_ne!(value, maze.default_value());
        }
    }

    #[test]
    fn stores_only_non_default_cells() {
        let mut maze = SparseMaze::new(3, 3, true).unwrap();
        maze.set_cell(1, 1, false).unwrap();
        assert_eq!(maze.stored_cell_count(), 1);
        assert_eq!(maze.stored_cells().collect::<Vec<_>>(), vec![(4, false)]);

        maze.set_cell(1, 1, true).unwrap();
        assert_eq!(maze.stored_cell_count(), 0);
        assert_eq!(maze.stored_cells().count(), 0);
    }

    #[test]
    fn setting_default_on_absent_cell_is_noop() {
        let mut maze = SparseMaze::new(3, 3, false).unwrap();
        maze.set_cell(0, 2, false).unwrap();
        assert_eq!(maze.stored_cell_count(), 0);
    }

    #[test]
    fn repeated_non_default_set_updates_in_place() {
        let mut maze = SparseMaze::new(3, 3, true).unwrap();
        maze.set_cell(2, 0, false).unwrap();
        maze.set_cell(2, 0, false).unwrap();
        assert_eq!(maze.stored_cell_count(), 1);
        assert!(!maze.is_open(2, 0).unwrap());
    }

    #[test]
    fn out_of_order_inserts_keep_chain_sorted() {
        let mut maze = SparseMaze::new(5, 4, true).unwrap();
        for (row, col) in [(3, 4), (0, 0), (2, 2), (0, 4), (1, 0), (3, 0), (2, 1)] {
            maze.set_cell(row, col, false).unwrap();
            assert_chain_sorted(&maze);
        }
        assert_eq!(
            maze.stored_cells().map(|(i, _)| i).collect::<Vec<_>>(),
            vec![0, 4, 5, 11, 12, 15, 19]
        );

        // Remove head, middle and tail.
        maze.set_cell(0, 0, true).unwrap();
        maze.set_cell(2, 1, true).unwrap();
        maze.set_cell(3, 4, true).unwrap();
        assert_chain_sorted(&maze);
        assert_eq!(
            maze.stored_cells().map(|(i, _)| i).collect::<Vec<_>>(),
            vec![4, 5, 12, 15]
        );
    }

    #[test]
    fn clear_detaches_chain_and_changes_default() {
        let mut maze = SparseMaze::open(4, 4).unwrap();
        maze.set_cell(0, 1, false).unwrap();
        maze.set_cell(3, 3, false).unwrap();
        maze.clear(false);
        assert_eq!(maze.stored_cell_count(), 0);
        assert_eq!(maze.stored_cells().count(), 0);
        assert!(!maze.is_open(0, 1).unwrap());

        // `true` now differs from the default and must be stored.
        maze.set_cell(0, 1, true).unwrap();
        assert_eq!(maze.stored_cells().collect::<Vec<_>>(), vec![(1, true)]);
    }

    #[test]
    fn failed_set_leaves_chain_untouched() {
        let mut maze = SparseMaze::new(2, 2, true).unwrap();
        maze.set_cell(1, 1, false).unwrap();
        assert!(maze.set_cell(2, 1, false).is_err());
        assert!(maze.set_cell(1, -1, false).is_err());
        assert_eq!(maze.stored_cells().collect::<Vec<_>>(), vec![(3, false)]);
    }

    #[test]
    fn long_chain_drops_without_recursion() {
        let mut maze = SparseMaze::new(1000, 200, true).unwrap();
        // Fill in reverse so every insert lands at the head.
        for row in (0..200).rev() {
            for col in (0..1000).rev() {
                maze.set_cell(row, col, false).unwrap();
            }
        }
        assert_eq!(maze.stored_cell_count(), 200_000);
        maze.clear(true);
        assert_eq!(maze.stored_cell_count(), 0);

        maze.set_cell(0, 0, false).unwrap();
        for col in 1..1000 {
            maze.set_cell(199, col, false).unwrap();
        }
        drop(maze);
    }
}
