use super::*;
use crate::error::{HeapError, HeapResult};
use crate::heap_trace;

impl <T: Ord> HeapTree<T> {
    /// Returns the number of elements in the heap.
    ///
    /// # Examples
    /// ```
    /// use heaptree::HeapTree;
    /// let mut heap = HeapTree::new();
    /// assert_eq!(heap.size(), 0);
    /// heap.insert(1);
    /// assert_eq!(heap.size(), 1);
    /// ```
    pub fn size(&self) -> usize {
        self.count
    }
    pub fn len(&self) -> usize {
        self.count
    }
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
    /// Number of allocated slots, populated or not.
    pub fn capacity(&self) -> usize {
        self.store.len()
    }
    pub fn mode(&self) -> HeapMode {
        self.mode
    }
    /// Index of the node currently receiving children.
    pub fn cursor(&self) -> usize {
        self.cursor
    }
    pub fn config(&self) -> &HeapConfig {
        &self.config
    }
    /// Returns the root: the greatest element in max-first mode, the least in min-first.
    pub fn peek(&self) -> Option<&T> {
        self.store.first().and_then(Option::as_ref)
    }
    /// Switches the ordering mode. Only allowed while the heap is empty.
    ///
    /// # Examples
    /// ```
    /// use heaptree::{HeapMode, HeapTree};
    /// let mut heap = HeapTree::new();
    /// heap.set_mode(HeapMode::MinFirst).unwrap();
    /// heap.insert(3);
    /// assert!(heap.set_mode(HeapMode::MaxFirst).is_err());
    /// assert_eq!(heap.mode(), HeapMode::MinFirst);
    /// ```
    pub fn set_mode(&mut self, mode: HeapMode) -> HeapResult<()> {
        if self.count > 0 {
            heap_trace!("rejected mode change to {:?} with {} elements", mode, self.count);
            return Err(HeapError::InvalidState);
        }
        self.mode = mode;
        Ok(())
    }
}

impl <T: Ord> HeapTree<T> {
    /// Asserts heap order, compactness and cursor placement.
    #[cfg(test)]
    pub fn check(&self) {
        use super::index::{left_child_pos, parent_pos, right_child_pos};

        assert!(self.count < self.store.len());
        for (i, slot) in self.store.iter().enumerate() {
            assert_eq!(slot.is_some(), i < self.count, "slot {} breaks the prefix", i);
        }
        for i in 1..self.count {
            let parent = parent_pos(i).unwrap();
            let (p, c) = (self.store[parent].as_ref().unwrap(), self.store[i].as_ref().unwrap());
            match self.mode {
                HeapMode::MaxFirst => assert!(p >= c, "slot {} outranks its parent", i),
                HeapMode::MinFirst => assert!(p <= c, "slot {} outranks its parent", i),
            }
        }
        if self.count > 0 {
            assert!(right_child_pos(self.cursor) >= self.count);
            assert!(left_child_pos(self.cursor) <= self.count);
        }
    }
}
