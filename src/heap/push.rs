use super::*;
use super::index::{left_child_pos, right_child_pos};
use crate::error::{HeapError, HeapResult};
use crate::heap_trace;

impl <T: Ord> HeapTree<T> {
    /// Inserts a value and restores the heap order along its path to the root.
    ///
    /// # Panics
    /// Panics if the internal layout is found corrupted or the store cannot grow.
    /// Use [`try_insert`](Self::try_insert) to get those as errors.
    ///
    /// # Examples
    /// ```
    /// use heaptree::HeapTree;
    /// let mut heap = HeapTree::new();
    /// heap.insert(1);
    /// heap.insert(5);
    /// assert_eq!(heap.peek(), Some(&5));
    /// ```
    pub fn insert(&mut self, value: T) {
        if let Err(err) = self.try_insert(value) {
            panic!("heap insertion failed: {}", err);
        }
    }

    /// Fallible form of [`insert`](Self::insert).
    ///
    /// On `Err(HeapError::Allocation(_))` or `Err(HeapError::InvalidConfig(_))`
    /// the value is already in the heap; only the growth step failed.
    pub fn try_insert(&mut self, value: T) -> HeapResult<()> {
        let pos = self.place(value)?;
        self.count += 1;
        self.sift_up(pos)
            .map_err(|_| HeapError::InvariantViolation { cursor: self.cursor, pos })?;
        if self.should_grow() {
            self.grow()?;
        }
        Ok(())
    }

    /// Puts `value` in the next free slot under the cursor and returns that slot.
    fn place(&mut self, value: T) -> HeapResult<usize> {
        if self.count == 0 {
            self.fill(0, value)?;
            heap_trace!("placed root at 0");
            return Ok(0);
        }
        let left = left_child_pos(self.cursor);
        if self.is_free(left)? {
            self.fill(left, value)?;
            heap_trace!("placed left child of {} at {}", self.cursor, left);
            return Ok(left);
        }
        let right = right_child_pos(self.cursor);
        if self.is_free(right)? {
            self.fill(right, value)?;
            heap_trace!("placed right child of {} at {}", self.cursor, right);
            self.cursor += 1;
            heap_trace!("cursor advanced to {}", self.cursor);
            return Ok(right);
        }
        Err(HeapError::InvariantViolation { cursor: self.cursor, pos: right })
    }

    fn is_free(&self, pos: usize) -> HeapResult<bool> {
        match self.store.get(pos) {
            Some(slot) => Ok(slot.is_none()),
            None => Err(HeapError::InvariantViolation { cursor: self.cursor, pos }),
        }
    }

    fn fill(&mut self, pos: usize, value: T) -> HeapResult<()> {
        let cursor = self.cursor;
        match self.store.get_mut(pos) {
            Some(slot @ None) => {
                *slot = Some(value);
                Ok(())
            }
            _ => Err(HeapError::InvariantViolation { cursor, pos }),
        }
    }
}
