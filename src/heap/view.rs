use std::fmt;

use super::*;

pub struct RefIter<'a, T: Ord> {
    pub(crate) heap: &'a HeapTree<T>,
    pub(crate) index: usize,
}

impl <'a, T: Ord> Iterator for RefIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.heap.count {
            return None;
        }
        let heap = self.heap;
        let value = heap.store[self.index].as_ref()?;
        self.index += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.heap.count.saturating_sub(self.index);
        (rest, Some(rest))
    }
}

impl <'a, T: Ord> ExactSizeIterator for RefIter<'a, T> {}

impl <'a, T: Ord> IntoIterator for &'a HeapTree<T> {
    type Item = &'a T;

    type IntoIter = RefIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        RefIter {
            heap: self,
            index: 0,
        }
    }
}

impl <T: Ord> HeapTree<T> {
    /// Iterates the populated slots in storage (level) order. Not sorted.
    pub fn iter(&self) -> RefIter<'_, T> {
        self.into_iter()
    }
}

impl <T: Ord + Clone> HeapTree<T> {
    /// Copies the populated slots in storage order: root first, then level by level.
    ///
    /// # Examples
    /// ```
    /// use heaptree::HeapTree;
    /// let mut heap = HeapTree::new();
    /// heap.insert(1);
    /// heap.insert(2);
    /// heap.insert(3);
    /// assert_eq!(heap.to_ordered_listing(), vec![3, 1, 2]);
    /// ```
    pub fn to_ordered_listing(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

/// One element per line, root first.
impl <T: Ord + fmt::Display> fmt::Display for HeapTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in self.iter() {
            writeln!(f, "{}", value)?;
        }
        Ok(())
    }
}

impl <T: Ord + fmt::Debug> fmt::Debug for HeapTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeapTree")
            .field("mode", &self.mode)
            .field("len", &self.count)
            .field("capacity", &self.store.len())
            .field("cursor", &self.cursor)
            .field("elements", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}
