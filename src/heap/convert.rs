use super::*;

impl <T: Ord> Default for HeapTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl <T: Ord + Clone> Clone for HeapTree<T> {
    fn clone(&self) -> Self {
        HeapTree {
            store: self.store.clone(),
            count: self.count,
            cursor: self.cursor,
            mode: self.mode,
            config: self.config,
        }
    }
}

impl <'a, T: 'a + Ord + Copy> Extend<&'a T> for HeapTree<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(*item);
        }
    }
}

impl <T: Ord> Extend<T> for HeapTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl <T: Ord, const N: usize> From<[T; N]> for HeapTree<T> {
    /// Builds a max-first heap by inserting the items in array order.
    fn from(array: [T; N]) -> Self {
        let mut heap = Self::new();
        heap.extend(array);
        heap
    }
}

impl <T: Ord> From<Vec<T>> for HeapTree<T> {
    /// Builds a max-first heap by inserting the items in vector order.
    fn from(vec: Vec<T>) -> Self {
        let mut heap = Self::new();
        heap.extend(vec);
        heap
    }
}
