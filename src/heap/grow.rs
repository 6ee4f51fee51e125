use super::*;
use crate::error::{HeapError, HeapResult};
use crate::heap_trace;

impl <T: Ord> HeapTree<T> {
    /// Whether occupancy has reached the growth fraction of the current capacity.
    pub(crate) fn should_grow(&self) -> bool {
        self.count as f64 / self.store.len() as f64 >= self.config.growth_fraction
    }

    /// Adds `growth_increment` empty slots behind the populated prefix.
    ///
    /// Elements keep their positions, as do the cursor and the count.
    pub(crate) fn grow(&mut self) -> HeapResult<()> {
        let old_capacity = self.store.len();
        let new_capacity = old_capacity
            .checked_add(self.config.growth_increment)
            .ok_or(HeapError::InvalidConfig("growth increment overflows the store size"))?;
        let mut store: Vec<Option<T>> = Vec::new();
        store.try_reserve_exact(new_capacity)?;
        store.extend(self.store.drain(..self.count));
        store.resize_with(new_capacity, || None);
        self.store = store;
        heap_trace!("grew store from {} to {} slots", old_capacity, new_capacity);
        Ok(())
    }
}
