use super::*;
use super::index::parent_pos;

pub enum BubbleOk {
    EndsAt(usize),
    NotChange,
}

#[derive(Debug)]
pub enum BubbleErr {
    OutOfBounds,
    EmptySlot(usize),
}

pub type BubbleResult = Result<BubbleOk, BubbleErr>;

impl <T: Ord> HeapTree<T> {
    /// Moves the element at `index` towards the root while it beats its parent
    /// under the current mode. Equal elements never swap.
    pub(crate) fn sift_up(&mut self, index: usize) -> BubbleResult {
        match self.mode {
            HeapMode::MinFirst => self.bubble_up::<true>(index),
            HeapMode::MaxFirst => self.bubble_up::<false>(index),
        }
    }

    fn bubble_up<const IS_MIN_FIRST: bool>(&mut self, index: usize) -> BubbleResult {
        (index < self.count).then_some(()).ok_or(BubbleErr::OutOfBounds)?;
        let old_index = index;
        let mut index = index;
        while let Some(parent) = parent_pos(index) {
            let should_swap = {
                let this = self.store[index].as_ref().ok_or(BubbleErr::EmptySlot(index))?;
                let up = self.store[parent].as_ref().ok_or(BubbleErr::EmptySlot(parent))?;
                if IS_MIN_FIRST {
                    this < up
                } else {
                    this > up
                }
            };
            if !should_swap {
                break;
            }
            self.store.swap(index, parent);
            index = parent;
        }
        if index == old_index {
            Ok(BubbleOk::NotChange)
        } else {
            Ok(BubbleOk::EndsAt(index))
        }
    }
}
