use crate::config::HeapConfig;

/// Which end of the order sits at the root.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum HeapMode {
    #[default]
    MaxFirst,
    MinFirst,
}

/// A binary heap kept in a flat slot array and filled breadth-first.
///
/// Slot `i` has its children at `2i+1` and `2i+2`. New elements go to the
/// first free child of the node under the insertion cursor and are then
/// bubbled towards the root. The populated slots always form the prefix
/// `[0, len)`.
pub struct HeapTree <T: Ord> {
    pub(crate) store: Vec<Option<T>>,
    pub(crate) count: usize,
    pub(crate) cursor: usize,
    pub(crate) mode: HeapMode,
    pub(crate) config: HeapConfig,
}

mod construct;
mod index;
mod push;
mod bubble;
mod grow;
mod property;
mod view;
mod convert;

pub(crate) use bubble::{BubbleErr, BubbleOk, BubbleResult};
pub use view::RefIter;
