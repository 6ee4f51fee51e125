use super::*;
use crate::error::HeapResult;

impl <T: Ord> HeapTree<T> {
    /// Creates an empty max-first heap with room for 100 elements.
    ///
    /// # Examples
    /// ```
    /// use heaptree::HeapTree;
    /// let mut heap = HeapTree::<i32>::new();
    /// heap.insert(4);
    /// ```
    pub fn new() -> Self {
        Self::build(HeapConfig::default())
    }

    /// Creates an empty max-first heap with `capacity` slots, growing by the default increment.
    ///
    /// A zero `capacity` is raised to one.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::build(HeapConfig::default().capacity(capacity.max(1)))
    }

    /// Creates an empty max-first heap with an explicit sizing policy.
    ///
    /// # Examples
    /// ```
    /// use heaptree::{HeapConfig, HeapTree};
    /// let config = HeapConfig::default().capacity(10).increment(5);
    /// let heap = HeapTree::<u8>::with_config(config).unwrap();
    /// assert_eq!(heap.capacity(), 10);
    /// ```
    pub fn with_config(config: HeapConfig) -> HeapResult<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    /// Creates an empty heap with the default sizing and the given ordering.
    pub fn with_mode(mode: HeapMode) -> Self {
        let mut heap = Self::new();
        heap.mode = mode;
        heap
    }

    fn build(config: HeapConfig) -> Self {
        let mut store = Vec::with_capacity(config.initial_capacity);
        store.resize_with(config.initial_capacity, || None);
        HeapTree {
            store,
            count: 0,
            cursor: 0,
            mode: HeapMode::MaxFirst,
            config,
        }
    }
}
