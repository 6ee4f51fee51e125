//! A binary heap stored as a breadth-first slot array, with a switchable
//! max-first or min-first order and a configurable growth policy.

pub mod config;
pub mod error;
pub mod heap;

pub use config::HeapConfig;
pub use error::{HeapError, HeapResult};
pub use heap::{HeapMode, HeapTree};

#[cfg(test)]
mod tests;
