use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::{HeapError, HeapResult};

pub const DEFAULT_CAPACITY: usize = 100;
pub const DEFAULT_INCREMENT: usize = 100;
pub const DEFAULT_FRACTION: f64 = 0.80;

/// Sizing policy of one heap instance.
///
/// The store starts with `initial_capacity` slots and gains `growth_increment`
/// more whenever `len / capacity` reaches `growth_fraction`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeapConfig {
    pub initial_capacity: usize,
    pub growth_increment: usize,
    pub growth_fraction: f64,
}

impl Default for HeapConfig {
    fn default() -> Self {
        HeapConfig {
            initial_capacity: DEFAULT_CAPACITY,
            growth_increment: DEFAULT_INCREMENT,
            growth_fraction: DEFAULT_FRACTION,
        }
    }
}

impl HeapConfig {
    pub fn capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    pub fn increment(mut self, growth_increment: usize) -> Self {
        self.growth_increment = growth_increment;
        self
    }

    pub fn fraction(mut self, growth_fraction: f64) -> Self {
        self.growth_fraction = growth_fraction;
        self
    }

    /// Checks the bounds that keep a free slot available before every insertion.
    pub fn validate(&self) -> HeapResult<()> {
        if self.initial_capacity == 0 {
            return Err(HeapError::InvalidConfig("initial capacity must be positive"));
        }
        if self.growth_increment == 0 {
            return Err(HeapError::InvalidConfig("growth increment must be positive"));
        }
        // a NaN fails both comparisons and is rejected here too
        if !(self.growth_fraction > 0.0 && self.growth_fraction <= 1.0) {
            return Err(HeapError::InvalidConfig("growth fraction must be in (0, 1]"));
        }
        Ok(())
    }
}

lazy_static::lazy_static! {
    static ref TRACE: AtomicBool = AtomicBool::new(trace_from_env());
}

fn trace_from_env() -> bool {
    match std::env::var("HEAPTREE_TRACE") {
        Ok(v) => parse_trace(&v),
        Err(_) => false,
    }
}

fn parse_trace(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "on")
}

/// Turns placement tracing on stderr on or off for the whole process.
pub fn set_trace(on: bool) {
    TRACE.store(on, Ordering::Relaxed);
}

pub fn trace_enabled() -> bool {
    TRACE.load(Ordering::Relaxed)
}

/// Prints a heap event to stderr when tracing is enabled.
#[macro_export]
macro_rules! heap_trace {
    ($($arg:tt)*) => {
        if $crate::config::trace_enabled() {
            eprintln!("[heaptree] {}", format_args!($($arg)*));
        }
    };
}
