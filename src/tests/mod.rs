use crate::config::HeapConfig;
use crate::error::HeapError;
use crate::heap::*;

mod insert_test;
