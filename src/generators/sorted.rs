//! Ascending input: the best case for adaptive algorithms.

use super::{ascending, InputGenerator};

/// Produces `[1, 2, ..., size]`.
pub struct Sorted;

impl InputGenerator for Sorted {
    fn name(&self) -> &'static str {
        "Sorted"
    }

    fn generate(&self, size: usize) -> Vec<i32> {
        ascending(size)
    }
}
