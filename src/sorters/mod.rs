//! This module serves as the public API for the collection of all sorting
//! strategies that can be timed by the engine.
//!
//! Every strategy implements [`SortingAlgorithm`]. Strategies are stateless:
//! all working state lives on the stack of a single `sort` call, so one
//! instance can be shared by the registry and reused across runs.

//==================================================================================
// 1. Module Declarations
//==================================================================================

/// Quadratic baselines
pub mod bubble;
pub mod selection;

/// Divide and conquer
pub mod merge;
pub mod recursive_partition;

/// Platform baseline
pub mod library;

pub use self::bubble::{BubbleSort, Direction};
pub use self::library::LibrarySort;
pub use self::merge::MergeSort;
pub use self::recursive_partition::RecursivePartitionSort;
pub use self::selection::SelectionSort;

//==================================================================================
// 2. The Sorting Contract
//==================================================================================

/// **CONTRACT:** A named strategy that orders an integer array ascending.
///
/// Implementors provide `sort_vec`; they may sort in place and hand the same
/// vector back, or return a new one. Callers must not assume the input is
/// left untouched.
pub trait SortingAlgorithm: Send + Sync {
    /// Stable display name, used as the second-level key of the result matrix.
    fn name(&self) -> &'static str;

    /// Returns the elements of `data` in non-decreasing order.
    fn sort_vec(&self, data: Vec<i32>) -> Vec<i32>;

    /// Sorts `data`, treating an absent array as an empty one.
    ///
    /// `None` is a defined input, not an error: the result is an empty vector.
    fn sort(&self, data: Option<Vec<i32>>) -> Vec<i32> {
        match data {
            Some(data) => self.sort_vec(data),
            None => Vec::new(),
        }
    }
}
