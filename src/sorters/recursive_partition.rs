//! A quicksort-style recursive partition sort with a tracked midpoint pivot.
//!
//! The pivot starts at the midpoint of the range. Unlike textbook
//! Hoare/Lomuto schemes the pivot element itself takes part in swaps: when a
//! cursor sitting on the pivot index swaps, the pivot index follows its value
//! to the other cursor. Partitioning ends with both cursors on the pivot
//! index `S`; recursion continues on `[left, S]` and `[S + 1, right]`.

use super::SortingAlgorithm;

pub struct RecursivePartitionSort;

impl SortingAlgorithm for RecursivePartitionSort {
    fn name(&self) -> &'static str {
        "RecursivePartitionSort"
    }

    fn sort_vec(&self, mut data: Vec<i32>) -> Vec<i32> {
        if !data.is_empty() {
            let right = data.len() - 1;
            recursive_sort(&mut data, 0, right);
        }
        data
    }
}

fn recursive_sort(data: &mut [i32], left: usize, right: usize) {
    if left >= right {
        return;
    }
    let s = partition(data, left, right);
    recursive_sort(data, left, s);
    recursive_sort(data, s + 1, right);
}

/// Partitions `data[left..=right]` around the value at its midpoint and
/// returns the final pivot index `S`.
///
/// After every swap `data[S]` still holds the pivot value. On return every
/// element of `[left, S)` is `<=` the pivot and every element of
/// `(S, right]` is `>=` it.
pub(crate) fn partition(data: &mut [i32], left: usize, right: usize) -> usize {
    let mut i = left;
    let mut j = right;
    let mut s = left + (right - left) / 2;
    let pivot = data[s];

    while i < j {
        while data[i] <= pivot && i < s {
            i += 1;
        }
        while data[j] >= pivot && j > s {
            j -= 1;
        }
        if i < j {
            data.swap(i, j);
            if i == s {
                s = j;
            } else if j == s {
                s = i;
            }
            debug_assert_eq!(data[s], pivot, "pivot index lost its value");
        }
    }
    s
}
