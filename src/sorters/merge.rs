//! Top-down merge sort over owned halves.
//!
//! Each level copies both halves out of its input and merges them into a new
//! vector, so auxiliary space is `O(n)` per level.

use super::SortingAlgorithm;

pub struct MergeSort;

impl SortingAlgorithm for MergeSort {
    fn name(&self) -> &'static str {
        "MergeSort"
    }

    fn sort_vec(&self, data: Vec<i32>) -> Vec<i32> {
        merge_sort(data)
    }
}

fn merge_sort(data: Vec<i32>) -> Vec<i32> {
    if data.len() < 2 {
        return data;
    }
    let mid = data.len() / 2;
    let left = data[..mid].to_vec();
    let right = data[mid..].to_vec();
    merge(&merge_sort(left), &merge_sort(right))
}

/// Two-pointer interleave. Ties take the left head, which keeps the sort stable.
fn merge(left: &[i32], right: &[i32]) -> Vec<i32> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let (mut l, mut r) = (0, 0);
    while l < left.len() && r < right.len() {
        if left[l] <= right[r] {
            merged.push(left[l]);
            l += 1;
        } else {
            merged.push(right[r]);
            r += 1;
        }
    }
    merged.extend_from_slice(&left[l..]);
    merged.extend_from_slice(&right[r..]);
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_interleaves_and_drains_both_sides() {
        assert_eq!(merge(&[1, 4, 9], &[2, 3, 10, 11]), vec![1, 2, 3, 4, 9, 10, 11]);
        assert_eq!(merge(&[], &[5, 6]), vec![5, 6]);
        assert_eq!(merge(&[5, 6], &[]), vec![5, 6]);
    }
}
