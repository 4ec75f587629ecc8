//! Selection sort: `O(n^2)` comparisons, at most `n - 1` swaps.

use super::SortingAlgorithm;

pub struct SelectionSort;

impl SortingAlgorithm for SelectionSort {
    fn name(&self) -> &'static str {
        "SelectionSort"
    }

    fn sort_vec(&self, mut data: Vec<i32>) -> Vec<i32> {
        let len = data.len();
        for i in 0..len.saturating_sub(1) {
            let mut min_index = i;
            for j in i + 1..len {
                if data[j] < data[min_index] {
                    min_index = j;
                }
            }
            data.swap(i, min_index);
        }
        data
    }
}
