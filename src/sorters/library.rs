//! The platform's own comparison sort, used as the performance baseline.

use super::SortingAlgorithm;

pub struct LibrarySort;

impl SortingAlgorithm for LibrarySort {
    fn name(&self) -> &'static str {
        "LibrarySort"
    }

    fn sort_vec(&self, mut data: Vec<i32>) -> Vec<i32> {
        data.sort_unstable();
        data
    }
}
