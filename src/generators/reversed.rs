//! Descending input: the worst case for most quadratic algorithms.

use super::InputGenerator;

/// Produces `[size, size - 1, ..., 1]`.
pub struct Reversed;

impl InputGenerator for Reversed {
    fn name(&self) -> &'static str {
        "Reversed"
    }

    fn generate(&self, size: usize) -> Vec<i32> {
        (1..=size).rev().map(|v| v as i32).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reversed_counts_down_by_one() {
        let data = Reversed.generate(10_000);
        assert_eq!(data[0], 10_000);
        assert_eq!(data[9_999], 1);
        assert!(data.windows(2).all(|w| w[0] - 1 == w[1]));
    }
}
