//! Ascending input with a single out-of-place element at the end.

use rand::Rng;

use super::{ascending, InputGenerator};

/// Produces `[1, 2, ..., size - 1, x]` where `x` is drawn uniformly from
/// `[1, size - 1]`.
pub struct NearlySorted;

impl InputGenerator for NearlySorted {
    fn name(&self) -> &'static str {
        "NearlySorted"
    }

    fn generate(&self, size: usize) -> Vec<i32> {
        nearly_sorted_with(&mut rand::rng(), size)
    }
}

/// Seedable form of [`NearlySorted`]. A one-element array can only hold `1`.
pub fn nearly_sorted_with<R: Rng + ?Sized>(rng: &mut R, size: usize) -> Vec<i32> {
    let mut data = ascending(size);
    if let Some(last) = data.last_mut() {
        let upper = size.saturating_sub(1).max(1);
        *last = rng.random_range(1..=upper) as i32;
    }
    data
}
