//! A uniform random permutation of `[1..size]`.

use rand::Rng;

use super::{ascending, InputGenerator};

/// Fisher-Yates shuffle of the ascending array.
pub struct RandomPermutation;

impl InputGenerator for RandomPermutation {
    fn name(&self) -> &'static str {
        "RandomPermutation"
    }

    fn generate(&self, size: usize) -> Vec<i32> {
        random_permutation_with(&mut rand::rng(), size)
    }
}

/// Seedable form of [`RandomPermutation`].
///
/// For `i` from `size` down to 2, swaps position `i - 1` with a uniformly
/// chosen position in `[0, i - 1]`.
pub fn random_permutation_with<R: Rng + ?Sized>(rng: &mut R, size: usize) -> Vec<i32> {
    let mut data = ascending(size);
    for i in (2..=size).rev() {
        let k = rng.random_range(0..i);
        data.swap(i - 1, k);
    }
    data
}
