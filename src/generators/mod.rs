//! This module serves as the public API for the collection of all pure,
//! stateless input generators.
//!
//! A generator maps a size to a freshly allocated array with a named
//! distribution shape. Generators never keep scratch state between calls, so
//! one generator's output can never depend on a previous call.

//==================================================================================
// 1. Module Declarations
//==================================================================================

pub mod nearly_sorted;
pub mod random_permutation;
pub mod reversed;
pub mod sorted;

pub use self::nearly_sorted::NearlySorted;
pub use self::random_permutation::RandomPermutation;
pub use self::reversed::Reversed;
pub use self::sorted::Sorted;

//==================================================================================
// 2. The Generator Contract
//==================================================================================

/// **CONTRACT:** A named, pure function `size -> array of size integers`.
///
/// `name` is the stable display name used as the first-level key of the
/// result matrix. `generate` must return exactly `size` elements in a newly
/// allocated vector.
pub trait InputGenerator: Send + Sync {
    fn name(&self) -> &'static str;

    fn generate(&self, size: usize) -> Vec<i32>;
}

/// `[1, 2, ..., size]`, the building block shared by several generators.
pub(crate) fn ascending(size: usize) -> Vec<i32> {
    (1..=size).map(|v| v as i32).collect()
}

//==================================================================================
// 3. Unit Tests
//==================================================================================
#[cfg(test)]
mod tests {
    use super::*;

    fn all_generators() -> Vec<Box<dyn InputGenerator>> {
        vec![
            Box::new(Sorted),
            Box::new(NearlySorted),
            Box::new(Reversed),
            Box::new(RandomPermutation),
        ]
    }

    #[test]
    fn test_every_generator_returns_requested_length() {
        for generator in all_generators() {
            for size in [0usize, 1, 2, 17, 1000] {
                assert_eq!(
                    generator.generate(size).len(),
                    size,
                    "{} returned the wrong length",
                    generator.name()
                );
            }
        }
    }

    #[test]
    fn test_every_generator_stays_within_one_to_size() {
        for generator in all_generators() {
            let data = generator.generate(500);
            assert!(data.iter().all(|&v| (1..=500).contains(&v)), "{}", generator.name());
        }
    }

    #[test]
    fn test_calls_do_not_share_buffers() {
        for generator in all_generators() {
            let mut first = generator.generate(64);
            first.iter_mut().for_each(|v| *v = 0);
            let second = generator.generate(64);
            assert!(second.iter().all(|&v| v != 0), "{} reused a buffer", generator.name());
        }
    }
}
