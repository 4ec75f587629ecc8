//! Computes the series of array sizes a benchmarking run samples.
//!
//! Sizes are spaced geometrically between the interval bounds (equal steps in
//! natural-log space) and rounded to human-readable values, so the resulting
//! points sit evenly on a log-scale chart.

use serde::Serialize;

use crate::error::SortBenchError;

/// An immutable, non-decreasing list of array sizes for one benchmarking run.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(transparent)]
pub struct SizeSeries {
    sizes: Vec<usize>,
}

impl SizeSeries {
    /// Builds the series for `[min_size, max_size]` with `step_count` points.
    ///
    /// The k-th raw point is `exp(ln(min) + k * (ln(max) - ln(min)) / (steps - 1))`.
    /// Raw points are truncated to integers and then rounded: above 1000 to the
    /// nearest hundred, from 100 to 1000 to the nearest ten, below 100 untouched.
    /// Rounding collisions are kept, so the series is only guaranteed to be
    /// non-decreasing.
    pub fn compute(min_size: i64, max_size: i64, step_count: i64) -> Result<Self, SortBenchError> {
        validate(min_size, max_size, step_count)?;

        let steps = step_count as usize;
        if steps == 1 {
            return Ok(Self {
                sizes: vec![round_size(min_size as u64)],
            });
        }

        let min = min_size as f64;
        let max = max_size as f64;
        let ln_min = min.ln();
        let ln_stride = (max.ln() - ln_min) / (steps - 1) as f64;

        let sizes = (0..steps)
            .map(|k| {
                // Endpoints are pinned: exp(ln(x)) can land just below x.
                let raw = if k == 0 {
                    min
                } else if k == steps - 1 {
                    max
                } else {
                    (ln_min + k as f64 * ln_stride).exp().clamp(min, max)
                };
                round_size(raw as u64)
            })
            .collect();

        Ok(Self { sizes })
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.sizes
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.sizes.iter().copied()
    }
}

impl<'a> IntoIterator for &'a SizeSeries {
    type Item = &'a usize;
    type IntoIter = std::slice::Iter<'a, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.sizes.iter()
    }
}

fn validate(min_size: i64, max_size: i64, step_count: i64) -> Result<(), SortBenchError> {
    let reason = if min_size < 1 {
        Some("Initial length value must be greater than 0")
    } else if max_size < 1 {
        Some("Final length value must be greater than 0")
    } else if step_count < 1 {
        Some("Number of steps must be greater than 0")
    } else if min_size > max_size {
        Some("Final length value must be greater or equal to initial length")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(SortBenchError::InvalidParameters {
            min_size,
            max_size,
            step_count,
            reason: reason.to_string(),
        }),
        None => Ok(()),
    }
}

/// Rounds a size to the nearest hundred (> 1000) or ten (100..=1000), half up.
fn round_size(value: u64) -> usize {
    let rounded = if value > 1000 {
        (value + 50) / 100 * 100
    } else if value >= 100 {
        (value + 5) / 10 * 10
    } else {
        value
    };
    rounded as usize
}
