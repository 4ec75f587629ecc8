//! The timing matrix produced by one benchmarking run.
//!
//! Layout is generator name -> algorithm name -> one elapsed time per entry
//! of the [`SizeSeries`]. Both key levels are `BTreeMap`s, so iteration is
//! lexicographic and reproducible. Failures are stored as outcomes next to
//! the measurements instead of being dropped, which keeps "omitted because it
//! failed" distinct from both "never registered" and "took zero time".

use std::collections::BTreeMap;
use std::time::Duration;

use crate::error::SortBenchError;
use crate::series::SizeSeries;

/// Per-size elapsed times for one (generator, algorithm) pair.
pub type Timings = Vec<Duration>;

/// The outcome of timing one algorithm against one generator's inputs.
pub type CellOutcome = Result<Timings, SortBenchError>;

/// The outcome of one generator's row.
#[derive(Debug)]
pub enum GeneratorOutcome {
    /// Inputs were materialized; each algorithm has its own outcome.
    Measured(BTreeMap<String, CellOutcome>),
    /// The generator itself could not be invoked, so no algorithm ran.
    Failed(SortBenchError),
}

/// A failed row or cell, as listed by [`ResultMatrix::failures`].
#[derive(Debug)]
pub struct PluginFailure<'a> {
    pub generator: &'a str,
    /// `None` when the whole generator row failed.
    pub algorithm: Option<&'a str>,
    pub error: &'a SortBenchError,
}

#[derive(Debug)]
pub struct ResultMatrix {
    sizes: SizeSeries,
    rows: BTreeMap<String, GeneratorOutcome>,
}

impl ResultMatrix {
    pub(crate) fn new(sizes: SizeSeries) -> Self {
        Self {
            sizes,
            rows: BTreeMap::new(),
        }
    }

    pub(crate) fn insert_row(&mut self, generator: &str, outcome: GeneratorOutcome) {
        self.rows.insert(generator.to_string(), outcome);
    }

    /// The size series every timing vector is indexed by.
    pub fn sizes(&self) -> &SizeSeries {
        &self.sizes
    }

    /// Raw outcome for a generator, including failures.
    pub fn outcome(&self, generator: &str) -> Option<&GeneratorOutcome> {
        self.rows.get(generator)
    }

    /// Successful timings for one pair; `None` if the pair failed or never ran.
    pub fn timings(&self, generator: &str, algorithm: &str) -> Option<&[Duration]> {
        match self.rows.get(generator)? {
            GeneratorOutcome::Measured(cells) => match cells.get(algorithm)? {
                Ok(timings) => Some(timings.as_slice()),
                Err(_) => None,
            },
            GeneratorOutcome::Failed(_) => None,
        }
    }

    /// Generators whose inputs were materialized.
    pub fn generator_names(&self) -> Vec<&str> {
        self.rows
            .iter()
            .filter(|(_, outcome)| matches!(outcome, GeneratorOutcome::Measured(_)))
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Algorithms with a successful timing vector under `generator`.
    pub fn algorithm_names(&self, generator: &str) -> Vec<&str> {
        match self.rows.get(generator) {
            Some(GeneratorOutcome::Measured(cells)) => cells
                .iter()
                .filter(|(_, cell)| cell.is_ok())
                .map(|(name, _)| name.as_str())
                .collect(),
            _ => Vec::new(),
        }
    }

    /// The successful part of the matrix. Failed rows and cells are absent.
    pub fn measured(&self) -> BTreeMap<&str, BTreeMap<&str, &[Duration]>> {
        self.rows
            .iter()
            .filter_map(|(generator, outcome)| match outcome {
                GeneratorOutcome::Measured(cells) => Some((
                    generator.as_str(),
                    cells
                        .iter()
                        .filter_map(|(algorithm, cell)| {
                            cell.as_ref()
                                .ok()
                                .map(|timings| (algorithm.as_str(), timings.as_slice()))
                        })
                        .collect(),
                )),
                GeneratorOutcome::Failed(_) => None,
            })
            .collect()
    }

    /// Every failed row and cell, in matrix order.
    pub fn failures(&self) -> Vec<PluginFailure<'_>> {
        let mut failures = Vec::new();
        for (generator, outcome) in &self.rows {
            match outcome {
                GeneratorOutcome::Failed(error) => failures.push(PluginFailure {
                    generator: generator.as_str(),
                    algorithm: None,
                    error,
                }),
                GeneratorOutcome::Measured(cells) => {
                    for (algorithm, cell) in cells {
                        if let Err(error) = cell {
                            failures.push(PluginFailure {
                                generator: generator.as_str(),
                                algorithm: Some(algorithm.as_str()),
                                error,
                            });
                        }
                    }
                }
            }
        }
        failures
    }

    /// `true` when no row or cell failed.
    pub fn is_complete(&self) -> bool {
        self.failures().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failure(plugin: &str) -> SortBenchError {
        SortBenchError::PluginInvocationFailure {
            plugin: plugin.to_string(),
            reason: "boom".to_string(),
        }
    }

    fn sample_matrix() -> ResultMatrix {
        let sizes = SizeSeries::compute(10, 100, 2).unwrap();
        let mut matrix = ResultMatrix::new(sizes);

        let mut cells = BTreeMap::new();
        cells.insert(
            "MergeSort".to_string(),
            Ok(vec![Duration::from_nanos(0), Duration::from_nanos(12)]),
        );
        cells.insert("Broken".to_string(), Err(failure("Broken")));
        matrix.insert_row("Sorted", GeneratorOutcome::Measured(cells));
        matrix.insert_row("Flaky", GeneratorOutcome::Failed(failure("Flaky")));
        matrix
    }

    #[test]
    fn test_zero_time_is_distinct_from_failure() {
        let matrix = sample_matrix();
        let timings = matrix.timings("Sorted", "MergeSort").unwrap();
        assert_eq!(timings[0], Duration::ZERO);
        assert!(matrix.timings("Sorted", "Broken").is_none());
        assert!(matrix.timings("Flaky", "MergeSort").is_none());
        assert!(matrix.timings("Sorted", "Missing").is_none());
    }

    #[test]
    fn test_measured_view_omits_failures() {
        let matrix = sample_matrix();
        let measured = matrix.measured();
        assert_eq!(measured.keys().copied().collect::<Vec<_>>(), vec!["Sorted"]);
        assert_eq!(measured["Sorted"].keys().copied().collect::<Vec<_>>(), vec!["MergeSort"]);
        assert_eq!(matrix.generator_names(), vec!["Sorted"]);
        assert_eq!(matrix.algorithm_names("Sorted"), vec!["MergeSort"]);
        assert!(matrix.algorithm_names("Flaky").is_empty());
    }

    #[test]
    fn test_failures_are_listed_in_key_order() {
        let matrix = sample_matrix();
        let failures = matrix.failures();
        assert_eq!(failures.len(), 2);
        assert_eq!(failures[0].generator, "Flaky");
        assert_eq!(failures[0].algorithm, None);
        assert_eq!(failures[1].generator, "Sorted");
        assert_eq!(failures[1].algorithm, Some("Broken"));
        assert!(!matrix.is_complete());
    }
}
