// In: src/engine/mod.rs

//! The benchmarking engine: cross-products generators × algorithms × sizes
//! into a [`ResultMatrix`].
//!
//! The engine is a pure coordinator. It:
//! 1. Builds the [`SizeSeries`] (failing fast on bad bounds).
//! 2. Materializes one input array per size for each registered generator.
//! 3. Times each registered algorithm on a fresh copy of every input.
//! 4. Stores each outcome, successful or not, in the matrix.
//!
//! Execution is single-threaded and measurements never overlap. A generator
//! or algorithm that panics is isolated to its own row or cell: the failure is
//! logged, recorded in the matrix, and the run moves on.

use std::any::Any;
use std::collections::BTreeMap;
use std::hint::black_box;
use std::panic::{self, AssertUnwindSafe};
use std::time::Instant;

use crate::config::BenchConfig;
use crate::error::SortBenchError;
use crate::generators::InputGenerator;
use crate::registry::{self, AlgorithmRegistry, GeneratorRegistry};
use crate::series::SizeSeries;
use crate::sorters::SortingAlgorithm;

//==================================================================================
// 1. Module Declarations
//==================================================================================

pub mod matrix;
pub mod report;

pub use self::matrix::{CellOutcome, GeneratorOutcome, PluginFailure, ResultMatrix, Timings};
pub use self::report::{FailureReport, MatrixReport};

//==================================================================================
// 2. Engine
//==================================================================================

/// Owns the plugin sets a run iterates over. Holds no per-run state, so one
/// engine can serve any number of runs.
#[derive(Clone)]
pub struct BenchmarkEngine {
    generators: GeneratorRegistry,
    algorithms: AlgorithmRegistry,
}

impl BenchmarkEngine {
    pub fn new(generators: GeneratorRegistry, algorithms: AlgorithmRegistry) -> Self {
        Self {
            generators,
            algorithms,
        }
    }

    /// Every generator and algorithm in the static registration tables.
    pub fn with_defaults() -> Self {
        Self::new(registry::default_generators(), registry::default_algorithms())
    }

    /// The default tables, narrowed to the selections in `config`.
    pub fn from_config(config: &BenchConfig) -> Result<Self, SortBenchError> {
        config.check_selections()?;
        let mut generators = registry::default_generators();
        if let Some(names) = &config.generators {
            generators = generators.select(names)?;
        }
        let mut algorithms = registry::default_algorithms();
        if let Some(names) = &config.algorithms {
            algorithms = algorithms.select(names)?;
        }
        Ok(Self::new(generators, algorithms))
    }

    pub fn generators(&self) -> &GeneratorRegistry {
        &self.generators
    }

    pub fn algorithms(&self) -> &AlgorithmRegistry {
        &self.algorithms
    }

    /// Runs the full cross product over `[min_size, max_size]`.
    ///
    /// Only `InvalidParameters` is returned as an error. Plugin failures are
    /// recorded inside the matrix.
    pub fn run(
        &self,
        min_size: i64,
        max_size: i64,
        step_count: i64,
    ) -> Result<ResultMatrix, SortBenchError> {
        let sizes = SizeSeries::compute(min_size, max_size, step_count)?;
        let start_overall = Instant::now();

        log::info!(
            "--- Benchmark run: {} generator(s) x {} algorithm(s) over sizes {:?} ---",
            self.generators.len(),
            self.algorithms.len(),
            sizes.as_slice()
        );

        let mut matrix = ResultMatrix::new(sizes);

        for (generator_name, generator) in self.generators.iter() {
            let inputs = match materialize_inputs(generator_name, generator.as_ref(), matrix.sizes()) {
                Ok(inputs) => inputs,
                Err(err) => {
                    log::warn!("  - Generator: {:<20} | SKIPPED: {}", generator_name, err);
                    matrix.insert_row(generator_name, GeneratorOutcome::Failed(err));
                    continue;
                }
            };

            let mut cells = BTreeMap::new();
            for (algorithm_name, algorithm) in self.algorithms.iter() {
                let cell = time_algorithm(generator_name, algorithm_name, algorithm.as_ref(), &inputs);
                match &cell {
                    Ok(timings) => log::info!(
                        "  - Generator: {:<20} | Algorithm: {:<24} | Total: {:.2?}",
                        generator_name,
                        algorithm_name,
                        timings.iter().sum::<std::time::Duration>()
                    ),
                    Err(err) => log::warn!(
                        "  - Generator: {:<20} | Algorithm: {:<24} | SKIPPED: {}",
                        generator_name,
                        algorithm_name,
                        err
                    ),
                }
                cells.insert(algorithm_name.to_string(), cell);
            }
            matrix.insert_row(generator_name, GeneratorOutcome::Measured(cells));
        }

        log::info!(
            "--- Benchmark run finished in {:.2?} with {} failure(s) ---",
            start_overall.elapsed(),
            matrix.failures().len()
        );

        Ok(matrix)
    }

    /// Runs with the bounds from `config`.
    pub fn run_config(&self, config: &BenchConfig) -> Result<ResultMatrix, SortBenchError> {
        self.run(config.min_size, config.max_size, config.step_count)
    }
}

impl Default for BenchmarkEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}

//==================================================================================
// 3. Internal Helpers
//==================================================================================

/// Builds one input per size. A generator that panics or returns the wrong
/// number of elements fails as a whole.
fn materialize_inputs(
    name: &str,
    generator: &dyn InputGenerator,
    sizes: &SizeSeries,
) -> Result<Vec<Vec<i32>>, SortBenchError> {
    let mut inputs = Vec::with_capacity(sizes.len());
    for size in sizes.iter() {
        let data = invoke_guarded(name, || generator.generate(size))?;
        if data.len() != size {
            return Err(SortBenchError::PluginInvocationFailure {
                plugin: name.to_string(),
                reason: format!("asked for {} elements, got {}", size, data.len()),
            });
        }
        inputs.push(data);
    }
    Ok(inputs)
}

/// Times `algorithm` on a copy of each input. The copy is made outside the
/// timed window; the timestamps bracket only the `sort` call.
fn time_algorithm(
    generator_name: &str,
    name: &str,
    algorithm: &dyn SortingAlgorithm,
    inputs: &[Vec<i32>],
) -> CellOutcome {
    let mut timings = Vec::with_capacity(inputs.len());
    for input in inputs {
        let copy = input.clone();
        let size = copy.len();
        let elapsed = invoke_guarded(name, move || {
            let start = Instant::now();
            let sorted = algorithm.sort(Some(copy));
            let elapsed = start.elapsed();
            black_box(sorted);
            elapsed
        })?;
        log_metric!(
            "event" = "measurement",
            "generator" = generator_name,
            "algorithm" = name,
            "size" = size,
            "nanos" = elapsed.as_nanos()
        );
        timings.push(elapsed);
    }
    Ok(timings)
}

/// Runs a plugin call, turning a panic into `PluginInvocationFailure`.
fn invoke_guarded<T>(plugin: &str, call: impl FnOnce() -> T) -> Result<T, SortBenchError> {
    panic::catch_unwind(AssertUnwindSafe(call)).map_err(|payload| {
        SortBenchError::PluginInvocationFailure {
            plugin: plugin.to_string(),
            reason: format!("panicked: {}", panic_message(payload.as_ref())),
        }
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        msg.to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
