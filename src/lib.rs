//! This file is the root of the `sortbench` Rust crate.
//!
//! Its responsibilities are strictly limited to:
//! 1.  Declaring all the top-level modules of our library (`series`, `sorters`, etc.)
//!     so the Rust compiler knows they exist.
//! 2.  Re-exporting the handful of types a caller needs to configure a run,
//!     execute it, and hand the resulting matrix to a report.

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
//==================================================================================
// 1. Module Declarations
//==================================================================================
#[macro_use]
mod observability; // Make macros available throughout the crate

pub mod config;
pub mod engine;
pub mod error;
pub mod generators;
pub mod logging;
pub mod registry;
pub mod series;
pub mod sorters;

//==================================================================================
// 2. Public Surface
//==================================================================================
pub use config::{BenchConfig, TimeUnit};
pub use engine::{BenchmarkEngine, MatrixReport, ResultMatrix};
pub use error::SortBenchError;
pub use generators::InputGenerator;
pub use registry::{AlgorithmRegistry, GeneratorRegistry, Registry};
pub use series::SizeSeries;
pub use sorters::SortingAlgorithm;
