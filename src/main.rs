use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;

use sortbench::logging::enable_logging;
use sortbench::{BenchConfig, BenchmarkEngine, MatrixReport, SortBenchError, TimeUnit};

/// sortbench-run - time every sorting strategy against every input shape
#[derive(Parser)]
#[command(name = "sortbench-run")]
#[command(version)]
#[command(about = "Times sorting algorithms over a logarithmic range of array sizes", long_about = None)]
struct Cli {
    /// Initial size, final size and number of steps (defaults: 1000 30000 20)
    #[arg(
        value_names = ["MIN", "MAX", "STEPS"],
        num_args = 3,
        allow_negative_numbers = true
    )]
    bounds: Option<Vec<i64>>,

    /// Read the run configuration from a JSON file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Unit the reported timings are expressed in
    #[arg(short, long, value_enum)]
    unit: Option<TimeUnit>,

    /// Only run these generators
    #[arg(long, value_delimiter = ',', value_name = "NAMES")]
    only_generators: Option<Vec<String>>,

    /// Only run these algorithms
    #[arg(long, value_delimiter = ',', value_name = "NAMES")]
    only_algorithms: Option<Vec<String>>,

    /// Log run progress
    #[arg(short, long)]
    verbose: bool,

    /// Append log output to this file instead of stderr
    #[arg(long, value_name = "FILE")]
    log_file: Option<String>,
}

impl Cli {
    /// Flags override whatever the config file says.
    fn into_config(self) -> Result<BenchConfig, SortBenchError> {
        let mut config = match &self.config {
            Some(path) => BenchConfig::from_file(path)?,
            None => BenchConfig::default(),
        };

        if let Some(bounds) = self.bounds {
            if let [min_size, max_size, step_count] = bounds[..] {
                config.min_size = min_size;
                config.max_size = max_size;
                config.step_count = step_count;
            }
        }
        if let Some(unit) = self.unit {
            config.report_unit = unit;
        }
        if self.only_generators.is_some() {
            config.generators = self.only_generators;
        }
        if self.only_algorithms.is_some() {
            config.algorithms = self.only_algorithms;
        }
        config.verbose |= self.verbose;
        if self.log_file.is_some() {
            config.log_file = self.log_file;
        }
        Ok(config)
    }
}

fn run(config: &BenchConfig) -> Result<String, SortBenchError> {
    let level = if config.verbose {
        LevelFilter::Info
    } else {
        LevelFilter::Warn
    };
    enable_logging(level, config.log_file.as_deref())?;

    let engine = BenchmarkEngine::from_config(config)?;
    let matrix = engine.run_config(config)?;
    MatrixReport::from_matrix(&matrix, config.report_unit).to_json_pretty()
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = cli.into_config().and_then(|config| run(&config));
    match result {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(err) if err.is_invalid_parameters() => {
            eprintln!("{}", err);
            eprintln!("Re-run with a valid interval, e.g. `sortbench-run 1000 30000 20`.");
            ExitCode::from(2)
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
