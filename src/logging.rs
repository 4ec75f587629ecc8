//! One-time `env_logger` bootstrap for binaries and embedding applications.
//!
//! The library itself only talks to the `log` facade. Whoever drives a run
//! decides whether and where those records go.

use std::fs::OpenOptions;
use std::io::Write;
use std::sync::Once;

use log::LevelFilter;

use crate::error::SortBenchError;

static INIT_LOGGER: Once = Once::new();

/// Installs the global logger at `level`, appending to `log_file` when given
/// and writing to stderr otherwise. Only the first call has any effect.
pub fn enable_logging(level: LevelFilter, log_file: Option<&str>) -> Result<(), SortBenchError> {
    // Open the file before `call_once` so a bad path surfaces as an error.
    let file = match log_file {
        Some(path) => Some(OpenOptions::new().append(true).create(true).open(path)?),
        None => None,
    };

    INIT_LOGGER.call_once(move || {
        let mut builder = env_logger::Builder::new();

        builder.is_test(false);
        builder.filter_level(level);

        // Custom formatter: just print the level and message
        builder.format(|buf, record| {
            writeln!(buf, "[{}] {}", record.level(), record.args())?;
            buf.flush()?;
            Ok(())
        });

        if let Some(file) = file {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }

        let _ = builder.try_init();
    });
    Ok(())
}

/// Turns on `info`-level progress logging for benchmark runs.
pub fn enable_verbose_logging(log_file: Option<&str>) -> Result<(), SortBenchError> {
    enable_logging(LevelFilter::Info, log_file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unwritable_log_file_is_reported() {
        let result = enable_verbose_logging(Some("/definitely/not/here/sortbench.log"));
        assert!(matches!(result, Err(SortBenchError::Io(_))));
    }

    #[test]
    fn test_repeated_initialisation_is_harmless() {
        assert!(enable_logging(LevelFilter::Warn, None).is_ok());
        assert!(enable_logging(LevelFilter::Debug, None).is_ok());
    }
}
