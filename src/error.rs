// In: src/error.rs

//! This module defines the single, unified error type for the entire sortbench library.
//! It uses the `thiserror` crate to provide ergonomic, context-aware error handling.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SortBenchError {
    // =========================================================================
    // === High-Level, Semantic Errors (Specific to our library's logic)
    // =========================================================================
    /// The size interval or step count cannot produce a size series.
    /// Callers are expected to re-prompt rather than retry.
    #[error(
        "Invalid benchmark parameters (min_size={min_size}, max_size={max_size}, step_count={step_count}): {reason}"
    )]
    InvalidParameters {
        min_size: i64,
        max_size: i64,
        step_count: i64,
        reason: String,
    },

    /// A registered generator or algorithm could not be invoked. The engine
    /// isolates this per matrix entry; it never aborts a run.
    #[error("Plugin '{plugin}' could not be invoked: {reason}")]
    PluginInvocationFailure { plugin: String, reason: String },

    #[error("A plugin named '{0}' is already registered")]
    DuplicatePlugin(String),

    #[error("No plugin is registered under the name '{0}'")]
    UnknownPlugin(String),

    #[error("Configuration error: {0}")]
    Config(String),

    // =========================================================================
    // === External Error Wrappers (Using #[from] for automatic conversion)
    // =========================================================================
    /// An error originating from the underlying I/O subsystem (config files, log files).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An error from the Serde JSON library, typically during config loading or report rendering.
    #[error("Serde JSON error: {0}")]
    SerdeJson(#[from] serde_json::Error),
}

impl SortBenchError {
    /// Returns `true` for errors a caller should answer by asking for new
    /// parameters.
    pub fn is_invalid_parameters(&self) -> bool {
        matches!(self, SortBenchError::InvalidParameters { .. })
    }
}
