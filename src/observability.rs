//! This module provides diagnostics hooks for the benchmarking engine.
//!
//! The `log_metric!` macro emits one structured key-value record per event
//! through the `log` facade at `debug` level. It is compiled out of release
//! builds entirely by `#[cfg(debug_assertions)]`, so timed release runs carry
//! no formatting cost.

/// Logs a structured key-value metric record, only in debug builds.
///
/// # Example
/// ```
/// use sortbench::log_metric;
/// let size = 4000;
/// log_metric!("event"="measurement", "algorithm"="MergeSort", "size"=&size);
/// ```
#[macro_export]
macro_rules! log_metric {
    ($($key:literal = $value:expr),+ $(,)?) => {
        #[cfg(debug_assertions)]
        {
            // Collect each pair as a JSON string fragment
            let mut parts = Vec::new();
            $(
                parts.push(format!("\"{}\": \"{}\"", $key, $value));
            )+

            ::log::debug!("SORTBENCH_METRIC: {{ {} }}", parts.join(", "));
        }
    };
}
