//! The read-only hand-off of a finished run to an export collaborator.
//!
//! A `MatrixReport` flattens a [`ResultMatrix`] and its size series into a
//! plain, serializable structure: measured values in a chosen [`TimeUnit`]
//! plus a list of the rows and cells that failed. Rendering it into a
//! spreadsheet or chart is the consumer's business.

use std::collections::BTreeMap;

use serde::Serialize;

use super::matrix::ResultMatrix;
use crate::config::TimeUnit;
use crate::error::SortBenchError;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct MatrixReport {
    /// Array sizes; every timing vector is indexed like this list.
    pub sizes: Vec<usize>,
    pub unit: TimeUnit,
    /// generator -> algorithm -> elapsed time per size, in `unit`.
    pub results: BTreeMap<String, BTreeMap<String, Vec<f64>>>,
    pub failures: Vec<FailureReport>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct FailureReport {
    pub generator: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<String>,
    pub message: String,
}

impl MatrixReport {
    pub fn from_matrix(matrix: &ResultMatrix, unit: TimeUnit) -> Self {
        let results = matrix
            .measured()
            .into_iter()
            .map(|(generator, cells)| {
                let cells = cells
                    .into_iter()
                    .map(|(algorithm, timings)| {
                        let values = timings.iter().map(|&t| unit.convert(t)).collect();
                        (algorithm.to_string(), values)
                    })
                    .collect();
                (generator.to_string(), cells)
            })
            .collect();

        let failures = matrix
            .failures()
            .into_iter()
            .map(|failure| FailureReport {
                generator: failure.generator.to_string(),
                algorithm: failure.algorithm.map(str::to_string),
                message: failure.error.to_string(),
            })
            .collect();

        Self {
            sizes: matrix.sizes().as_slice().to_vec(),
            unit,
            results,
            failures,
        }
    }

    pub fn to_json_pretty(&self) -> Result<String, SortBenchError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
