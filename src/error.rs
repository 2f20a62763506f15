//! Error types for dataset loading and benchmarking.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading or writing dataset files.
#[derive(Debug, Error)]
pub enum DataError {
    /// The input file does not exist at the attempted path.
    #[error("input file not found: '{path}'")]
    NotFound { path: PathBuf },

    /// Any other I/O failure while reading or writing.
    #[error("cannot access '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line that is neither blank nor a valid signed integer.
    #[error("invalid integer '{token}' on line {line} of '{path}'")]
    Malformed {
        path: PathBuf,
        line: usize,
        token: String,
    },
}

/// Errors raised by the benchmark harness.
///
/// A mismatch between the two sorters is a correctness assertion failing,
/// not a normal runtime condition; it is surfaced loudly instead of being
/// swallowed.
#[derive(Debug, Error)]
pub enum BenchError {
    #[error(
        "dataset '{label}': mergesort and quicksort outputs diverge at index {index}"
    )]
    ResultMismatch { label: String, index: usize },
}
