//! Error types for the mining engine.

use thiserror::Error;

/// Errors raised before or around a mining run.
///
/// Mining itself cannot fail once the configuration has been validated; every
/// variant here is a rejected input.
#[derive(Error, Debug)]
pub enum MiningError {
    #[error("minimum support must be a positive count, got {0}")]
    InvalidMinSupport(usize),

    #[error("relative minimum support must be in (0, 1], got {0}")]
    InvalidRelativeSupport(f64),

    #[error("max_len must be at least 1")]
    InvalidMaxLen,

    #[error("transaction matrix entry ({row}, {column}) is {value}, expected 0 or 1")]
    InvalidMatrixValue { row: usize, column: usize, value: i32 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MiningError>;

#[cfg(feature = "python")]
impl From<MiningError> for pyo3::PyErr {
    fn from(err: MiningError) -> pyo3::PyErr {
        use pyo3::exceptions::{PyRuntimeError, PyValueError};

        match err {
            MiningError::Io(e) => PyRuntimeError::new_err(e.to_string()),
            other => PyValueError::new_err(other.to_string()),
        }
    }
}
