//! Error types shared across the crate
//!
//! Only file-level problems are errors. A missing model column is
//! recovered by defaulting and a zero denominator becomes a zero ratio,
//! so neither appears here.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading, enriching or writing cleanup data
#[derive(Debug, Error)]
pub enum CleanupError {
    #[error("input file {} does not exist", path.display())]
    InputNotFound { path: PathBuf },

    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV input has no header row")]
    MissingHeader,

    #[error("row {row} has {found} fields, expected {expected}")]
    MalformedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("row {row}: column '{column}' has invalid value '{value}'")]
    InvalidCell {
        row: usize,
        column: String,
        value: String,
    },

    #[error("required column '{0}' is missing")]
    MissingColumn(String),

    #[error("invalid cost rates: {0}")]
    InvalidRates(String),

    #[error("failed to parse rates file: {0}")]
    RatesFormat(#[from] serde_json::Error),
}

impl CleanupError {
    /// Wrap an I/O error, mapping `NotFound` to [`CleanupError::InputNotFound`]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            CleanupError::InputNotFound { path }
        } else {
            CleanupError::Io { path, source }
        }
    }
}

pub type Result<T> = std::result::Result<T, CleanupError>;
