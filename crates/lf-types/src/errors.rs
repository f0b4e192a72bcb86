use std::path::PathBuf;

use thiserror::Error;

/// Main error type for LegForge
#[derive(Error, Debug)]
pub enum LfError {
    #[error("Cannot write configuration to {path}: {source}")]
    ConfigWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed record {path}: {message}")]
    RecordParse { path: PathBuf, message: String },

    #[error("Simulation in {path} did not succeed: status {status} ({description})")]
    NonSuccessStatus {
        path: PathBuf,
        status: i64,
        description: String,
    },

    #[error("Time series '{series}' is empty, mean is undefined")]
    EmptyTimeSeries { series: String },

    #[error("Archive error: {0}")]
    Archive(String),

    #[error("Report error: {0}")]
    Report(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl LfError {
    /// Build a parse error for `path` from anything displayable.
    pub fn parse(path: impl Into<PathBuf>, message: impl std::fmt::Display) -> Self {
        Self::RecordParse {
            path: path.into(),
            message: message.to_string(),
        }
    }
}

/// Result type alias for LegForge operations
pub type LfResult<T> = Result<T, LfError>;

/// Macro for creating validation errors
#[macro_export]
macro_rules! validation_error {
    ($($arg:tt)*) => {
        $crate::LfError::Validation(format!($($arg)*))
    };
}

/// Macro for creating archive errors
#[macro_export]
macro_rules! archive_error {
    ($($arg:tt)*) => {
        $crate::LfError::Archive(format!($($arg)*))
    };
}
