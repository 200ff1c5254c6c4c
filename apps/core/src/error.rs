use std::io;
use thiserror::Error;

/// Application-wide error type, consolidating all failure kinds into a single enum.
///
/// The analysis engine itself is total over any string input and never
/// returns errors; everything here surfaces at the ingestion boundary or
/// during startup configuration.
#[derive(Debug, Error)]
pub enum AppError {
    /// Text could not be produced from the uploaded source file.
    #[error("Unsupported document format: {0}")]
    UnsupportedFormat(String),

    /// Empty or unreadable caller input (e.g., missing required text).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Keyword-table or response-catalog validation failure at load time.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Represents standard input/output errors (path-based ingestion only).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        match self {
            AppError::UnsupportedFormat(s) => AppError::UnsupportedFormat(s.clone()),
            AppError::InvalidInput(s) => AppError::InvalidInput(s.clone()),
            AppError::Config(s) => AppError::Config(s.clone()),
            AppError::Io(e) => AppError::Io(io::Error::new(e.kind(), e.to_string())),
        }
    }
}
