//! Error types for the accuracy table generator

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors that can abort a report run
#[derive(Debug)]
pub enum ReportError {
    /// Fusion key that is not part of the fixed expression table
    UnknownFusionKey(String),

    /// Input CSV has no column with the required name
    MissingColumn { path: PathBuf, column: String },

    /// Input CSV could not be parsed
    Csv { path: PathBuf, message: String },

    /// Filesystem error while listing, reading or writing
    Io(io::Error),

    /// Configuration could not be read, written or updated
    Config(String),

    /// Filename pattern failed to compile
    InvalidPattern(String),
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportError::UnknownFusionKey(key) => write!(f, "Unknown fusion key: {}", key),
            ReportError::MissingColumn { path, column } => {
                write!(f, "Missing column '{}' in {}", column, path.display())
            }
            ReportError::Csv { path, message } => {
                write!(f, "CSV error in {}: {}", path.display(), message)
            }
            ReportError::Io(e) => write!(f, "I/O error: {}", e),
            ReportError::Config(msg) => write!(f, "Configuration error: {}", msg),
            ReportError::InvalidPattern(msg) => write!(f, "Invalid filename pattern: {}", msg),
        }
    }
}

impl std::error::Error for ReportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReportError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ReportError {
    fn from(e: io::Error) -> Self {
        ReportError::Io(e)
    }
}

impl From<serde_json::Error> for ReportError {
    fn from(e: serde_json::Error) -> Self {
        ReportError::Config(e.to_string())
    }
}

impl From<regex::Error> for ReportError {
    fn from(e: regex::Error) -> Self {
        ReportError::InvalidPattern(e.to_string())
    }
}
