//! Error handling for the CLI application

use std::fmt;

/// CLI-specific failures, reported through `anyhow`
#[derive(Debug)]
pub enum CliError {
    /// No file matched any of the input patterns
    NoInputFiles(Vec<String>),
    /// Invalid file pattern
    InvalidPattern(String),
    /// A language pack could not be loaded
    LanguagePack { pack: String, message: String },
    /// Segmentation of one file failed
    Processing { path: String, message: String },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NoInputFiles(patterns) => {
                write!(f, "No files found matching: {}", patterns.join(", "))
            }
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::LanguagePack { pack, message } => {
                write!(f, "Language pack error ({pack}): {message}")
            }
            CliError::Processing { path, message } => {
                write!(f, "Failed to segment {path}: {message}")
            }
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
