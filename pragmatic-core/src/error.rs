//! Error types for segmentation and language pack loading

use std::path::PathBuf;
use thiserror::Error;

/// Error type for all core operations
#[derive(Debug, Error)]
pub enum Error {
    /// A rule kept matching after its replacement was applied
    #[error("Rule '{rule}' did not terminate after {iterations} applications")]
    NonTerminatingRule { rule: String, iterations: usize },

    /// A rule could not be compiled or breaks the rule contract
    #[error("Invalid rule '{rule}': {reason}")]
    InvalidRule { rule: String, reason: String },

    /// Language pack or processor configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// No language pack is registered under this code
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// Invalid language specification
    #[error("Invalid language: {0}")]
    InvalidLanguage(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Reading a file failed
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A language pack is not valid TOML for the expected schema
    #[error("Failed to parse language config: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, Error>;
