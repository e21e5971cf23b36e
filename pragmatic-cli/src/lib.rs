//! Pragmatic CLI library
//!
//! Command implementations behind the `pragmatic` binary: file pattern
//! resolution, language pack selection, output formatting and progress
//! reporting around [`pragmatic_core`].

pub mod commands;
pub mod error;
pub mod input;
pub mod language_source;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
