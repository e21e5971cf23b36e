//! High-level API for sentence segmentation
//!
//! This module wraps the pipeline behind a small interface shared by the CLI
//! and library users: pick a language, hand over text, get sentences with
//! their byte offsets back.

mod config;
mod input;
mod language;
mod output;
mod processor;


pub use config::{Config, ConfigBuilder};
pub use input::Input;
pub use language::Language;
pub use output::{Output, ProcessingMetadata, ProcessingStats, Sentence};
pub use processor::SentenceProcessor;
