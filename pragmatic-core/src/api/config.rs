//! Configuration API for sentence processing

use std::str::FromStr;

use crate::api::Language;
use crate::error::{Error, Result};
use crate::pipeline::SegmentOptions;

/// Processing configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub(crate) language: Language,
    pub(crate) newline_boundaries: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: Language::default(),
            newline_boundaries: true,
        }
    }
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Whether a single newline ends a sentence
    pub fn newline_boundaries(&self) -> bool {
        self.newline_boundaries
    }

    pub(crate) fn segment_options(&self) -> SegmentOptions {
        SegmentOptions {
            newline_boundaries: self.newline_boundaries,
        }
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    language: Option<String>,
    newline_boundaries: Option<bool>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the language by code; validated in [`build`](Self::build)
    pub fn language(mut self, code: impl Into<String>) -> Self {
        self.language = Some(code.into());
        self
    }

    /// Treat a single newline as a sentence boundary (default `true`)
    pub fn newline_boundaries(mut self, enabled: bool) -> Self {
        self.newline_boundaries = Some(enabled);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        let mut config = Config::default();

        if let Some(code) = self.language {
            if code.trim().is_empty() {
                return Err(Error::Configuration(
                    "language code must not be empty".into(),
                ));
            }
            config.language = Language::from_str(&code)?;
        }

        if let Some(enabled) = self.newline_boundaries {
            config.newline_boundaries = enabled;
        }

        Ok(config)
    }
}
