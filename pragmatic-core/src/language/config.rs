//! Configuration structures and validation
//!
//! This module defines the TOML schema for language packs.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Root language configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageConfig {
    pub metadata: Metadata,
    pub terminators: Terminators,
    #[serde(default)]
    pub abbreviations: Abbreviations,
    #[serde(default)]
    pub exclamation_words: ExclamationWords,
    /// Extra protection rules run with the abbreviation stage
    #[serde(default)]
    pub rules: Vec<RuleConfig>,
}

/// Language metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    pub name: String,
}

/// Terminator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Terminators {
    pub chars: Vec<char>,
}

/// Known abbreviations, without their trailing period
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Abbreviations {
    /// Titles that always precede another word (`Dr`, `Mr`)
    #[serde(default)]
    pub prepositive: Vec<String>,
    /// Abbreviations that precede a number (`No`, `Vol`)
    #[serde(default)]
    pub number: Vec<String>,
    /// Everything else (`etc`, `vs`)
    #[serde(default)]
    pub common: Vec<String>,
}

/// Words whose `!` or `?` is part of the word
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExclamationWords {
    #[serde(default)]
    pub words: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleConfig {
    pub name: String,
    pub pattern: String,
    pub replacement: String,
}

impl LanguageConfig {
    /// Parse a pack from TOML source
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: LanguageConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a pack from disk
    pub fn from_path(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Validate configuration
    pub(crate) fn validate(&self) -> Result<()> {
        if self.metadata.code.trim().is_empty() {
            return Err(Error::Configuration(
                "Language code must not be empty".to_string(),
            ));
        }

        if self.terminators.chars.is_empty() {
            return Err(Error::Configuration(
                "No terminator characters defined".to_string(),
            ));
        }

        let abbreviations = &self.abbreviations;
        if let Some(empty) = abbreviations
            .prepositive
            .iter()
            .chain(&abbreviations.number)
            .chain(&abbreviations.common)
            .find(|abbr| abbr.trim().is_empty())
        {
            return Err(Error::Configuration(format!(
                "Empty abbreviation entry {empty:?}"
            )));
        }

        if self.exclamation_words.words.iter().any(|w| w.trim().is_empty()) {
            return Err(Error::Configuration(
                "Empty exclamation word".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
        [metadata]
        code = "xx"
        name = "Test"

        [terminators]
        chars = [".", "!", "?"]
    "#;

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = LanguageConfig::from_toml_str(MINIMAL).unwrap();
        assert_eq!(config.metadata.code, "xx");
        assert_eq!(config.terminators.chars, vec!['.', '!', '?']);
        assert!(config.abbreviations.common.is_empty());
        assert!(config.exclamation_words.words.is_empty());
        assert!(config.rules.is_empty());
    }

    #[test]
    fn test_full_config() {
        let source = r#"
            [metadata]
            code = "xx"
            name = "Test"

            [terminators]
            chars = ["."]

            [abbreviations]
            prepositive = ["dr"]
            number = ["no"]
            common = ["etc"]

            [exclamation_words]
            words = ["Yahoo!"]

            [[rules]]
            name = "kommanditgesellschaft"
            pattern = 'Co(\.)\sKG'
            replacement = "∯"
        "#;
        let config = LanguageConfig::from_toml_str(source).unwrap();
        assert_eq!(config.abbreviations.prepositive, vec!["dr"]);
        assert_eq!(config.exclamation_words.words, vec!["Yahoo!"]);
        assert_eq!(config.rules.len(), 1);
        assert_eq!(config.rules[0].pattern, r"Co(\.)\sKG");
    }

    #[test]
    fn test_empty_terminators_rejected() {
        let source = r#"
            [metadata]
            code = "xx"
            name = "Test"

            [terminators]
            chars = []
        "#;
        let err = LanguageConfig::from_toml_str(source).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn test_empty_code_rejected() {
        let source = MINIMAL.replace(r#"code = "xx""#, r#"code = " ""#);
        assert!(matches!(
            LanguageConfig::from_toml_str(&source),
            Err(Error::Configuration(_))
        ));
    }

    #[test]
    fn test_multi_char_terminator_is_a_parse_error() {
        let source = MINIMAL.replace(r#"chars = [".", "!", "?"]"#, r#"chars = ["..."]"#);
        assert!(matches!(
            LanguageConfig::from_toml_str(&source),
            Err(Error::Toml(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = LanguageConfig::from_path(Path::new("/nonexistent/pack.toml")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
