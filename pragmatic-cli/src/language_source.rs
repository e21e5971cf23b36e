//! Language source management for CLI

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use pragmatic_core::{get_rules, load_language_file, LanguageRules};

use crate::error::CliError;

/// Where the language rules come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguageSource {
    /// Pack embedded in the core crate, by code or name
    Embedded(String),
    /// Language pack TOML file on disk
    External(PathBuf),
}

impl LanguageSource {
    /// Get the display name for the language source
    pub fn display_name(&self) -> String {
        match self {
            LanguageSource::Embedded(code) => format!("Embedded: {code}"),
            LanguageSource::External(path) => format!("External: {}", path.display()),
        }
    }

    /// Load the rules
    pub fn load(&self) -> Result<Arc<dyn LanguageRules>> {
        let loaded = match self {
            LanguageSource::Embedded(code) => get_rules(code),
            LanguageSource::External(path) => load_language_file(path),
        };

        let rules = loaded.map_err(|e| CliError::LanguagePack {
            pack: self.display_name(),
            message: e.to_string(),
        })?;
        log::debug!("loaded language '{}' ({})", rules.code(), rules.name());
        Ok(rules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_embedded_by_code_and_name() {
        let rules = LanguageSource::Embedded("ja".to_string()).load().unwrap();
        assert_eq!(rules.code(), "ja");

        let rules = LanguageSource::Embedded("English".to_string()).load().unwrap();
        assert_eq!(rules.code(), "en");
    }

    #[test]
    fn test_unknown_embedded_language() {
        let err = LanguageSource::Embedded("tlh".to_string())
            .load()
            .unwrap_err();
        assert!(err.to_string().contains("Embedded: tlh"));
    }

    #[test]
    fn test_external_pack() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("semi.toml");
        fs::write(
            &path,
            r#"
            [metadata]
            code = "semi"
            name = "Semicolons"

            [terminators]
            chars = [";"]
            "#,
        )
        .unwrap();

        let source = LanguageSource::External(path);
        assert!(source.display_name().starts_with("External: "));
        assert_eq!(source.load().unwrap().terminators(), &[';']);
    }
}
