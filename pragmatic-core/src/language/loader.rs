//! Language configuration loader
//!
//! Manages embedded and external language packs. Embedded packs are parsed
//! once on first access and shared.

use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, OnceLock};

use crate::error::{Error, Result};
use crate::language::{
    config::LanguageConfig, interface::LanguageRules, runtime::ConfigurableLanguageRules,
};

/// Embedded packs: (code, alias, TOML source)
const EMBEDDED_SOURCES: [(&str, &str, &str); 2] = [
    (
        "en",
        "english",
        include_str!("../../configs/languages/english.toml"),
    ),
    (
        "ja",
        "japanese",
        include_str!("../../configs/languages/japanese.toml"),
    ),
];

struct Registry {
    by_code: HashMap<String, Arc<dyn LanguageRules>>,
    /// (code, name) of every loaded pack, sorted by code
    languages: Vec<(String, String)>,
}

static EMBEDDED: OnceLock<Registry> = OnceLock::new();

fn registry() -> &'static Registry {
    EMBEDDED.get_or_init(|| {
        let mut by_code = HashMap::new();
        let mut languages = Vec::new();

        for (code, alias, source) in EMBEDDED_SOURCES {
            match load_embedded_language(code, source) {
                Ok(rules) => {
                    log::debug!("loaded embedded language pack '{code}'");
                    languages.push((code.to_string(), rules.name().to_string()));
                    by_code.insert(alias.to_string(), Arc::clone(&rules));
                    by_code.insert(code.to_string(), rules);
                }
                Err(e) => {
                    log::warn!("Failed to load embedded language pack '{code}': {e}");
                }
            }
        }

        languages.sort();
        Registry { by_code, languages }
    })
}

/// Load language rules by code or alias (`en`, `English`, `ja`, ...)
pub fn get_rules(code: &str) -> Result<Arc<dyn LanguageRules>> {
    let key = code.trim().to_lowercase();
    registry()
        .by_code
        .get(&key)
        .cloned()
        .ok_or_else(|| Error::UnsupportedLanguage(code.to_string()))
}

/// Codes and names of the embedded packs
pub fn available_languages() -> &'static [(String, String)] {
    &registry().languages
}

/// Load an external language pack from a TOML file
pub fn load_language_file(path: &Path) -> Result<Arc<dyn LanguageRules>> {
    let config = LanguageConfig::from_path(path)?;
    let rules = ConfigurableLanguageRules::from_config(&config)?;
    log::debug!(
        "loaded language pack '{}' from {}",
        config.metadata.code,
        path.display()
    );
    Ok(Arc::new(rules))
}

/// Load embedded language from TOML string
fn load_embedded_language(code: &str, source: &str) -> Result<Arc<dyn LanguageRules>> {
    let config = LanguageConfig::from_toml_str(source)?;
    if config.metadata.code != code {
        return Err(Error::Configuration(format!(
            "embedded pack '{code}' declares code '{}'",
            config.metadata.code
        )));
    }
    let rules = ConfigurableLanguageRules::from_config(&config)?;
    Ok(Arc::new(rules))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_embedded_languages_load() {
        let en = get_rules("en").unwrap();
        assert_eq!(en.code(), "en");
        assert_eq!(en.name(), "English");

        let ja = get_rules("ja").unwrap();
        assert_eq!(ja.code(), "ja");
        assert!(ja.is_terminator('。'));
    }

    #[test]
    fn test_aliases_and_case() {
        assert_eq!(get_rules("English").unwrap().code(), "en");
        assert_eq!(get_rules(" JA ").unwrap().code(), "ja");
        assert!(Arc::ptr_eq(
            &get_rules("japanese").unwrap(),
            &get_rules("ja").unwrap()
        ));
    }

    #[test]
    fn test_unknown_language() {
        match get_rules("xx") {
            Err(Error::UnsupportedLanguage(code)) => assert_eq!(code, "xx"),
            other => panic!("Expected UnsupportedLanguage, got {other:?}"),
        }
    }

    #[test]
    fn test_available_languages() {
        let codes: Vec<&str> = available_languages()
            .iter()
            .map(|(code, _)| code.as_str())
            .collect();
        assert_eq!(codes, vec!["en", "ja"]);
    }

    #[test]
    fn test_embedded_code_mismatch_rejected() {
        let source = "[metadata]\ncode = \"fr\"\nname = \"French\"\n[terminators]\nchars = [\".\"]\n";
        assert!(matches!(
            load_embedded_language("en", source),
            Err(Error::Configuration(_))
        ));
    }

    #[test]
    fn test_load_language_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[metadata]\ncode = \"de\"\nname = \"German\"\n\n[terminators]\nchars = [\".\", \"!\", \"?\"]\n\n[abbreviations]\nprepositive = [\"hr\"]"
        )
        .unwrap();

        let rules = load_language_file(file.path()).unwrap();
        assert_eq!(rules.code(), "de");
        assert_eq!(rules.protect_abbreviations("Hr. Schmidt").unwrap(), "Hr∯ Schmidt");
    }
}
