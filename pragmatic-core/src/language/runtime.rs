//! Runtime implementation of language rules
//!
//! This module bridges a parsed [`LanguageConfig`] and the [`LanguageRules`]
//! trait used by the pipeline.

use crate::error::Result;
use crate::language::{
    config::LanguageConfig,
    interface::LanguageRules,
    tables::{AbbreviationTable, ExclamationWordTable, TermTable},
};
use crate::rule::{Rule, RuleSet};
use crate::rules::abbreviations;
use crate::splitter::BoundarySplitter;

/// Configurable language rules implementation
#[derive(Debug, Clone)]
pub struct ConfigurableLanguageRules {
    code: String,
    name: String,

    term_table: TermTable,
    abbreviations: AbbreviationTable,
    extra_rules: RuleSet,
    exclamation_words: ExclamationWordTable,
    splitter: BoundarySplitter,
}

impl ConfigurableLanguageRules {
    /// Create from configuration
    pub fn from_config(config: &LanguageConfig) -> Result<Self> {
        config.validate()?;

        let term_table = TermTable::new(&config.terminators.chars);
        let abbreviations = AbbreviationTable::from_config(&config.abbreviations)?;
        let extra_rules = config
            .rules
            .iter()
            .map(|rule| Rule::new(rule.name.as_str(), &rule.pattern, rule.replacement.as_str()))
            .collect::<Result<RuleSet>>()?;
        let exclamation_words = ExclamationWordTable::new(&config.exclamation_words.words)?;
        let splitter = BoundarySplitter::new(term_table.chars())?;

        log::debug!(
            "built language rules '{}': {} terminators, {} abbreviations, {} extra rules",
            config.metadata.code,
            term_table.chars().len(),
            abbreviations.len(),
            extra_rules.len()
        );
        if abbreviations.is_empty() && exclamation_words.is_empty() {
            log::debug!(
                "language '{}' lists no abbreviations or exclamation words",
                config.metadata.code
            );
        }

        Ok(Self {
            code: config.metadata.code.clone(),
            name: config.metadata.name.clone(),
            term_table,
            abbreviations,
            extra_rules,
            exclamation_words,
            splitter,
        })
    }
}

impl LanguageRules for ConfigurableLanguageRules {
    fn code(&self) -> &str {
        &self.code
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn terminators(&self) -> &[char] {
        self.term_table.chars()
    }

    #[inline]
    fn is_terminator(&self, ch: char) -> bool {
        self.term_table.is_terminator(ch)
    }

    fn protect_abbreviations(&self, text: &str) -> Result<String> {
        abbreviations::protect_abbreviations(text, &self.extra_rules, self.abbreviations.rules())
    }

    fn protect_exclamation_words(&self, text: &str) -> String {
        self.exclamation_words.mask(text)
    }

    fn splitter(&self) -> &BoundarySplitter {
        &self.splitter
    }
}
