//! Known-abbreviation rules
//!
//! Each abbreviation class compiles to one rule whose pattern is an
//! alternation of every listed abbreviation. The abbreviation must start at
//! text start, whitespace, `(` or `[`, and is matched case-insensitively.

use crate::error::Result;
use crate::language::config::Abbreviations;
use crate::markers::Marker;
use crate::rule::{Rule, RuleSet};

const WORD_START: &str = r"(?:^|[\s(\[])";

/// Compiled abbreviation rules for one language
#[derive(Debug, Clone, Default)]
pub struct AbbreviationTable {
    rules: RuleSet,
    count: usize,
}

impl AbbreviationTable {
    /// Build the prepositive, number and common rules, skipping empty classes
    pub fn from_config(config: &Abbreviations) -> Result<Self> {
        let period = Marker::Period.token();
        let classes = [
            // Always an abbreviation before whitespace
            ("prepositive_abbreviation", &config.prepositive, r"(\.)\s"),
            // Only before a number
            ("number_abbreviation", &config.number, r"(\.)\s?\d"),
            // Only mid-sentence; a capital after the period starts a new sentence
            (
                "common_abbreviation",
                &config.common,
                r"(\.)(?:[:?,\-]|\.(?:[^.]|$)|\s+[a-z0-9(])",
            ),
        ];

        let mut rules = Vec::new();
        for (name, abbreviations, tail) in classes {
            let Some(alternation) = alternation(abbreviations) else {
                continue;
            };
            let pattern = format!("{WORD_START}(?i:{alternation}){tail}");
            rules.push(Rule::new(name, &pattern, period)?);
        }

        let count = config.prepositive.len() + config.number.len() + config.common.len();
        Ok(Self {
            rules: RuleSet::new(rules),
            count,
        })
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Number of listed abbreviations
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Longest first, so a shorter entry never shadows a longer one
fn alternation(abbreviations: &[String]) -> Option<String> {
    let mut entries: Vec<String> = abbreviations
        .iter()
        .map(|abbr| abbr.trim().trim_end_matches('.'))
        .filter(|abbr| !abbr.is_empty())
        .map(regex::escape)
        .collect();
    if entries.is_empty() {
        return None;
    }
    entries.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    entries.dedup();
    Some(entries.join("|"))
}
