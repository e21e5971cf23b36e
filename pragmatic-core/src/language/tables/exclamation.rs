//! Words that carry their own `!` or `?`

use regex::{Captures, Regex};

use crate::error::{Error, Result};
use crate::markers::Marker;

/// Masks the punctuation of listed words such as `Yahoo!`
#[derive(Debug, Clone, Default)]
pub struct ExclamationWordTable {
    pattern: Option<Regex>,
}

impl ExclamationWordTable {
    pub fn new(words: &[String]) -> Result<Self> {
        let mut escaped: Vec<String> = words
            .iter()
            .map(|w| w.trim())
            .filter(|w| !w.is_empty())
            .map(regex::escape)
            .collect();
        if escaped.is_empty() {
            return Ok(Self::default());
        }
        escaped.sort_by(|a, b| b.len().cmp(&a.len()));

        let pattern = Regex::new(&escaped.join("|")).map_err(|e| Error::InvalidRule {
            rule: "exclamation_words".to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            pattern: Some(pattern),
        })
    }

    pub fn mask(&self, text: &str) -> String {
        let Some(pattern) = &self.pattern else {
            return text.to_string();
        };
        pattern
            .replace_all(text, |caps: &Captures| {
                caps[0]
                    .replace('!', Marker::Exclamation.token())
                    .replace('?', Marker::Question.token())
            })
            .into_owned()
    }

    pub fn is_empty(&self) -> bool {
        self.pattern.is_none()
    }
}
