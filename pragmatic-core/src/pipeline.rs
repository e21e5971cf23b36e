//! Segmentation pipeline
//!
//! Stages run in a fixed order over a fresh working buffer:
//!
//! 1. number protection
//! 2. abbreviation and time protection (language rules)
//! 3. continuous punctuation
//! 4. ellipsis protection
//! 5. newline boundaries
//! 6. end-of-text sentinel
//! 7. exclamation words (language rules)
//! 8. quoted and bracketed spans
//! 9. double punctuation and quotation rules
//! 10. boundary split and restoration

use crate::error::Result;
use crate::language::LanguageRules;
use crate::markers::{self, Marker};
use crate::rules::{
    mask_continuous_punctuation, protect_ellipses, protect_enclosures, protect_numbers,
    protect_punctuation, punctuation::newline_rule,
};

/// Per-call segmentation switches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentOptions {
    /// A single newline ends a sentence
    pub newline_boundaries: bool,
}

impl Default for SegmentOptions {
    fn default() -> Self {
        Self {
            newline_boundaries: true,
        }
    }
}

/// Split `text` into trimmed sentences with original punctuation restored
pub fn segment(
    rules: &dyn LanguageRules,
    text: &str,
    options: &SegmentOptions,
) -> Result<Vec<String>> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(Vec::new());
    }

    let text = protect_numbers(text)?;
    let text = rules.protect_abbreviations(&text)?;
    let text = mask_continuous_punctuation(&text);
    let text = protect_ellipses(&text)?;
    let mut text = if options.newline_boundaries {
        newline_rule().apply(&text)?
    } else {
        text
    };
    log::trace!("protected numbers, abbreviations and ellipses: {text:?}");

    let ends_sentence = |ch: char| rules.is_terminator(ch) || Marker::is_boundary_char(ch);
    if !text.chars().any(ends_sentence) {
        let sentence = markers::restore(&text);
        return Ok(vec![sentence.trim().to_string()]);
    }

    if text.chars().next_back().is_some_and(|ch| !ends_sentence(ch)) {
        text.push_str(Marker::EndOfText.token());
    }

    let text = rules.protect_exclamation_words(&text);
    let text = protect_enclosures(&text);
    let text = protect_punctuation(&text)?;
    log::trace!("fully protected text: {text:?}");

    Ok(rules.splitter().split(&text))
}
