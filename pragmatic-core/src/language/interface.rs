//! Public contract for language rules
//!
//! The pipeline is language-agnostic; everything that differs between
//! languages is reached through [`LanguageRules`].

use crate::error::Result;
use crate::splitter::BoundarySplitter;

/// Language-specific rules for sentence boundary detection
pub trait LanguageRules: Send + Sync + std::fmt::Debug {
    /// Language code, e.g. `en`
    fn code(&self) -> &str;

    /// Human-readable language name
    fn name(&self) -> &str;

    /// Terminator characters in configuration order
    fn terminators(&self) -> &[char];

    /// Is `ch` one of this language's terminators?
    fn is_terminator(&self, ch: char) -> bool {
        self.terminators().contains(&ch)
    }

    /// Mask abbreviation and time periods
    ///
    /// Runs the shared abbreviation stage with this language's extra rules
    /// and abbreviation lists.
    fn protect_abbreviations(&self, text: &str) -> Result<String>;

    /// Mask the punctuation of words such as `Yahoo!`
    fn protect_exclamation_words(&self, text: &str) -> String;

    /// Boundary splitter built for this language's terminators
    fn splitter(&self) -> &BoundarySplitter;
}
