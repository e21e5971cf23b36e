//! Rule-based sentence boundary detection
//!
//! Text is rewritten so that punctuation which looks like a sentence
//! terminator but is not one (decimal points, abbreviations, initials,
//! ellipses, punctuation inside quotes and brackets) is swapped for reserved
//! marker characters. A single boundary pattern then splits the unambiguous
//! text and the markers are restored inside each sentence.
//!
//! # Architecture
//!
//! - [`rule`]: the rewrite engine every protection stage is built on
//! - [`rules`]: number, abbreviation, ellipsis, span and punctuation stages
//! - [`language`]: TOML language packs behind the [`LanguageRules`] trait
//! - [`splitter`]: the boundary pattern and marker restoration
//! - [`api`]: [`SentenceProcessor`] with byte offsets and statistics
//!
//! # Example
//!
//! ```rust
//! use pragmatic_core::{Input, SentenceProcessor};
//!
//! let processor = SentenceProcessor::with_language("en").unwrap();
//! let output = processor
//!     .process(Input::from_text("He arrived at 5 P.M. Then he left."))
//!     .unwrap();
//!
//! let sentences: Vec<&str> = output.texts().collect();
//! assert_eq!(sentences, vec!["He arrived at 5 P.M.", "Then he left."]);
//! ```

pub mod api;
pub mod error;
pub mod language;
pub mod markers;
pub mod pipeline;
pub mod rule;
pub mod rules;
pub mod splitter;

pub use api::{
    Config, ConfigBuilder, Input, Language, Output, ProcessingMetadata, ProcessingStats,
    Sentence, SentenceProcessor,
};
pub use error::{Error, Result};
pub use language::{
    available_languages, get_rules, load_language_file, ConfigurableLanguageRules,
    LanguageConfig, LanguageRules,
};
pub use markers::Marker;
pub use pipeline::{segment, SegmentOptions};
pub use rule::{Rule, RuleSet};
pub use splitter::BoundarySplitter;
