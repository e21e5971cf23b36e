//! Protection rule sets
//!
//! Each stage masks punctuation that looks like a terminator but is not one.
//! Rule sets are compiled on first use and shared for the life of the process.

pub mod abbreviations;
pub mod ellipsis;
pub mod enclosure;
pub mod numbers;
pub mod punctuation;

pub use abbreviations::protect_abbreviations;
pub use ellipsis::protect_ellipses;
pub use enclosure::{protect_enclosures, EnclosureKind, MatchType, PunctuationReplacer};
pub use numbers::protect_numbers;
pub use punctuation::{mask_continuous_punctuation, protect_punctuation};
