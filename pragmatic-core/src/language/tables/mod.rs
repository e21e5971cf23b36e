//! Runtime tables built from a language pack

pub mod abbreviation;
pub mod exclamation;
pub mod terminator;

pub use abbreviation::AbbreviationTable;
pub use exclamation::ExclamationWordTable;
pub use terminator::TermTable;
