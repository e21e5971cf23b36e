//! Language type for the API

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Languages with an embedded pack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    /// English language with standard English rules
    #[default]
    English,
    /// Japanese language with full-width punctuation
    Japanese,
}

impl Language {
    /// All embedded languages
    pub const ALL: [Language; 2] = [Language::English, Language::Japanese];

    /// Get the language code
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Japanese => "ja",
        }
    }

    /// Get the full language name
    pub fn name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Japanese => "Japanese",
        }
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        match code.trim().to_lowercase().as_str() {
            "en" | "eng" | "english" => Ok(Language::English),
            "ja" | "jpn" | "japanese" => Ok(Language::Japanese),
            other => Err(Error::InvalidLanguage(other.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
