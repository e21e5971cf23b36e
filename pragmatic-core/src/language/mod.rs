//! Language packs
//!
//! A language pack is a TOML document listing terminators, known
//! abbreviations, exclamation words and extra protection rules. English and
//! Japanese packs are embedded; further packs can be loaded from disk.

pub mod config;
pub mod interface;
pub(crate) mod loader;
pub mod runtime;
pub(crate) mod tables;

pub use config::LanguageConfig;
pub use interface::LanguageRules;
pub use loader::{available_languages, get_rules, load_language_file};
pub use runtime::ConfigurableLanguageRules;
