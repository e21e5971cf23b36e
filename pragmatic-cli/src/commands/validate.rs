//! Validate command implementation

use anyhow::Result;
use clap::Args;
use pragmatic_core::{load_language_file, SegmentOptions, SentenceProcessor};
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the language pack file to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub language_config: PathBuf,

    /// Sample text to segment with the pack after it loads
    #[arg(short, long, value_name = "TEXT")]
    pub sample: Option<String>,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!(
            "Validating language pack: {}",
            self.language_config.display()
        );

        let rules = match load_language_file(&self.language_config) {
            Ok(rules) => rules,
            Err(e) => {
                println!("✗ Language pack is invalid!");
                println!("  Error: {e}");
                anyhow::bail!("Validation failed: {e}");
            }
        };

        println!("✓ Language pack is valid!");
        println!("  Language code: {}", rules.code());
        println!("  Language name: {}", rules.name());
        let terminators: String = rules.terminators().iter().collect();
        println!("  Terminators: {terminators}");

        if let Some(sample) = &self.sample {
            let processor = SentenceProcessor::with_rules(rules, SegmentOptions::default());
            println!();
            for (i, sentence) in processor.segment(sample)?.iter().enumerate() {
                println!("  {}. {sentence}", i + 1);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn pack(source: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", source).unwrap();
        temp_file
    }

    #[test]
    fn test_validate_valid_pack() {
        let file = pack(
            r#"
[metadata]
code = "test"
name = "Test Language"

[terminators]
chars = ["."]

[abbreviations]
common = ["approx"]
"#,
        );

        let args = ValidateArgs {
            language_config: file.path().to_path_buf(),
            sample: Some("It is approx. ten. Fine.".to_string()),
        };
        assert!(args.execute().is_ok());
    }

    #[test]
    fn test_validate_invalid_pack() {
        let file = pack(
            r#"
[metadata]
code = ""
name = "Test"

[terminators]
chars = ["."]
"#,
        );

        let args = ValidateArgs {
            language_config: file.path().to_path_buf(),
            sample: None,
        };
        let err = args.execute().unwrap_err();
        assert!(err.to_string().contains("Language code must not be empty"));
    }

    #[test]
    fn test_validate_missing_file() {
        let args = ValidateArgs {
            language_config: PathBuf::from("/nonexistent/pack.toml"),
            sample: None,
        };
        assert!(args.execute().is_err());
    }
}
