//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use pragmatic_core::LanguageConfig;
use std::fs;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Language code for the new pack
    #[arg(short = 'l', long, value_name = "CODE", required = true)]
    pub language_code: String,

    /// Display name for the new pack
    #[arg(short, long, default_value = "Custom Language")]
    pub name: String,

    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        println!("Generating language pack template...");
        println!("  Language code: {}", self.language_code);
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template();
        LanguageConfig::from_toml_str(&template)
            .context("Generated template is not a valid language pack")?;

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Language pack template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the file to list the language's terminators and abbreviations");
        println!("2. Validate it:");
        println!(
            "   pragmatic validate --language-config {}",
            self.output.display()
        );
        println!("3. Use it for processing:");
        println!(
            "   pragmatic process -i input.txt --language-config {}",
            self.output.display()
        );

        Ok(())
    }

    /// Commented TOML template; user values are emitted as escaped TOML strings
    fn generate_template(&self) -> String {
        let code = toml::Value::String(self.language_code.clone());
        let name = toml::Value::String(self.name.clone());
        format!(
            r#"# Language pack for {code}

[metadata]
code = {code}
name = {name}

# Characters that end a sentence
[terminators]
chars = [".", "!", "?"]

# Abbreviations without their trailing period, matched case-insensitively
[abbreviations]
# Titles that always precede a name: "Dr. Smith"
prepositive = ["dr", "mr", "mrs", "ms", "prof"]
# Abbreviations that precede a number: "No. 5"
number = ["no", "vol", "p", "pp"]
# Everything else: "etc.", "vs."
common = ["etc", "vs", "inc", "corp"]

# Words whose "!" is part of the word
[exclamation_words]
words = []

# Extra protection rules run with the abbreviation stage. The single capture
# group is replaced; "∯" restores to ".".
# [[rules]]
# name = "kommanditgesellschaft"
# pattern = 'Co(\.)\sKG'
# replacement = "∯"
"#
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn args(code: &str, output: PathBuf) -> GenerateConfigArgs {
        GenerateConfigArgs {
            language_code: code.to_string(),
            name: "Custom Language".to_string(),
            output,
        }
    }

    #[test]
    fn test_template_is_a_valid_pack() {
        let template = args("fr", PathBuf::from("french.toml")).generate_template();
        assert!(template.contains("code = \"fr\""));

        let config = LanguageConfig::from_toml_str(&template).unwrap();
        assert_eq!(config.metadata.code, "fr");
        assert_eq!(config.metadata.name, "Custom Language");
        assert!(config.abbreviations.prepositive.contains(&"dr".to_string()));
        assert!(config.rules.is_empty());
    }

    #[test]
    fn test_template_escapes_user_values() {
        let template = args("x\"y", PathBuf::from("x.toml")).generate_template();
        let config = LanguageConfig::from_toml_str(&template).unwrap();
        assert_eq!(config.metadata.code, "x\"y");
    }

    #[test]
    fn test_execute_writes_file() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("test_config.toml");

        args("test", output_path.clone()).execute().unwrap();

        let content = std::fs::read_to_string(&output_path).unwrap();
        assert!(content.contains("[metadata]"));
        assert!(pragmatic_core::load_language_file(&output_path).is_ok());
    }

    #[test]
    fn test_empty_code_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("empty.toml");

        assert!(args("", output_path.clone()).execute().is_err());
        assert!(!output_path.exists());
    }
}
