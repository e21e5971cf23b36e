//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

pub mod generate_config;
pub mod process;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Split text files into sentences
    Process(process::ProcessArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Check that a language pack file loads
    Validate(validate::ValidateArgs),

    /// Write a language pack template to start a new language from
    GenerateConfig(generate_config::GenerateConfigArgs),
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List embedded language packs
    Languages,

    /// List available output formats
    Formats,
}

impl Commands {
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Process(args) => args.execute(),
            Commands::List { subcommand } => {
                subcommand.execute();
                Ok(())
            }
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

impl ListCommands {
    pub fn execute(&self) {
        match self {
            ListCommands::Languages => {
                println!("Embedded languages:");
                for (code, name) in pragmatic_core::available_languages() {
                    println!("  {code:<4} {name}");
                }
                println!();
                println!("Other languages can be loaded with --language-config <FILE>");
            }
            ListCommands::Formats => {
                println!("Output formats:");
                for format in process::OutputFormat::ALL {
                    println!("  {:<9} {}", format.name(), format.description());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands_debug_format() {
        let process_cmd = Commands::Process(process::ProcessArgs {
            input: vec!["test.txt".to_string()],
            output: None,
            format: process::OutputFormat::Text,
            language: "en".to_string(),
            language_config: None,
            no_newline_boundaries: false,
            quiet: false,
            verbose: 0,
        });

        let debug_str = format!("{:?}", process_cmd);
        assert!(debug_str.contains("Process"));
        assert!(debug_str.contains("test.txt"));

        let list_cmd = Commands::List {
            subcommand: ListCommands::Languages,
        };
        let debug_str = format!("{:?}", list_cmd);
        assert!(debug_str.contains("List"));
        assert!(debug_str.contains("Languages"));
    }

    #[test]
    fn test_list_commands_run() {
        ListCommands::Languages.execute();
        ListCommands::Formats.execute();
    }
}
