//! Process command implementation

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use pragmatic_core::{Input, SegmentOptions, SentenceProcessor};

use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::language_source::LanguageSource;
use crate::output::{JsonFormatter, MarkdownFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;

/// Arguments for the process command
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Embedded language code or name (see `list languages`)
    #[arg(short, long, default_value = "en", conflicts_with = "language_config")]
    pub language: String,

    /// Language pack TOML file to use instead of an embedded language
    #[arg(short = 'c', long, value_name = "FILE")]
    pub language_config: Option<PathBuf>,

    /// Do not treat a single newline as a sentence boundary
    #[arg(long)]
    pub no_newline_boundaries: bool,

    /// Suppress progress and log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text with one sentence per line
    Text,
    /// JSON array of sentences with offsets
    Json,
    /// Markdown numbered list
    Markdown,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 3] = [
        OutputFormat::Text,
        OutputFormat::Json,
        OutputFormat::Markdown,
    ];

    pub fn name(self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            OutputFormat::Text => "One sentence per line",
            OutputFormat::Json => "JSON array of {text, offset, length}",
            OutputFormat::Markdown => "Numbered list with a sentence total",
        }
    }

    /// Build a formatter for this format writing to `writer`
    pub fn formatter<W>(self, writer: W) -> Box<dyn OutputFormatter>
    where
        W: Write + Send + Sync + 'static,
    {
        match self {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        }
    }
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self) -> Result<()> {
        self.init_logging()?;

        log::info!("Starting text processing");
        log::debug!("Arguments: {:?}", self);

        let source = self.language_source();
        log::info!("Using language: {}", source.display_name());
        let processor = SentenceProcessor::with_rules(source.load()?, self.segment_options());

        let files = resolve_patterns(&self.input)?;
        log::info!("Found {} file(s) to process", files.len());

        let mut formatter = self.format.formatter(self.open_output()?);
        let mut progress = ProgressReporter::new(self.quiet || files.len() < 2);
        progress.init_files(files.len() as u64);

        let mut total = 0;
        for path in &files {
            let text = FileReader::read_text(path)?;
            let output = processor
                .process(Input::from_text(text))
                .map_err(|e| CliError::Processing {
                    path: path.display().to_string(),
                    message: e.to_string(),
                })?;

            log::debug!(
                "{}: {} sentences in {:?}",
                path.display(),
                output.sentences.len(),
                output.metadata.duration
            );
            for sentence in &output.sentences {
                formatter.format_sentence(&sentence.text, sentence.offset)?;
            }
            total += output.sentences.len();
            progress.file_completed(&path.display().to_string());
        }

        formatter.finish()?;
        progress.finish();
        log::info!("Wrote {total} sentences from {} file(s)", files.len());
        Ok(())
    }

    pub fn language_source(&self) -> LanguageSource {
        match &self.language_config {
            Some(path) => LanguageSource::External(path.clone()),
            None => LanguageSource::Embedded(self.language.clone()),
        }
    }

    pub fn segment_options(&self) -> SegmentOptions {
        SegmentOptions {
            newline_boundaries: !self.no_newline_boundaries,
        }
    }

    fn open_output(&self) -> Result<Box<dyn Write + Send + Sync>> {
        match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Ok(Box::new(BufWriter::new(file)))
            }
            None => Ok(Box::new(io::stdout())),
        }
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A logger may already be installed when commands run in-process
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }

        Ok(())
    }
}
