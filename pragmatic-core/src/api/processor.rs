//! Main sentence processor implementation

use std::io::Read;
use std::sync::Arc;
use std::time::Instant;

use crate::api::{Config, Input, Output};
use crate::error::Result;
use crate::language::{get_rules, LanguageRules};
use crate::pipeline::{self, SegmentOptions};

/// Sentence processor bound to one language pack
#[derive(Debug, Clone)]
pub struct SentenceProcessor {
    rules: Arc<dyn LanguageRules>,
    options: SegmentOptions,
}

impl SentenceProcessor {
    /// English with default options
    pub fn new() -> Result<Self> {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Result<Self> {
        let rules = get_rules(config.language().code())?;
        Ok(Self::with_rules(rules, config.segment_options()))
    }

    /// Create a processor for a language code or name
    pub fn with_language(code: impl Into<String>) -> Result<Self> {
        let config = Config::builder().language(code).build()?;
        Self::with_config(config)
    }

    /// Use an already loaded pack, e.g. one read with
    /// [`load_language_file`](crate::load_language_file)
    pub fn with_rules(rules: Arc<dyn LanguageRules>, options: SegmentOptions) -> Self {
        Self { rules, options }
    }

    /// Segment input and locate every sentence in it
    pub fn process(&self, input: Input) -> Result<Output> {
        let start = Instant::now();
        let text = input.into_text()?;
        let sentences = self.segment(&text)?;
        Ok(Output::from_sentences(
            sentences,
            &text,
            self.rules.code(),
            start.elapsed(),
        ))
    }

    /// Process input from a reader
    pub fn process_stream<R: Read + Send + Sync + 'static>(&self, reader: R) -> Result<Output> {
        self.process(Input::from_reader(reader))
    }

    /// Segment text into sentences without offsets
    pub fn segment(&self, text: &str) -> Result<Vec<String>> {
        pipeline::segment(self.rules.as_ref(), text, &self.options)
    }

    pub fn rules(&self) -> &Arc<dyn LanguageRules> {
        &self.rules
    }

    pub fn options(&self) -> SegmentOptions {
        self.options
    }
}
