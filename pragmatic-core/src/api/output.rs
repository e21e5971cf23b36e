//! Output types for the API

use std::time::Duration;

use serde::Serialize;

/// Processing output with metadata
#[derive(Debug, Clone, Serialize)]
pub struct Output {
    /// Sentences in input order
    pub sentences: Vec<Sentence>,
    /// Processing metadata
    pub metadata: ProcessingMetadata,
}

/// A sentence and where it starts in the input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sentence {
    /// Trimmed sentence text
    pub text: String,
    /// Byte offset in the original text
    pub offset: usize,
    /// Character offset in the original text
    pub char_offset: usize,
}

impl Sentence {
    /// Length in bytes
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Metadata about the processing
#[derive(Debug, Clone, Serialize)]
pub struct ProcessingMetadata {
    /// Total processing duration
    pub duration: Duration,
    /// Code of the language pack used
    pub language: String,
    /// Additional statistics
    pub stats: ProcessingStats,
}

/// Additional processing statistics
#[derive(Debug, Clone, Serialize)]
pub struct ProcessingStats {
    /// Total bytes processed
    pub bytes_processed: usize,
    /// Total characters processed
    pub chars_processed: usize,
    /// Number of sentences found
    pub sentence_count: usize,
    /// Average sentence length in characters
    pub avg_sentence_length: f32,
}

impl Output {
    /// Attach offsets to segmented sentences
    ///
    /// Every sentence is a substring of `text`; each is searched for after
    /// the end of the previous one.
    pub(crate) fn from_sentences(
        sentences: Vec<String>,
        text: &str,
        language: &str,
        duration: Duration,
    ) -> Self {
        let mut cursor = 0;
        let mut char_cursor = 0;
        let mut located = Vec::with_capacity(sentences.len());

        for sentence in sentences {
            let (offset, end) = match text[cursor..].find(sentence.as_str()) {
                Some(found) => (cursor + found, cursor + found + sentence.len()),
                None => {
                    log::warn!("sentence not found in input after byte {cursor}");
                    (cursor, cursor)
                }
            };
            char_cursor += text[cursor..offset].chars().count();
            let char_offset = char_cursor;
            char_cursor += text[offset..end].chars().count();
            cursor = end;

            located.push(Sentence {
                text: sentence,
                offset,
                char_offset,
            });
        }

        let chars_processed = text.chars().count();
        let sentence_count = located.len();
        let avg_sentence_length = if sentence_count > 0 {
            located.iter().map(|s| s.text.chars().count()).sum::<usize>() as f32
                / sentence_count as f32
        } else {
            0.0
        };

        Self {
            sentences: located,
            metadata: ProcessingMetadata {
                duration,
                language: language.to_string(),
                stats: ProcessingStats {
                    bytes_processed: text.len(),
                    chars_processed,
                    sentence_count,
                    avg_sentence_length,
                },
            },
        }
    }

    /// Sentence texts in order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.sentences.iter().map(|s| s.text.as_str())
    }
}
