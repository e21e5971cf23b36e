//! Quoted and bracketed span protection
//!
//! Terminators inside quotes, brackets and parentheses do not end the
//! surrounding sentence. Each span kind is located with a pairing pattern and
//! the punctuation inside every span is masked. Spans are never edited in
//! place: every substitution applied to a span is mirrored into the whole
//! text by literal find-and-replace of the span's content.

use std::sync::OnceLock;

use regex::Regex;

use crate::markers::Marker;

/// Whether apostrophes inside a span are protected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchType {
    /// Single-quoted spans; apostrophes inside stay as they are
    Single,
    /// Every other span kind; apostrophes inside are masked
    Double,
}

/// Delimiter families, in processing order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnclosureKind {
    SingleQuote,
    DoubleQuote,
    SquareBracket,
    Parenthesis,
    ArrowQuote,
    SmartQuote,
    CornerBracket,
    FullwidthParenthesis,
}

impl EnclosureKind {
    /// Processing order
    pub const ORDER: [EnclosureKind; 8] = [
        EnclosureKind::SingleQuote,
        EnclosureKind::DoubleQuote,
        EnclosureKind::SquareBracket,
        EnclosureKind::Parenthesis,
        EnclosureKind::ArrowQuote,
        EnclosureKind::SmartQuote,
        EnclosureKind::CornerBracket,
        EnclosureKind::FullwidthParenthesis,
    ];

    /// Pairing pattern; a match may carry leading whitespace
    pub const fn pattern(self) -> &'static str {
        match self {
            EnclosureKind::SingleQuote => r"\s'(?:[^']|'[a-zA-Z])*'",
            EnclosureKind::DoubleQuote => r#""(?:[^"\\]+|\\{2}|\\.)*""#,
            EnclosureKind::SquareBracket => r"\[(?:[^\]\\]+|\\{2}|\\.)*\]",
            EnclosureKind::Parenthesis => r"\((?:[^\(\)\\]+|\\{2}|\\.)*\)",
            EnclosureKind::ArrowQuote => r"«(?:[^»\\]+|\\{2}|\\.)*»",
            EnclosureKind::SmartQuote => r"“(?:[^”\\]+|\\{2}|\\.)*”",
            EnclosureKind::CornerBracket => r"「(?:[^「」\\]+|\\{2}|\\.)*」",
            EnclosureKind::FullwidthParenthesis => r"（(?:[^（）\\]+|\\{2}|\\.)*）",
        }
    }

    pub const fn match_type(self) -> MatchType {
        match self {
            EnclosureKind::SingleQuote => MatchType::Single,
            _ => MatchType::Double,
        }
    }

    fn index(self) -> usize {
        match self {
            EnclosureKind::SingleQuote => 0,
            EnclosureKind::DoubleQuote => 1,
            EnclosureKind::SquareBracket => 2,
            EnclosureKind::Parenthesis => 3,
            EnclosureKind::ArrowQuote => 4,
            EnclosureKind::SmartQuote => 5,
            EnclosureKind::CornerBracket => 6,
            EnclosureKind::FullwidthParenthesis => 7,
        }
    }

    fn regex(self) -> &'static Regex {
        &compiled_patterns()[self.index()]
    }
}

static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
static LEADING_APOSTROPHE: OnceLock<Regex> = OnceLock::new();

fn compiled_patterns() -> &'static [Regex] {
    PATTERNS.get_or_init(|| {
        EnclosureKind::ORDER
            .iter()
            .map(|kind| Regex::new(kind.pattern()).expect("enclosure pattern is valid"))
            .collect()
    })
}

fn leading_apostrophe() -> &'static Regex {
    LEADING_APOSTROPHE.get_or_init(|| {
        Regex::new(r"\s'(?:[^']|'[a-zA-Z])*'\S").expect("leading apostrophe pattern is valid")
    })
}

/// Characters escaped around the protector, paired with their escaped form
const RESERVED: [(&str, &str); 5] = [
    ("(", r"\("),
    (")", r"\)"),
    ("[", r"\["),
    ("]", r"\]"),
    ("-", r"\-"),
];

/// Substitutions chained over every span: the text found, its marker and
/// the text kept after the marker
const SPAN_SUBSTITUTIONS: [(&str, Marker, &str); 8] = [
    (".", Marker::Period, ""),
    ("。", Marker::IdeographicFullStop, ""),
    ("．", Marker::FullwidthPeriod, ""),
    ("！", Marker::FullwidthExclamation, ""),
    ("!", Marker::Exclamation, ""),
    ("?", Marker::Question, ""),
    // Finds nothing once the bare `?` step has run
    ("? ", Marker::Question, " "),
    // Fullwidth question mark, for `？` inside 「」
    ("？", Marker::FullwidthQuestion, ""),
];

fn escape(text: &str) -> String {
    RESERVED
        .iter()
        .fold(text.to_string(), |acc, (raw, escaped)| acc.replace(raw, escaped))
}

fn unescape(text: &str) -> String {
    RESERVED
        .iter()
        .fold(text.to_string(), |acc, (raw, escaped)| acc.replace(escaped, raw))
}

/// Masks punctuation inside one set of spans
///
/// The text and every span are escaped identically before any substitution,
/// so a span's literal content is found again in the text even after earlier
/// spans have been rewritten.
#[derive(Debug)]
pub struct PunctuationReplacer {
    text: String,
    match_type: MatchType,
}

impl PunctuationReplacer {
    pub fn new(text: &str, match_type: MatchType) -> Self {
        Self {
            text: text.to_string(),
            match_type,
        }
    }

    /// Mask every span in `spans` and return the rewritten text
    pub fn replace(mut self, spans: &[&str]) -> String {
        if spans.is_empty() {
            return self.text;
        }

        self.text = escape(&self.text);
        for span in spans {
            let mut current = escape(span);
            for (from, marker, kept) in SPAN_SUBSTITUTIONS {
                let to = format!("{}{kept}", marker.token());
                current = self.substitute(&current, from, &to);
            }
            if self.match_type == MatchType::Double {
                self.substitute(&current, "'", Marker::Apostrophe.token());
            }
        }
        unescape(&self.text)
    }

    /// Rewrite `from` inside `content` and mirror the result into the text
    fn substitute(&mut self, content: &str, from: &str, to: &str) -> String {
        let rewritten = content.replace(from, to);
        if rewritten != content {
            self.text = self.text.replace(content, &rewritten);
        }
        rewritten
    }
}

/// Literal spans of `kind` in `text`, trimmed of surrounding whitespace
pub fn find_spans(text: &str, kind: EnclosureKind) -> Vec<&str> {
    kind.regex()
        .find_iter(text)
        .map(|m| m.as_str().trim())
        .filter(|span| !span.is_empty())
        .collect()
}

/// Elided words such as `'twas` would pair with a later apostrophe
fn skip_single_quotes(text: &str) -> bool {
    leading_apostrophe().is_match(text) && !has_apostrophe_before_space(text)
}

fn has_apostrophe_before_space(text: &str) -> bool {
    text.char_indices().any(|(i, c)| {
        c == '\'' && text[i + 1..].chars().next().is_some_and(char::is_whitespace)
    })
}

/// Mask punctuation inside every quoted or bracketed span
pub fn protect_enclosures(text: &str) -> String {
    EnclosureKind::ORDER
        .iter()
        .fold(text.to_string(), |text, &kind| {
            if kind == EnclosureKind::SingleQuote && skip_single_quotes(&text) {
                log::trace!("skipping single quotes: text has a leading apostrophe");
                return text;
            }
            let spans = find_spans(&text, kind);
            PunctuationReplacer::new(&text, kind.match_type()).replace(&spans)
        })
}
