//! Sentence boundary splitter
//!
//! Runs the boundary pattern over fully protected text. The pattern ends a
//! sentence either at a terminator (a language terminator or a boundary
//! marker) or right after a closing quote or bracket that is followed by a
//! capitalised word. Sentences are restored before they are returned.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::{Error, Result};
use crate::markers::{self, Marker};

/// Alternatives that end at a closing delimiter; group 1 is the lookahead
const ENCLOSED_ALTERNATIVES: [&str; 6] = [
    r"（(?:[^）])*）(\s?[A-Z])",
    r"「(?:[^」])*」(\s[A-Z])",
    r"\((?:[^\)]){2,}\)(\s[A-Z])",
    r"'(?:[^'])*[^,]'(\s[A-Z])",
    r#""(?:[^"])*[^,]"(\s[A-Z])"#,
    r"“(?:[^”])*[^,]”(\s[A-Z])",
];

static QUOTE_END: OnceLock<Regex> = OnceLock::new();

/// Terminator, closing quote, one space, capital letter; group 1 is the space
fn quote_end() -> &'static Regex {
    QUOTE_END.get_or_init(|| {
        Regex::new(r#"[!?.\-]["'\x{201d}\x{201c}](\s)[A-Z]"#).expect("quote end pattern is valid")
    })
}

/// Splits protected text into restored sentences
#[derive(Debug, Clone)]
pub struct BoundarySplitter {
    pattern: Regex,
}

impl BoundarySplitter {
    /// Build the boundary pattern for a set of terminator characters
    pub fn new(terminators: &[char]) -> Result<Self> {
        if terminators.is_empty() {
            return Err(Error::Configuration(
                "boundary pattern needs at least one terminator".to_string(),
            ));
        }

        let class: String = terminators
            .iter()
            .copied()
            .chain(Marker::boundary_chars())
            .map(|c| regex::escape(&c.to_string()))
            .collect();

        let mut alternatives: Vec<String> =
            ENCLOSED_ALTERNATIVES.iter().map(|s| s.to_string()).collect();
        alternatives.push(format!(r"\S(?s:.*?)[{class}]"));

        let pattern = Regex::new(&alternatives.join("|")).map_err(|e| Error::InvalidRule {
            rule: "sentence_boundary".to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self { pattern })
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Raw protected segments, markers still in place
    pub fn segments<'t>(&self, text: &'t str) -> Vec<&'t str> {
        let mut segments = Vec::new();
        let mut pos = 0;

        while pos < text.len() {
            let Some(caps) = self.pattern.captures_at(text, pos) else {
                break;
            };
            let whole = caps.get(0).map_or(pos..text.len(), |m| m.range());
            // an enclosed alternative stops before its lookahead group
            let end = caps
                .iter()
                .skip(1)
                .flatten()
                .next()
                .map_or(whole.end, |group| group.start());
            segments.push(&text[whole.start..end]);
            pos = end;
        }

        let tail = &text[pos..];
        if !tail.trim().is_empty() {
            segments.push(tail);
        }
        segments
    }

    /// Split protected text into finished sentences
    pub fn split(&self, text: &str) -> Vec<String> {
        self.segments(text)
            .into_iter()
            .flat_map(finish)
            .collect()
    }
}

/// Restore markers, split at quotation ends, trim and drop empties
pub fn finish(segment: &str) -> Vec<String> {
    let restored = markers::restore(segment);
    split_quote_ends(&restored)
        .into_iter()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn split_quote_ends(text: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut start = 0;
    let mut pos = 0;

    while let Some(caps) = quote_end().captures_at(text, pos) {
        let Some(space) = caps.get(1) else { break };
        pieces.push(&text[start..space.start()]);
        start = space.end();
        pos = space.end();
    }
    pieces.push(&text[start..]);
    pieces
}

#[cfg(test)]
mod tests {
    use super::*;

    const TERMINATORS: [char; 7] = ['.', '!', '?', '。', '．', '！', '？'];

    fn splitter() -> BoundarySplitter {
        BoundarySplitter::new(&TERMINATORS).unwrap()
    }

    #[test]
    fn test_splits_at_terminators() {
        assert_eq!(
            splitter().split("Hello world. How are you? Fine!"),
            vec!["Hello world.", "How are you?", "Fine!"]
        );
    }

    #[test]
    fn test_masked_periods_do_not_split() {
        assert_eq!(
            splitter().split("The value is 3∯14 today. Next."),
            vec!["The value is 3.14 today.", "Next."]
        );
    }

    #[test]
    fn test_boundary_markers_split_and_restore() {
        assert_eq!(
            splitter().split("1∯ First itemȹ2∯ Second itemȸ"),
            vec!["1. First item", "2. Second item"]
        );
        assert_eq!(
            splitter().split("Really☉ Yes☄"),
            vec!["Really?!", "Yes!!"]
        );
    }

    #[test]
    fn test_parenthesis_before_capital_ends_sentence() {
        assert_eq!(
            splitter().split("(This is an aside∯) Then more."),
            vec!["(This is an aside.)", "Then more."]
        );
    }

    #[test]
    fn test_quote_end_secondary_split() {
        assert_eq!(
            splitter().split("He said, \"Stop∯ Go∯\" Then left."),
            vec!["He said, \"Stop. Go.\"", "Then left."]
        );
    }

    #[test]
    fn test_newlines_crossed_when_not_boundaries() {
        assert_eq!(
            splitter().split("first line\nsecond line. Next."),
            vec!["first line\nsecond line.", "Next."]
        );
    }

    #[test]
    fn test_japanese_terminators() {
        assert_eq!(
            splitter().split("今日は晴れです。明日は雨です！"),
            vec!["今日は晴れです。", "明日は雨です！"]
        );
    }

    #[test]
    fn test_unterminated_tail_is_kept() {
        assert_eq!(splitter().split("One. two"), vec!["One.", "two"]);
    }

    #[test]
    fn test_sentinel_only_tail_is_dropped() {
        assert_eq!(splitter().split("Done♝ȸ"), vec!["Done. . ."]);
    }

    #[test]
    fn test_requires_terminators() {
        assert!(matches!(
            BoundarySplitter::new(&[]),
            Err(Error::Configuration(_))
        ));
    }
}
