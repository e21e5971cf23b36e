//! Reserved marker alphabet
//!
//! Every protection stage swaps punctuation for one of these markers so the
//! boundary pattern cannot see it. Markers are drawn from code points that do
//! not occur in ordinary prose; text that already contains them is restored
//! incorrectly.

/// A reserved placeholder and the text it stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    /// `.` inside numbers, abbreviations and quoted spans
    Period,
    /// `。` inside quoted spans
    IdeographicFullStop,
    /// `．` inside quoted spans
    FullwidthPeriod,
    /// `！` inside quoted spans
    FullwidthExclamation,
    /// `!` inside quoted spans, exclamation words and mid-sentence
    Exclamation,
    /// `?` inside quoted spans or before a closing quote
    Question,
    /// `？` inside quoted spans
    FullwidthQuestion,
    /// `'` inside double-quoted and bracketed spans
    Apostrophe,
    /// `..` of an ellipsis followed by a capitalised word; the third period stays
    EllipsisBeforeCapital,
    /// `...` following an abbreviation period
    EllipsisAfterAbbreviation,
    /// `. . .` in the middle of a line
    SpacedEllipsis,
    /// `. . .` at the end of a line; ends the sentence
    LineEndEllipsis,
    /// Any other `...`
    Ellipsis,
    /// A single newline treated as a sentence boundary
    Newline,
    /// Sentinel appended to text that does not end with a terminator
    EndOfText,
    /// `?!`
    QuestionExclamation,
    /// `!?`
    ExclamationQuestion,
    /// `??`
    DoubleQuestion,
    /// `!!`
    DoubleExclamation,
}

impl Marker {
    /// Restoration sequence, last-introduced marker first
    pub const RESTORATION_ORDER: [Marker; 19] = [
        Marker::QuestionExclamation,
        Marker::ExclamationQuestion,
        Marker::DoubleQuestion,
        Marker::DoubleExclamation,
        Marker::Apostrophe,
        Marker::FullwidthQuestion,
        Marker::Question,
        Marker::Exclamation,
        Marker::FullwidthExclamation,
        Marker::FullwidthPeriod,
        Marker::IdeographicFullStop,
        Marker::EndOfText,
        Marker::Newline,
        Marker::Ellipsis,
        Marker::LineEndEllipsis,
        Marker::SpacedEllipsis,
        Marker::EllipsisAfterAbbreviation,
        Marker::EllipsisBeforeCapital,
        Marker::Period,
    ];

    /// Markers that terminate a sentence on their own
    pub const BOUNDARIES: [Marker; 7] = [
        Marker::EndOfText,
        Marker::Newline,
        Marker::LineEndEllipsis,
        Marker::QuestionExclamation,
        Marker::ExclamationQuestion,
        Marker::DoubleQuestion,
        Marker::DoubleExclamation,
    ];

    /// The reserved text written into the working buffer
    pub const fn token(self) -> &'static str {
        match self {
            Marker::Period => "∯",
            Marker::IdeographicFullStop => "&ᓰ&",
            Marker::FullwidthPeriod => "&ᓱ&",
            Marker::FullwidthExclamation => "&ᓳ&",
            Marker::Exclamation => "&ᓴ&",
            Marker::Question => "&ᓷ&",
            Marker::FullwidthQuestion => "&ᓸ&",
            Marker::Apostrophe => "&⎋&",
            Marker::EllipsisBeforeCapital => "☏",
            Marker::EllipsisAfterAbbreviation => "ƫ",
            Marker::SpacedEllipsis => "♟",
            Marker::LineEndEllipsis => "♝",
            Marker::Ellipsis => "ƪ",
            Marker::Newline => "ȹ",
            Marker::EndOfText => "ȸ",
            Marker::QuestionExclamation => "☉",
            Marker::ExclamationQuestion => "☈",
            Marker::DoubleQuestion => "☇",
            Marker::DoubleExclamation => "☄",
        }
    }

    /// The text the marker stands for
    pub const fn original(self) -> &'static str {
        match self {
            Marker::Period => ".",
            Marker::IdeographicFullStop => "。",
            Marker::FullwidthPeriod => "．",
            Marker::FullwidthExclamation => "！",
            Marker::Exclamation => "!",
            Marker::Question => "?",
            Marker::FullwidthQuestion => "？",
            Marker::Apostrophe => "'",
            Marker::EllipsisBeforeCapital => "..",
            Marker::EllipsisAfterAbbreviation => "...",
            Marker::SpacedEllipsis => ". . .",
            Marker::LineEndEllipsis => ". . .",
            Marker::Ellipsis => "...",
            Marker::Newline => "\n",
            Marker::EndOfText => "",
            Marker::QuestionExclamation => "?!",
            Marker::ExclamationQuestion => "!?",
            Marker::DoubleQuestion => "??",
            Marker::DoubleExclamation => "!!",
        }
    }

    /// Single-character boundary markers as chars, for building character classes
    pub fn boundary_chars() -> impl Iterator<Item = char> {
        Self::BOUNDARIES
            .into_iter()
            .filter_map(|marker| marker.token().chars().next())
    }

    /// Whether `ch` is a boundary marker
    pub fn is_boundary_char(ch: char) -> bool {
        Self::boundary_chars().any(|b| b == ch)
    }
}

/// Replace every marker in `text` with its original punctuation
pub fn restore(text: &str) -> String {
    let mut restored = text.to_string();
    for marker in Marker::RESTORATION_ORDER {
        if restored.contains(marker.token()) {
            restored = restored.replace(marker.token(), marker.original());
        }
    }
    restored
}

/// Whether any marker survives in `text`
pub fn contains_marker(text: &str) -> bool {
    Marker::RESTORATION_ORDER
        .iter()
        .any(|marker| text.contains(marker.token()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_tokens_are_unique() {
        let tokens: HashSet<&str> = Marker::RESTORATION_ORDER
            .iter()
            .map(|marker| marker.token())
            .collect();
        assert_eq!(tokens.len(), Marker::RESTORATION_ORDER.len());
    }

    #[test]
    fn test_no_token_contains_another() {
        for a in Marker::RESTORATION_ORDER {
            for b in Marker::RESTORATION_ORDER {
                if a != b {
                    assert!(
                        !a.token().contains(b.token()),
                        "{a:?} token contains {b:?} token"
                    );
                }
            }
        }
    }

    #[test]
    fn test_restore_all_markers() {
        let text = "3∯14 &ᓰ& &ᓱ& &ᓳ& &ᓴ& &ᓷ& &ᓸ& it&⎋&s☏. ƫ ♟ ♝ ƪ ☉☈☇☄ȸ";
        assert_eq!(
            restore(text),
            "3.14 。 ． ！ ! ? ？ it's... ... . . . . . . ... ?!!???!!"
        );
    }

    #[test]
    fn test_restore_newline_marker() {
        assert_eq!(restore("one lineȹtwo"), "one line\ntwo");
    }

    #[test]
    fn test_restore_leaves_plain_text_untouched() {
        let text = "Plain text with & ampersands and periods.";
        assert_eq!(restore(text), text);
        assert!(!contains_marker(text));
    }

    #[test]
    fn test_boundary_chars() {
        let chars: Vec<char> = Marker::boundary_chars().collect();
        assert_eq!(chars, vec!['ȸ', 'ȹ', '♝', '☉', '☈', '☇', '☄']);
        assert!(Marker::is_boundary_char('ȹ'));
        assert!(!Marker::is_boundary_char('∯'));
    }
}
