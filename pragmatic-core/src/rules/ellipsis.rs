//! Ellipsis protection
//!
//! Each ellipsis shape gets its own marker so the splitter can tell a
//! sentence-ending ellipsis from one that continues the sentence.

use std::sync::OnceLock;

use crate::error::Result;
use crate::markers::Marker;
use crate::rule::{Rule, RuleSet};

static ELLIPSIS_RULES: OnceLock<RuleSet> = OnceLock::new();

/// Ellipsis rules in application order
pub fn ellipsis_rules() -> &'static RuleSet {
    ELLIPSIS_RULES.get_or_init(|| {
        let before_capital = format!("{}.", Marker::EllipsisBeforeCapital.token());
        RuleSet::new(vec![
            // "Wait... Really?" keeps one period as the terminator
            Rule::builtin(
                "three_consecutive",
                r"(?:^|[^.])(\.\.\.)\s+[A-Z]",
                &before_capital,
            ),
            // "etc.... The" keeps the abbreviation period as the terminator
            Rule::builtin(
                "four_consecutive",
                r"[^.\s](\.\.\.)\.\s+[A-Z]",
                Marker::EllipsisAfterAbbreviation.token(),
            ),
            Rule::builtin(
                "three_space",
                r"\s(\. \. \.)\s",
                Marker::SpacedEllipsis.token(),
            ),
            Rule::builtin(
                "line_end_spaced",
                r"[a-z](\. \. \.)(?:$|\r?\n)",
                Marker::LineEndEllipsis.token(),
            ),
            Rule::builtin("other_three_period", r"(\.\.\.)", Marker::Ellipsis.token()),
        ])
    })
}

/// Mask ellipses in `text`
pub fn protect_ellipses(text: &str) -> Result<String> {
    ellipsis_rules().apply(text)
}
