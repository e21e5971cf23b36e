//! Number protection
//!
//! Masks periods that belong to decimal numbers and numbered-list markers.

use std::sync::OnceLock;

use crate::error::Result;
use crate::markers::Marker;
use crate::rule::{Rule, RuleSet};

static NUMBER_RULES: OnceLock<RuleSet> = OnceLock::new();

/// The five number rules in application order
pub fn number_rules() -> &'static RuleSet {
    NUMBER_RULES.get_or_init(|| {
        let period = Marker::Period.token();
        RuleSet::new(vec![
            // 3.14
            Rule::builtin("period_before_number", r"(\.)\d", period),
            // 1.a
            Rule::builtin("number_after_period_before_letter", r"\d(\.)\S", period),
            // "\n1. Item"
            Rule::builtin(
                "newline_number_period_space_letter",
                r"[\n\r]\d(\.)(?:[\s\S]|\))",
                period,
            ),
            Rule::builtin("start_line_number_period", r"^\d(\.)(?:[\s\S]|\))", period),
            Rule::builtin(
                "start_line_two_digit_number_period",
                r"^\d\d(\.)(?:[\s\S]|\))",
                period,
            ),
        ])
    })
}

/// Mask number periods in `text`
pub fn protect_numbers(text: &str) -> Result<String> {
    number_rules().apply(text)
}
