//! Abbreviation and time protection
//!
//! Language-independent rules live here. Known-abbreviation lists and
//! language-specific extra rules come from the language pack and are passed in
//! by the caller.

use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::error::Result;
use crate::markers::Marker;
use crate::rule::{Rule, RuleSet};

static POSSESSIVE_RULE: OnceLock<Rule> = OnceLock::new();
static SINGLE_UPPERCASE_LETTER_RULES: OnceLock<RuleSet> = OnceLock::new();
static AM_PM_RULES: OnceLock<RuleSet> = OnceLock::new();
static MULTI_PERIOD_ABBREVIATION: OnceLock<Regex> = OnceLock::new();

/// `Corp.'s` followed by whitespace or end of text
pub fn possessive_abbreviation_rule() -> &'static Rule {
    POSSESSIVE_RULE.get_or_init(|| {
        Rule::builtin(
            "possessive_abbreviation",
            r"(\.)'s(?:\s|$)",
            Marker::Period.token(),
        )
    })
}

/// Initials such as the `J.` in `J. Smith`
pub fn single_uppercase_letter_rules() -> &'static RuleSet {
    SINGLE_UPPERCASE_LETTER_RULES.get_or_init(|| {
        let period = Marker::Period.token();
        RuleSet::new(vec![
            Rule::builtin(
                "single_uppercase_letter_at_start_of_line",
                r"^[A-Z](\.)\s",
                period,
            ),
            Rule::builtin("single_uppercase_letter", r"\s[A-Z](\.)\s", period),
        ])
    })
}

/// Unmask the final period of `A.M.`/`P.M.` when a capitalised word follows
pub fn am_pm_rules() -> &'static RuleSet {
    AM_PM_RULES.get_or_init(|| {
        let p = Marker::Period.token();
        RuleSet::new(vec![
            Rule::builtin("upper_case_pm", &format!(r"P{p}M({p})\s[A-Z]"), "."),
            Rule::builtin("upper_case_am", &format!(r"A{p}M({p})\s[A-Z]"), "."),
            Rule::builtin("lower_case_pm", &format!(r"p{p}m({p})\s[A-Z]"), "."),
            Rule::builtin("lower_case_am", &format!(r"a{p}m({p})\s[A-Z]"), "."),
        ])
    })
}

fn multi_period_abbreviation() -> &'static Regex {
    MULTI_PERIOD_ABBREVIATION.get_or_init(|| {
        Regex::new(r"(?i)\b[a-z](?:\.[a-z])+\.").expect("multi-period pattern is valid")
    })
}

/// Mask every period of dotted abbreviations such as `U.S.` and `e.g.`
///
/// When an ellipsis runs on from the final period (`U.S...`) that period is
/// left for the ellipsis stage.
pub fn mask_multi_period_abbreviations(text: &str) -> String {
    multi_period_abbreviation()
        .replace_all(text, |caps: &Captures| {
            let Some(found) = caps.get(0) else {
                return String::new();
            };
            let abbreviation = found.as_str();
            if text[found.end()..].starts_with("..") {
                let (head, last) = abbreviation.split_at(abbreviation.len() - 1);
                format!("{}{last}", head.replace('.', Marker::Period.token()))
            } else {
                abbreviation.replace('.', Marker::Period.token())
            }
        })
        .into_owned()
}

/// Run the abbreviation stage
///
/// `extra` holds the language pack's own rules (e.g. `Co. KG`) and `known`
/// its compiled abbreviation list.
pub fn protect_abbreviations(text: &str, extra: &RuleSet, known: &RuleSet) -> Result<String> {
    let text = possessive_abbreviation_rule().apply(text)?;
    let text = extra.apply(&text)?;
    let text = single_uppercase_letter_rules().apply(&text)?;
    let text = known.apply(&text)?;
    let text = mask_multi_period_abbreviations(&text);
    am_pm_rules().apply(&text)
}
