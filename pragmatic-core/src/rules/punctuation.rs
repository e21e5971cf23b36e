//! Exclamation and question mark rules, newline boundaries

use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::error::Result;
use crate::markers::Marker;
use crate::rule::{Rule, RuleSet};

static CONTINUOUS_PUNCTUATION: OnceLock<Regex> = OnceLock::new();
static DOUBLE_PUNCTUATION_RULES: OnceLock<RuleSet> = OnceLock::new();
static QUOTATION_RULES: OnceLock<RuleSet> = OnceLock::new();
static NEWLINE_RULE: OnceLock<Rule> = OnceLock::new();

fn continuous_punctuation() -> &'static Regex {
    CONTINUOUS_PUNCTUATION.get_or_init(|| {
        Regex::new(r"(\S)([!?]{3,})(\s|$)").expect("continuous punctuation pattern is valid")
    })
}

/// Collapse runs like `!!!` or `?!?` so only the last mark terminates
pub fn mask_continuous_punctuation(text: &str) -> String {
    continuous_punctuation()
        .replace_all(text, |caps: &Captures| {
            let run = &caps[2];
            // mask all but the final mark
            let (masked, last) = run.split_at(run.len() - 1);
            let masked = masked
                .replace('!', Marker::Exclamation.token())
                .replace('?', Marker::Question.token());
            format!("{}{}{}{}", &caps[1], masked, last, &caps[3])
        })
        .into_owned()
}

/// `?!`, `!?`, `??`, `!!` become single boundary markers
pub fn double_punctuation_rules() -> &'static RuleSet {
    DOUBLE_PUNCTUATION_RULES.get_or_init(|| {
        RuleSet::new(vec![
            Rule::builtin(
                "question_exclamation",
                r"\?!",
                Marker::QuestionExclamation.token(),
            ),
            Rule::builtin(
                "exclamation_question",
                r"!\?",
                Marker::ExclamationQuestion.token(),
            ),
            Rule::builtin("double_question", r"\?\?", Marker::DoubleQuestion.token()),
            Rule::builtin("double_exclamation", r"!!", Marker::DoubleExclamation.token()),
        ])
    })
}

/// Marks that do not end a sentence: before a closing quote or mid-sentence
pub fn quotation_rules() -> &'static RuleSet {
    QUOTATION_RULES.get_or_init(|| {
        let question = Marker::Question.token();
        let exclamation = Marker::Exclamation.token();
        RuleSet::new(vec![
            Rule::builtin("question_mark_in_quotation", r#"(\?)['"]"#, question),
            Rule::builtin("exclamation_in_quotation", r#"(!)['"]"#, exclamation),
            Rule::builtin(
                "exclamation_before_comma_mid_sentence",
                r"(!),\s[a-z]",
                exclamation,
            ),
            Rule::builtin("exclamation_mid_sentence", r"(!)\s[a-z]", exclamation),
        ])
    })
}

/// A single newline becomes a boundary marker
pub fn newline_rule() -> &'static Rule {
    NEWLINE_RULE.get_or_init(|| Rule::builtin("single_newline", r"(\n)", Marker::Newline.token()))
}

/// Run the post-protection punctuation rules
pub fn protect_punctuation(text: &str) -> Result<String> {
    let text = double_punctuation_rules().apply(text)?;
    quotation_rules().apply(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_continuous_run_keeps_last_mark() {
        assert_eq!(
            mask_continuous_punctuation("What?!?! No way."),
            "What&ᓷ&&ᓴ&&ᓷ&! No way."
        );
        assert_eq!(mask_continuous_punctuation("Stop!!!"), "Stop&ᓴ&&ᓴ&!");
    }

    #[test]
    fn test_short_runs_are_left_for_double_rules() {
        assert_eq!(mask_continuous_punctuation("Really?! Yes."), "Really?! Yes.");
    }

    #[test]
    fn test_double_punctuation() {
        assert_eq!(
            double_punctuation_rules().apply("Really?! Yes!! Why?? No!?").unwrap(),
            "Really☉ Yes☄ Why☇ No☈"
        );
    }

    #[test]
    fn test_question_mark_before_quote() {
        assert_eq!(
            quotation_rules().apply(r#"She asked "why?" and left."#).unwrap(),
            "She asked \"why&ᓷ&\" and left."
        );
    }

    #[test]
    fn test_exclamation_mid_sentence() {
        assert_eq!(
            quotation_rules().apply("Wow! that was close.").unwrap(),
            "Wow&ᓴ& that was close."
        );
        assert_eq!(
            quotation_rules().apply("Hey!, you there.").unwrap(),
            "Hey&ᓴ&, you there."
        );
    }

    #[test]
    fn test_exclamation_before_capital_is_kept() {
        assert_eq!(
            quotation_rules().apply("Wow! That was close.").unwrap(),
            "Wow! That was close."
        );
    }

    #[test]
    fn test_newline_rule() {
        assert_eq!(newline_rule().apply("one\ntwo\r\nthree").unwrap(), "oneȹtwo\rȹthree");
    }
}
