//! Rule engine
//!
//! A [`Rule`] pairs a pattern with a literal replacement. Applying a rule
//! rewrites the pattern's capture group (or the whole match when the pattern
//! has none) and rescans until the pattern no longer matches.

use std::ops::Range;

use regex::Regex;

use crate::error::{Error, Result};

/// A pattern whose capture group is rewritten to a literal string
#[derive(Debug, Clone)]
pub struct Rule {
    name: String,
    pattern: Regex,
    replacement: String,
}

impl Rule {
    /// Compile a rule. The pattern may define at most one capture group.
    pub fn new(
        name: impl Into<String>,
        pattern: &str,
        replacement: impl Into<String>,
    ) -> Result<Self> {
        let name = name.into();
        let pattern = Regex::new(pattern).map_err(|e| Error::InvalidRule {
            rule: name.clone(),
            reason: e.to_string(),
        })?;

        // captures_len counts the implicit whole-match group
        let groups = pattern.captures_len() - 1;
        if groups > 1 {
            return Err(Error::InvalidRule {
                rule: name,
                reason: format!("expected at most one capture group, found {groups}"),
            });
        }

        Ok(Self {
            name,
            pattern,
            replacement: replacement.into(),
        })
    }

    /// Compile one of the crate's own rules
    ///
    /// # Panics
    ///
    /// Panics if the pattern is malformed.
    pub(crate) fn builtin(name: &str, pattern: &str, replacement: &str) -> Self {
        match Self::new(name, pattern, replacement) {
            Ok(rule) => rule,
            Err(e) => panic!("built-in rule is malformed: {e}"),
        }
    }

    /// Diagnostic name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Source of the pattern
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Literal written over each captured region
    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// Whether the rule would change `text`
    pub fn is_match(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }

    /// Rewrite every match, rescanning after each replacement
    ///
    /// Each rescan resumes at the start of the previous match, since a
    /// replacement never creates a match that begins before it. Text in
    /// front of the cursor still counts as context for `^`, `\b` and the
    /// like. A well-formed rule stops matching at a position once it has been
    /// applied there, so the number of applications is bounded by the input
    /// length. Exceeding that bound yields [`Error::NonTerminatingRule`].
    pub fn apply(&self, text: &str) -> Result<String> {
        let limit = text.len() + 1;
        let mut text = text.to_string();
        let mut iterations = 0;
        let mut cursor = 0;

        while let Some((start, range)) = self.target(&text, cursor)? {
            if iterations == limit {
                return Err(Error::NonTerminatingRule {
                    rule: self.name.clone(),
                    iterations,
                });
            }
            text.replace_range(range, &self.replacement);
            cursor = start;
            iterations += 1;
        }

        if iterations > 0 {
            log::trace!("rule '{}' applied {} time(s)", self.name, iterations);
        }
        Ok(text)
    }

    /// Start of the first match at or after `from`, with the byte range to
    /// rewrite
    fn target(&self, text: &str, from: usize) -> Result<Option<(usize, Range<usize>)>> {
        let Some(captures) = self.pattern.captures_at(text, from) else {
            return Ok(None);
        };
        let Some(found) = captures.get(0) else {
            return Ok(None);
        };

        if self.pattern.captures_len() == 1 {
            return Ok(Some((found.start(), found.range())));
        }

        match captures.get(1) {
            Some(group) => Ok(Some((found.start(), group.range()))),
            None => Err(Error::InvalidRule {
                rule: self.name.clone(),
                reason: "pattern matched without its capture group".to_string(),
            }),
        }
    }
}

/// An ordered, immutable sequence of rules applied one after another
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Create a rule set; rules run in the given order
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Apply every rule in order
    pub fn apply(&self, text: &str) -> Result<String> {
        self.rules
            .iter()
            .try_fold(text.to_string(), |text, rule| rule.apply(&text))
    }

    /// Rules in application order
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Number of rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the set holds no rules
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl FromIterator<Rule> for RuleSet {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replaces_only_capture_group() {
        let rule = Rule::new("period_before_number", r"(\.)\d", "∯").unwrap();
        assert_eq!(rule.apply("Pi is 3.14159.").unwrap(), "Pi is 3∯14159.");
    }

    #[test]
    fn test_repeats_until_no_match() {
        let rule = Rule::new("period_before_number", r"(\.)\d", "∯").unwrap();
        assert_eq!(rule.apply("1.2.3.4").unwrap(), "1∯2∯3∯4");
    }

    #[test]
    fn test_neighbouring_matches_share_context() {
        // The space closing one match opens the next
        let rule = Rule::new("single_initial", r"\s[A-Z](\.)\s", "∯").unwrap();
        assert_eq!(rule.apply("a B. C. D. e").unwrap(), "a B∯ C∯ D∯ e");
    }

    #[test]
    fn test_anchor_sees_text_before_cursor() {
        let rule = Rule::new("leading_period", r"(?:^|[^.])(\.\.\.)", "ƪ").unwrap();
        assert_eq!(rule.apply("...a...b").unwrap(), "ƪaƪb");
    }

    #[test]
    fn test_many_matches_in_long_text() {
        let text = "x 1.2 ".repeat(20_000);
        let rule = Rule::new("period_before_number", r"(\.)\d", "∯").unwrap();
        let masked = rule.apply(&text).unwrap();
        assert_eq!(masked, "x 1∯2 ".repeat(20_000));
    }

    #[test]
    fn test_whole_match_without_group() {
        let rule = Rule::new("three_periods", r"\.\.\.", "ƪ").unwrap();
        assert_eq!(rule.apply("Hmm... ok... fine").unwrap(), "Hmmƪ okƪ fine");
    }

    #[test]
    fn test_no_match_returns_input() {
        let rule = Rule::new("period_before_number", r"(\.)\d", "∯").unwrap();
        assert_eq!(rule.apply("No numbers here.").unwrap(), "No numbers here.");
        assert_eq!(rule.apply("").unwrap(), "");
    }

    #[test]
    fn test_multibyte_text_around_capture() {
        let rule = Rule::new("period_before_number", r"(\.)\d", "∯").unwrap();
        assert_eq!(rule.apply("価格は3.5円です。").unwrap(), "価格は3∯5円です。");
    }

    #[test]
    fn test_rejects_multiple_capture_groups() {
        let err = Rule::new("possessive", r"(\.)'s\s|(\.)'s$", "∯").unwrap_err();
        match err {
            Error::InvalidRule { rule, reason } => {
                assert_eq!(rule, "possessive");
                assert!(reason.contains("found 2"));
            }
            other => panic!("Expected InvalidRule, got {other:?}"),
        }
    }

    #[test]
    fn test_rejects_invalid_regex() {
        let err = Rule::new("broken", r"(\.", "∯").unwrap_err();
        assert!(matches!(err, Error::InvalidRule { .. }));
    }

    #[test]
    fn test_non_terminating_rule_fails_loudly() {
        // Replacement reintroduces the match at the same position
        let rule = Rule::new("self_feeding", r"(a)", "a").unwrap();
        let err = rule.apply("banana").unwrap_err();
        match err {
            Error::NonTerminatingRule { rule, iterations } => {
                assert_eq!(rule, "self_feeding");
                assert_eq!(iterations, "banana".len() + 1);
            }
            other => panic!("Expected NonTerminatingRule, got {other:?}"),
        }
    }

    #[test]
    fn test_growing_replacement_is_bounded() {
        let rule = Rule::new("grows", r"(x)", "xx").unwrap();
        assert!(matches!(
            rule.apply("x"),
            Err(Error::NonTerminatingRule { .. })
        ));
    }

    #[test]
    fn test_unmatched_optional_group_is_rejected() {
        let rule = Rule::new("optional", r"(\.)?x", "∯").unwrap();
        assert!(matches!(rule.apply("x"), Err(Error::InvalidRule { .. })));
    }

    #[test]
    fn test_rule_set_applies_in_order() {
        let set: RuleSet = vec![
            Rule::new("a_to_b", r"(a)", "b").unwrap(),
            Rule::new("b_to_c", r"(b)", "c").unwrap(),
        ]
        .into_iter()
        .collect();

        assert_eq!(set.len(), 2);
        assert_eq!(set.apply("aab").unwrap(), "ccc");
    }

    #[test]
    fn test_empty_rule_set_is_identity() {
        let set = RuleSet::default();
        assert!(set.is_empty());
        assert_eq!(set.apply("unchanged").unwrap(), "unchanged");
    }
}
