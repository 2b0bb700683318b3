//! compiler.rs - Compiles rule configurations into ready-to-apply rule lists.
//!
//! This module converts a [`RuleSource`] into [`SubstituteRules`], an ordered
//! list of compiled case-insensitive regexes paired with their replacement
//! templates. Compilation runs once, at host startup; the result is immutable
//! and shared read-only for the rest of the process lifetime.
//!
//! License: MIT OR APACHE 2.0

use log::{debug, warn};
use regex::{Regex, RegexBuilder};

use crate::config::RuleSource;
use crate::errors::SubstituteError;

/// The side-by-side syntax contrast appended to the deprecation warning.
pub const DEPRECATION_NOTICE: &str = "
Old syntax:
  substitute:
    a: b
    c: d

New syntax:
  substitute:
    - a: b
    - c: d
";

/// A single compiled substitution rule.
///
/// Holds a compiled case-insensitive regular expression along with the
/// replacement template applied when the pattern matches. Replacement
/// templates may reference capture groups with `$1`/`${name}` syntax.
#[derive(Debug)]
pub struct SubstituteRule {
    /// The compiled case-insensitive pattern.
    pub regex: Regex,
    /// The replacement template for matches of this rule's pattern.
    pub replacement: String,
}

/// The ordered, immutable rule list used for one substitution pass.
///
/// Order is semantically significant: it is the priority among overlapping
/// patterns. Duplicates are preserved; the earlier rule always wins.
#[derive(Debug, Default)]
pub struct SubstituteRules {
    /// The rules, in configuration order.
    pub rules: Vec<SubstituteRule>,
}

/// Compiles a [`RuleSource`] into [`SubstituteRules`].
///
/// Emits a single warning when the deprecated mapping shape is detected,
/// then compiles every pair in order. Pattern errors are not skipped: they
/// are collected and returned as one configuration error so the host can
/// abort startup with the full picture.
pub fn compile_rules(source: &RuleSource) -> Result<SubstituteRules, SubstituteError> {
    if source.is_deprecated_shape() {
        warn!(
            "Unordered substitute configuration is deprecated, as it leads to \
             unpredictable behaviour on overlapping rules.\n{}",
            DEPRECATION_NOTICE
        );
    }

    let pairs = source.pairs();
    debug!("Starting compilation of {} substitution rules.", pairs.len());

    let mut rules = Vec::with_capacity(pairs.len());
    let mut compilation_errors = Vec::new();

    for (pattern, replacement) in pairs {
        debug!("Attempting to compile substitution pattern '{pattern}'.");
        match RegexBuilder::new(pattern).case_insensitive(true).build() {
            Ok(regex) => rules.push(SubstituteRule {
                regex,
                replacement: replacement.clone(),
            }),
            Err(e) => {
                compilation_errors.push(SubstituteError::PatternCompilation(pattern.clone(), e));
            }
        }
    }

    if !compilation_errors.is_empty() {
        let error_message = compilation_errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<String>>()
            .join("\n");
        return Err(SubstituteError::Fatal(format!(
            "Failed to compile {} substitution rule(s):\n{}",
            compilation_errors.len(),
            error_message
        )));
    }

    debug!("Finished compiling rules. Total compiled: {}.", rules.len());
    Ok(SubstituteRules { rules })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_preserves_order_and_duplicates() {
        let source = RuleSource::OrderedPairs(vec![
            ("foo".to_string(), "bar".to_string()),
            ("foo".to_string(), "baz".to_string()),
        ]);
        let compiled = compile_rules(&source).unwrap();
        assert_eq!(compiled.rules.len(), 2);
        assert_eq!(compiled.rules[0].replacement, "bar");
        assert_eq!(compiled.rules[1].replacement, "baz");
    }

    #[test]
    fn test_compile_reports_every_invalid_pattern() {
        let source = RuleSource::OrderedPairs(vec![
            ("(".to_string(), "a".to_string()),
            ("ok".to_string(), "b".to_string()),
            ("[".to_string(), "c".to_string()),
        ]);
        let err = compile_rules(&source).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("2 substitution rule(s)"));
        assert!(message.contains("'('"));
        assert!(message.contains("'['"));
    }

    #[test]
    fn test_deprecation_notice_contrasts_syntaxes() {
        assert!(DEPRECATION_NOTICE.contains("Old syntax:"));
        assert!(DEPRECATION_NOTICE.contains("New syntax:"));
        assert!(DEPRECATION_NOTICE.contains("- a: b"));
    }
}
