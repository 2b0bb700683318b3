//! The substitution engine and the host-facing field-function seam.
//!
//! [`Substituter`] owns a compiled rule list and applies it with
//! first-match-wins semantics: rules are tried in configuration order, and
//! the first rule whose pattern matches anywhere in the input is applied
//! across the whole input. Later rules are never consulted for that call,
//! and no rule output is fed back into another rule.
//!
//! The [`FieldFunction`] trait is the contract a host templating system
//! calls through. The host owns the table mapping function names to
//! implementations and wires a `Substituter` in under its advertised name;
//! this crate keeps no registration state of its own.
//!
//! License: MIT OR APACHE 2.0

use anyhow::{Context, Result};
use log::debug;
use serde_yml::Value;

use crate::compiler::{compile_rules, SubstituteRules};
use crate::config::RuleSource;

/// A named, pure string-transformation function callable by a host
/// templating system.
///
/// Implementations must be safe to call concurrently: the host may resolve
/// many fields in parallel against the same function.
pub trait FieldFunction: Send + Sync {
    /// The name the host registers this function under.
    fn name(&self) -> &str;

    /// Transforms one field value. `None` means the field was absent.
    fn call(&self, text: Option<&str>) -> String;
}

/// Applies an ordered rule list to field values, first match wins.
///
/// Built once at startup from the host's parsed configuration and shared
/// read-only afterwards; `substitute` takes `&self` and touches no mutable
/// state, so a single instance serves any number of concurrent callers.
#[derive(Debug)]
pub struct Substituter {
    rules: SubstituteRules,
}

impl Substituter {
    /// Compiles a rule source into a ready-to-use engine.
    pub fn new(source: &RuleSource) -> Result<Self> {
        let rules = compile_rules(source).context("Failed to compile substitution rules")?;
        debug!("Substituter ready with {} rules.", rules.rules.len());
        Ok(Self { rules })
    }

    /// Resolves the configuration shape and compiles in one call.
    ///
    /// This is the usual entry point for a host holding the already-parsed
    /// configuration section for this plugin.
    pub fn from_value(value: &Value) -> Result<Self> {
        let source = RuleSource::from_value(value)
            .context("Invalid substitute configuration")?;
        Self::new(&source)
    }

    /// The compiled rule list, in priority order.
    pub fn rules(&self) -> &SubstituteRules {
        &self.rules
    }

    /// Rewrites `text` with the first matching rule.
    ///
    /// Absent or empty input returns `""` without consulting any rule. The
    /// first rule whose pattern matches is applied to every non-overlapping
    /// occurrence in the input and its result returned immediately. If no
    /// rule matches, the input comes back unchanged. One rule application
    /// per call: re-running on the output is not a fixed point in general.
    pub fn substitute(&self, text: Option<&str>) -> String {
        let text = match text {
            Some(t) if !t.is_empty() => t,
            _ => return String::new(),
        };
        for rule in &self.rules.rules {
            if rule.regex.is_match(text) {
                return rule
                    .regex
                    .replace_all(text, rule.replacement.as_str())
                    .into_owned();
            }
        }
        text.to_string()
    }
}

impl FieldFunction for Substituter {
    fn name(&self) -> &str {
        "substitute"
    }

    fn call(&self, text: Option<&str>) -> String {
        self.substitute(text)
    }
}
