//! Configuration handling for `substitute-core`.
//!
//! This module defines [`RuleSource`], the crate's view of the rule
//! configuration handed over by the host. The host owns config-file parsing
//! and delivers an already-parsed [`serde_yml::Value`]; this module only
//! decides which of the two accepted shapes that value has and destructures
//! it into ordered `(pattern, replacement)` string pairs.
//!
//! Two shapes are accepted:
//!
//! * a sequence of single-entry mappings (the preferred shape, order is
//!   authoritative), and
//! * a single mapping from pattern to replacement (deprecated, because a
//!   plain mapping carries no order guarantee for overlapping rules).
//!
//! Anything else is a configuration error surfaced to the host at startup.
//!
//! License: MIT OR Apache-2.0

use log::debug;
use serde::{Deserialize, Deserializer};
use serde_yml::Value;

use crate::errors::SubstituteError;

/// The parsed rule configuration, tagged by the shape it arrived in.
///
/// Both variants carry the flattened `(pattern, replacement)` pairs; the
/// variant records whether the order of those pairs is trustworthy. The
/// compiler treats the two identically apart from the deprecation warning
/// it emits for [`RuleSource::Mapping`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleSource {
    /// Deprecated single-mapping shape. Pairs appear in whatever order the
    /// host's parsed mapping yields, which is not guaranteed to match the
    /// order the user wrote.
    Mapping(Vec<(String, String)>),
    /// Sequence of single-entry mappings. Pair order is exactly the
    /// authored order.
    OrderedPairs(Vec<(String, String)>),
}

impl RuleSource {
    /// Resolves the shape of an already-parsed configuration value.
    ///
    /// Returns [`SubstituteError::UnsupportedShape`] for any value that is
    /// neither of the two accepted shapes, and
    /// [`SubstituteError::InvalidPair`] for an entry that cannot be
    /// destructured into two strings.
    pub fn from_value(value: &Value) -> Result<Self, SubstituteError> {
        match value {
            Value::Mapping(mapping) => {
                debug!(
                    "Detected deprecated mapping shape with {} entries.",
                    mapping.len()
                );
                let pairs = mapping
                    .iter()
                    .map(|(key, value)| destructure_pair(key, value))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(RuleSource::Mapping(pairs))
            }
            Value::Sequence(entries) => {
                debug!("Detected ordered shape with {} entries.", entries.len());
                let mut pairs = Vec::with_capacity(entries.len());
                for entry in entries {
                    // Each entry must be a mapping with exactly one pair.
                    let pair = match entry {
                        Value::Mapping(m) if m.len() == 1 => m.iter().next(),
                        _ => None,
                    };
                    let (key, value) =
                        pair.ok_or_else(|| SubstituteError::InvalidPair(describe_value(entry)))?;
                    pairs.push(destructure_pair(key, value)?);
                }
                Ok(RuleSource::OrderedPairs(pairs))
            }
            other => Err(SubstituteError::UnsupportedShape(describe_value(other))),
        }
    }

    /// The flattened `(pattern, replacement)` pairs, in processing order.
    pub fn pairs(&self) -> &[(String, String)] {
        match self {
            RuleSource::Mapping(pairs) | RuleSource::OrderedPairs(pairs) => pairs,
        }
    }

    /// Whether this configuration arrived in the deprecated mapping shape.
    pub fn is_deprecated_shape(&self) -> bool {
        matches!(self, RuleSource::Mapping(_))
    }
}

impl<'de> Deserialize<'de> for RuleSource {
    /// Deserializes through the generic [`Value`] tree, so a host that
    /// deserializes a larger configuration document can pull this section
    /// out directly.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        RuleSource::from_value(&value).map_err(serde::de::Error::custom)
    }
}

/// Destructures one mapping entry into a `(pattern, replacement)` string pair.
fn destructure_pair(key: &Value, value: &Value) -> Result<(String, String), SubstituteError> {
    match (key, value) {
        (Value::String(pattern), Value::String(replacement)) => {
            Ok((pattern.clone(), replacement.clone()))
        }
        _ => Err(SubstituteError::InvalidPair(format!(
            "{}: {}",
            describe_value(key),
            describe_value(value)
        ))),
    }
}

/// A short human-readable description of a value's kind, for error messages.
fn describe_value(value: &Value) -> String {
    match value {
        Value::Null => "a null".to_string(),
        Value::Bool(b) => format!("a boolean ({b})"),
        Value::Number(n) => format!("a number ({n})"),
        Value::String(s) => format!("a string (\"{s}\")"),
        Value::Sequence(_) => "a nested sequence".to_string(),
        Value::Mapping(m) => format!("a mapping with {} entries", m.len()),
        Value::Tagged(t) => format!("a tagged value ({})", t.tag),
    }
}
