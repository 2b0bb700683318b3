// substitute-core/tests/substitute_tests.rs
//! Integration tests for the first-match-wins substitution engine.

use anyhow::Result;
use test_log::test;

use substitute_core::{FieldFunction, RuleSource, Substituter};

fn substituter(pairs: &[(&str, &str)]) -> Substituter {
    let source = RuleSource::OrderedPairs(
        pairs
            .iter()
            .map(|(p, r)| (p.to_string(), r.to_string()))
            .collect(),
    );
    Substituter::new(&source).unwrap()
}

#[test]
fn test_single_rule_case_insensitive_match() {
    let s = substituter(&[("foo", "bar")]);
    assert_eq!(s.substitute(Some("Foobaz")), "barbaz");
}

#[test]
fn test_first_matching_rule_wins() {
    // Both rules would match; only the first is applied, the second is
    // never tried for this call.
    let s = substituter(&[("^the ", ""), ("foo", "bar")]);
    assert_eq!(s.substitute(Some("The Foo Band")), "Foo Band");
}

#[test]
fn test_no_match_returns_input_unchanged() {
    let s = substituter(&[("xyz", "q")]);
    assert_eq!(s.substitute(Some("abc")), "abc");
}

#[test]
fn test_empty_rule_list_is_identity() {
    let s = substituter(&[]);
    assert_eq!(s.substitute(Some("anything")), "anything");
}

#[test]
fn test_empty_input_short_circuits() {
    let s = substituter(&[("a", "1")]);
    assert_eq!(s.substitute(Some("")), "");
}

#[test]
fn test_absent_input_short_circuits() {
    let s = substituter(&[("a", "1")]);
    assert_eq!(s.substitute(None), "");
    // Even a match-everything rule is never consulted.
    let s = substituter(&[("", "x")]);
    assert_eq!(s.substitute(None), "");
}

#[test]
fn test_case_insensitive_across_variants() {
    let s = substituter(&[("abc", "#")]);
    assert_eq!(s.substitute(Some("abc")), "#");
    assert_eq!(s.substitute(Some("ABC")), "#");
    assert_eq!(s.substitute(Some("AbC")), "#");
}

#[test]
fn test_rule_order_changes_output_for_overlapping_patterns() {
    let forward = substituter(&[("ab", "X"), ("b", "Y")]);
    let reversed = substituter(&[("b", "Y"), ("ab", "X")]);
    assert_eq!(forward.substitute(Some("ab")), "X");
    assert_eq!(reversed.substitute(Some("ab")), "aY");
}

#[test]
fn test_winning_rule_replaces_every_occurrence() {
    let s = substituter(&[("o", "0"), ("f", "F")]);
    // All occurrences of the winning rule are replaced; the second rule is
    // skipped even though it would also match.
    assert_eq!(s.substitute(Some("foo Food")), "f00 F00d");
}

#[test]
fn test_substitute_is_not_idempotent_by_design() {
    // One rule application per call: a rule whose output a LATER rule
    // matches produces a different result when run a second time. This is
    // first-match-wins, not convergence to a fixed point.
    let s = substituter(&[("ab", "b"), ("^b$", "done")]);
    let once = s.substitute(Some("ab"));
    let twice = s.substitute(Some(&once));
    assert_eq!(once, "b");
    assert_eq!(twice, "done");
    assert_ne!(once, twice);
}

#[test]
fn test_capture_groups_in_replacement() {
    let s = substituter(&[(r"^(.+), (The|A)$", "$2 $1")]);
    assert_eq!(s.substitute(Some("Beatles, The")), "The Beatles");
    assert_eq!(s.substitute(Some("beatles, the")), "the beatles");
}

#[test]
fn test_deprecated_mapping_shape_end_to_end() -> Result<()> {
    let value: serde_yml::Value = serde_yml::from_str(r#"{"a": "1", "b": "2"}"#)?;
    let substituter = Substituter::from_value(&value)?;
    assert_eq!(substituter.substitute(Some("ab")), "1b");
    Ok(())
}

#[test]
fn test_field_function_seam() {
    // A host registers the engine in its own name->function table and calls
    // through the trait object.
    let s = substituter(&[("feat\\.", "ft.")]);
    let func: Box<dyn FieldFunction> = Box::new(s);
    assert_eq!(func.name(), "substitute");
    assert_eq!(func.call(Some("A Feat. B")), "A ft. B");
    assert_eq!(func.call(None), "");
}

#[test]
fn test_shared_across_threads() {
    let s = std::sync::Arc::new(substituter(&[("foo", "bar")]));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let s = std::sync::Arc::clone(&s);
            std::thread::spawn(move || s.substitute(Some("FOO fighters")))
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), "bar fighters");
    }
}
