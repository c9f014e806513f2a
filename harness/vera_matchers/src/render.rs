//! Reference implementations of the host framework's rendering utilities.
//!
//! The matchers only reach these through the `Harness` trait; a host with
//! its own colorized renderer can substitute all of them.

use rustc_hash::FxHashSet;
use vera_value::{PropMap, Value};

use crate::partial::partial_match;

/// Single-line rendering of a value.
pub fn stringify(value: &Value) -> String {
    value.to_string()
}

/// Render the hint line identifying the matcher and its modifiers.
pub fn matcher_hint(matcher_name: &str, negated: bool, rejects: bool) -> String {
    let mut hint = String::from("expect(received).");
    if rejects {
        hint.push_str("rejects.");
    }
    if negated {
        hint.push_str("not.");
    }
    hint.push_str(matcher_name);
    hint.push_str("(expected)");
    hint
}

/// Structural diff between an expected and a received value.
///
/// Returns `None` when the values are equal. Mappings render as a braced
/// body over the sorted key union: unchanged keys as context lines,
/// differing keys as paired `-`/`+` lines, one-sided keys as a bare `-` or
/// `+` line. Anything else falls back to two labeled lines.
pub fn diff(expected: &Value, received: &Value) -> Option<String> {
    if expected.equals(received) {
        return None;
    }
    match (expected.as_map(), received.as_map()) {
        (Some(expected_map), Some(received_map)) => Some(map_diff(expected_map, received_map)),
        _ => Some(format!("Expected: {expected}\nReceived: {received}")),
    }
}

fn map_diff(expected: &PropMap, received: &PropMap) -> String {
    let mut seen = FxHashSet::default();
    let mut keys: Vec<&str> = Vec::new();
    for key in expected.keys().chain(received.keys()) {
        if seen.insert(key) {
            keys.push(key);
        }
    }
    keys.sort_unstable();

    let mut body: Vec<String> = Vec::new();
    for key in keys {
        match (expected.get(key), received.get(key)) {
            (Some(exp), Some(rec)) => {
                if partial_match(rec, exp).is_ok() {
                    body.push(format!("    {key}: {rec}"));
                } else {
                    body.push(format!("-   {key}: {exp}"));
                    body.push(format!("+   {key}: {rec}"));
                }
            }
            (Some(exp), None) => body.push(format!("-   {key}: {exp}")),
            (None, Some(rec)) => body.push(format!("+   {key}: {rec}")),
            (None, None) => {}
        }
    }

    let removed = body.iter().filter(|line| line.starts_with('-')).count();
    let added = body.iter().filter(|line| line.starts_with('+')).count();

    let mut lines = vec![
        format!("- Expected  - {removed}"),
        format!("+ Received  + {added}"),
        String::new(),
        "  {".to_string(),
    ];
    lines.extend(body);
    lines.push("  }".to_string());
    lines.join("\n")
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "tests can panic")]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use vera_value::PredicateValue;

    fn props(entries: &[(&str, Value)]) -> PropMap {
        let mut map = PropMap::new();
        for (name, value) in entries {
            map.insert(*name, value.clone());
        }
        map
    }

    #[test]
    fn hint_lists_modifiers_in_order() {
        assert_eq!(
            matcher_hint("is_error_matching", false, false),
            "expect(received).is_error_matching(expected)"
        );
        assert_eq!(
            matcher_hint("is_error_matching", false, true),
            "expect(received).rejects.is_error_matching(expected)"
        );
        assert_eq!(
            matcher_hint("throws_error_matching", true, true),
            "expect(received).rejects.not.throws_error_matching(expected)"
        );
    }

    #[test]
    fn equal_values_have_no_diff() {
        assert_eq!(diff(&Value::int(1), &Value::int(1)), None);
        let a = Value::map(props(&[("k", Value::int(1))]));
        let b = Value::map(props(&[("k", Value::int(1))]));
        assert_eq!(diff(&a, &b), None);
    }

    #[test]
    fn map_diff_pairs_differing_keys() {
        let expected = Value::map(props(&[("message", Value::string("y"))]));
        let received = Value::map(props(&[("message", Value::string("x"))]));
        let rendered = diff(&expected, &received).unwrap();
        assert_eq!(
            rendered,
            "- Expected  - 1\n\
             + Received  + 1\n\
             \n  {\n\
             -   message: \"y\"\n\
             +   message: \"x\"\n  }"
        );
    }

    #[test]
    fn map_diff_shows_missing_keys_as_removed_lines() {
        let expected = Value::map(props(&[("message", Value::string("boom"))]));
        let received = Value::map(props(&[]));
        let rendered = diff(&expected, &received).unwrap();
        assert!(rendered.contains("-   message: \"boom\""));
        assert!(rendered.contains("- Expected  - 1"));
        assert!(rendered.contains("+ Received  + 0"));
    }

    #[test]
    fn map_diff_keeps_matching_keys_as_context() {
        let expected = Value::map(props(&[
            ("name", Value::string("E")),
            ("message", Value::string("y")),
        ]));
        let received = Value::map(props(&[
            ("name", Value::string("E")),
            ("message", Value::string("x")),
        ]));
        let rendered = diff(&expected, &received).unwrap();
        assert!(rendered.contains("    name: \"E\""));
        assert!(rendered.contains("-   message: \"y\""));
        assert!(rendered.contains("+   message: \"x\""));
    }

    #[test]
    fn satisfied_predicates_render_as_context() {
        let expected = Value::map(props(&[
            (
                "message",
                Value::predicate(PredicateValue::StringContaining("boo".to_string())),
            ),
            ("name", Value::string("E")),
        ]));
        let received = Value::map(props(&[
            ("message", Value::string("boom")),
            ("name", Value::string("F")),
        ]));
        let rendered = diff(&expected, &received).unwrap();
        assert!(rendered.contains("    message: \"boom\""));
        assert!(rendered.contains("-   name: \"E\""));
    }

    #[test]
    fn non_mapping_sides_fall_back_to_labeled_lines() {
        let expected = Value::map(props(&[("k", Value::int(1))]));
        let rendered = diff(&expected, &Value::string("raised")).unwrap();
        assert_eq!(rendered, "Expected: {k: 1}\nReceived: \"raised\"");
    }
}
