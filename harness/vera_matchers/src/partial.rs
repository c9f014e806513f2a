//! Structural partial matching.
//!
//! The relaxed-matching policy: every key the expected side names must be
//! present and match on the received side; received keys the expected side
//! does not name are ignored at every depth. Mismatch is a returned
//! `Discrepancy`, not an unwind, so callers can probe without cost on the
//! passing path.

use vera_value::Value;

use crate::errors::{
    kind_mismatch, length_mismatch, missing_key, predicate_failed, value_mismatch, Discrepancy,
};

/// Check `actual` against `expected`, superset-tolerant on the actual side.
///
/// Matching rules, by the expected value's shape:
/// - a predicate matches when `satisfied_by` holds;
/// - a mapping matches when every expected key is present in the actual
///   mapping and matches recursively;
/// - a list matches element-wise and requires equal length;
/// - anything else is a leaf and matches by structural equality.
pub fn partial_match(actual: &Value, expected: &Value) -> Result<(), Discrepancy> {
    match expected {
        Value::Predicate(predicate) => {
            if predicate.satisfied_by(actual) {
                Ok(())
            } else {
                Err(predicate_failed(predicate))
            }
        }
        Value::Map(expected_map) => {
            let Some(actual_map) = actual.as_map() else {
                return Err(kind_mismatch("object", actual.type_name()));
            };
            for (key, expected_value) in expected_map.iter() {
                match actual_map.get(key) {
                    None => return Err(missing_key(key)),
                    Some(actual_value) => partial_match(actual_value, expected_value)
                        .map_err(|d| d.prefixed(key))?,
                }
            }
            Ok(())
        }
        Value::List(expected_items) => {
            let Some(actual_items) = actual.as_list() else {
                return Err(kind_mismatch("list", actual.type_name()));
            };
            if actual_items.len() != expected_items.len() {
                return Err(length_mismatch(expected_items.len(), actual_items.len()));
            }
            for (index, (actual_item, expected_item)) in
                actual_items.iter().zip(expected_items.iter()).enumerate()
            {
                partial_match(actual_item, expected_item)
                    .map_err(|d| d.prefixed(index.to_string()))?;
            }
            Ok(())
        }
        leaf => {
            if actual.equals(leaf) {
                Ok(())
            } else {
                Err(value_mismatch(leaf, actual))
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "tests can panic")]
mod tests {
    use super::*;
    use crate::errors::DiscrepancyKind;
    use vera_value::{PredicateValue, PropMap};

    fn map_of(entries: &[(&str, Value)]) -> Value {
        let mut map = PropMap::new();
        for (name, value) in entries {
            map.insert(*name, value.clone());
        }
        Value::map(map)
    }

    #[test]
    fn extra_actual_keys_are_ignored() {
        let actual = map_of(&[
            ("name", Value::string("Error")),
            ("message", Value::string("boom")),
            ("extra", Value::int(1)),
        ]);
        let expected = map_of(&[("message", Value::string("boom"))]);
        assert!(partial_match(&actual, &expected).is_ok());
    }

    #[test]
    fn missing_expected_key_is_reported() {
        let actual = map_of(&[("name", Value::string("Error"))]);
        let expected = map_of(&[("message", Value::string("boom"))]);
        let discrepancy = partial_match(&actual, &expected).unwrap_err();
        assert_eq!(
            discrepancy.kind,
            DiscrepancyKind::MissingKey {
                key: "message".to_string()
            }
        );
    }

    #[test]
    fn nested_mappings_match_partially() {
        let actual = map_of(&[(
            "cause",
            map_of(&[("code", Value::int(2)), ("fatal", Value::Bool(true))]),
        )]);
        let expected = map_of(&[("cause", map_of(&[("code", Value::int(2))]))]);
        assert!(partial_match(&actual, &expected).is_ok());

        let wrong = map_of(&[("cause", map_of(&[("code", Value::int(3))]))]);
        let discrepancy = partial_match(&actual, &wrong).unwrap_err();
        assert_eq!(discrepancy.path, vec!["cause".to_string(), "code".to_string()]);
    }

    #[test]
    fn lists_require_equal_length() {
        let actual = Value::list(vec![Value::int(1), Value::int(2)]);
        let expected = Value::list(vec![Value::int(1)]);
        let discrepancy = partial_match(&actual, &expected).unwrap_err();
        assert_eq!(
            discrepancy.kind,
            DiscrepancyKind::LengthMismatch {
                expected: 1,
                received: 2
            }
        );
    }

    #[test]
    fn predicates_match_by_criterion() {
        let expected = map_of(&[(
            "message",
            Value::predicate(PredicateValue::StringContaining("mess".to_string())),
        )]);
        let actual = map_of(&[("message", Value::string("Test message"))]);
        assert!(partial_match(&actual, &expected).is_ok());

        let wrong = map_of(&[("message", Value::string("nope"))]);
        assert!(partial_match(&wrong, &expected).is_err());
    }

    #[test]
    fn non_mapping_actual_is_a_kind_mismatch() {
        let expected = map_of(&[("message", Value::string("boom"))]);
        let discrepancy = partial_match(&Value::string("boom"), &expected).unwrap_err();
        assert_eq!(
            discrepancy.kind,
            DiscrepancyKind::KindMismatch {
                expected: "object",
                received: "string"
            }
        );
    }
}
