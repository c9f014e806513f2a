//! Splitting a received mapping into matched-on and ignored properties.

use vera_value::{PropMap, Value};

/// The reporting split of a received comparable.
///
/// `diffable` holds only the received properties the expected shape names;
/// `additional` holds every other received property. Together they cover the
/// received mapping's keys exactly, with no overlap. When the received
/// comparable is not a mapping there is nothing to partition: `diffable` is
/// the raw value and `additional` is `None`.
#[derive(Clone, Debug, PartialEq)]
pub struct DiffPartition {
    /// The received value restricted to expected keys (or the raw received
    /// value when it is not a mapping).
    pub diffable: Value,
    /// Received properties the expected shape does not name. Ignored for
    /// matching, reported separately.
    pub additional: Option<PropMap>,
}

/// Partition a received comparable against the expected shape.
///
/// Expected keys absent from the received mapping are left out of both
/// sides; the downstream diff surfaces the omission.
pub fn partition_for_diff(comparable_received: &Value, expected: &PropMap) -> DiffPartition {
    let Some(received) = comparable_received.as_map() else {
        return DiffPartition {
            diffable: comparable_received.clone(),
            additional: None,
        };
    };

    let mut diffable = PropMap::new();
    let mut additional = PropMap::new();
    for (key, value) in received.iter() {
        if expected.contains_key(key) {
            diffable.insert(key, value.clone());
        } else {
            additional.insert(key, value.clone());
        }
    }
    DiffPartition {
        diffable: Value::map(diffable),
        additional: Some(additional),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "tests can panic")]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn props(entries: &[(&str, Value)]) -> PropMap {
        let mut map = PropMap::new();
        for (name, value) in entries {
            map.insert(*name, value.clone());
        }
        map
    }

    #[test]
    fn splits_received_keys_exactly() {
        let received = Value::map(props(&[
            ("name", Value::string("Error")),
            ("message", Value::string("boom")),
            ("foo", Value::string("v")),
        ]));
        let expected = props(&[("message", Value::string("other"))]);

        let partition = partition_for_diff(&received, &expected);
        let diffable = partition.diffable.as_map().unwrap();
        let additional = partition.additional.unwrap();

        assert_eq!(diffable.keys().collect::<Vec<_>>(), vec!["message"]);
        assert_eq!(additional.keys().collect::<Vec<_>>(), vec!["name", "foo"]);
        assert_eq!(diffable.get("message"), Some(&Value::string("boom")));
    }

    #[test]
    fn expected_key_absent_from_received_appears_nowhere() {
        let received = Value::map(props(&[("name", Value::string("Error"))]));
        let expected = props(&[("message", Value::string("boom"))]);

        let partition = partition_for_diff(&received, &expected);
        let diffable = partition.diffable.as_map().unwrap();
        let additional = partition.additional.unwrap();

        assert!(diffable.is_empty());
        assert_eq!(additional.keys().collect::<Vec<_>>(), vec!["name"]);
    }

    #[test]
    fn non_mapping_received_is_passed_through() {
        let expected = props(&[("message", Value::string("boom"))]);
        let partition = partition_for_diff(&Value::string("raised"), &expected);
        assert_eq!(partition.diffable, Value::string("raised"));
        assert_eq!(partition.additional, None);
    }
}
