//! Comparable projection of error values.

use vera_value::{PropMap, Value};

/// Flatten an error into a plain mapping ready for partial matching.
///
/// The mapping is seeded with `name`, `message`, and `stack` (in that
/// order), then every custom property is copied over it in insertion order,
/// so custom properties, including ones literally named `name`, `message`,
/// or `stack`, override the seeded defaults. Non-error values are returned
/// unchanged: expected shapes are already mappings, and non-error received
/// values are compared as-is.
pub fn project_to_comparable(value: &Value) -> Value {
    let Some(error) = value.as_error() else {
        return value.clone();
    };
    let mut map = PropMap::new();
    map.insert("name", Value::string(error.name()));
    map.insert("message", Value::string(error.message()));
    map.insert("stack", Value::string(error.render_stack()));
    for (key, property) in error.properties().iter() {
        map.insert(key, property.clone());
    }
    Value::map(map)
}
