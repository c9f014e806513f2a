//! Human-readable classification of received values.

use vera_value::Value;

/// Describe a value for the type-report sentence.
///
/// Cosmetic only: classification never affects pass/fail. The rules are
/// checked in order; short strings are shown verbatim (quoted), long ones
/// are summarized.
pub fn classify_value(value: &Value) -> String {
    match value {
        Value::Error(_) => "an Error".to_string(),
        Value::List(items) if items.is_empty() => "an empty array".to_string(),
        Value::List(_) => "an Array".to_string(),
        Value::Undefined => "undefined".to_string(),
        Value::Null => "null".to_string(),
        Value::Str(s) if s.is_empty() => "an empty string".to_string(),
        Value::Str(s) if s.chars().count() < 20 => format!("\"{}\"", &**s),
        Value::Str(_) => "a string".to_string(),
        Value::Map(_) => "an object".to_string(),
        Value::Symbol(s) => format!("a symbol ({s})"),
        Value::Int(_) | Value::Float(_) | Value::Bool(_) => value.to_string(),
        other => with_indefinite_article(other.type_name()),
    }
}

/// Prefix a type name with `a`/`an`, treating a leading vowel or `h` as
/// `an`.
fn with_indefinite_article(type_name: &str) -> String {
    let article = if type_name.starts_with(['a', 'e', 'i', 'o', 'u', 'h']) {
        "an"
    } else {
        "a"
    };
    format!("{article} {type_name}")
}
