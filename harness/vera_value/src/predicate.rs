//! Asymmetric predicates.
//!
//! A predicate placed in an expected shape matches a received value by
//! criterion instead of by equality. The partial-match primitive checks
//! `satisfied_by` whenever the expected side is a predicate.

use std::fmt;

use crate::Value;

/// A value-position predicate for relaxed matching.
#[derive(Clone, Debug, PartialEq)]
pub enum PredicateValue {
    /// Matches any value, including `undefined`.
    Anything,
    /// Matches a string value containing the given substring.
    StringContaining(String),
    /// Matches any value of the given type name (see `Value::type_name`).
    HasType(String),
}

impl PredicateValue {
    /// Whether the received value satisfies this predicate.
    pub fn satisfied_by(&self, received: &Value) -> bool {
        match self {
            PredicateValue::Anything => true,
            PredicateValue::StringContaining(needle) => received
                .as_str()
                .is_some_and(|s| s.contains(needle.as_str())),
            PredicateValue::HasType(type_name) => received.type_name() == type_name,
        }
    }
}

impl fmt::Display for PredicateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PredicateValue::Anything => write!(f, "Anything"),
            PredicateValue::StringContaining(needle) => {
                write!(f, "StringContaining(\"{needle}\")")
            }
            PredicateValue::HasType(type_name) => write!(f, "HasType(\"{type_name}\")"),
        }
    }
}
