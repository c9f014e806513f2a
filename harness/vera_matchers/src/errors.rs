//! Error types for matcher evaluation.
//!
//! Two disjoint families:
//! - `ConfigError`: a programming-usage error (negated invocation). Raised
//!   before any matching runs and never reported as an assertion failure.
//! - `Discrepancy`: the structured mismatch result of the partial-match
//!   primitive. Callers probe for it and convert it to a boolean; it never
//!   escapes a matcher.

use std::fmt;

use vera_value::{PredicateValue, Value};

/// Typed category for a partial-match discrepancy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DiscrepancyKind {
    /// An expected key is absent from the received mapping.
    MissingKey { key: String },
    /// A leaf value differs from the expected literal.
    ValueMismatch { expected: String, received: String },
    /// A list has the wrong number of elements.
    LengthMismatch { expected: usize, received: usize },
    /// The received value has the wrong shape for the expected container.
    KindMismatch {
        expected: &'static str,
        received: &'static str,
    },
    /// An asymmetric predicate was not satisfied.
    PredicateFailed { predicate: String },
}

impl fmt::Display for DiscrepancyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingKey { key } => write!(f, "missing key: {key}"),
            Self::ValueMismatch { expected, received } => {
                write!(f, "expected {expected}, received {received}")
            }
            Self::LengthMismatch { expected, received } => {
                write!(f, "expected {expected} elements, received {received}")
            }
            Self::KindMismatch { expected, received } => {
                write!(f, "expected {expected}, received {received}")
            }
            Self::PredicateFailed { predicate } => {
                write!(f, "predicate {predicate} not satisfied")
            }
        }
    }
}

/// A partial-match mismatch, with the key path where it occurred.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Discrepancy {
    /// Key path from the root of the compared mappings (empty at the root).
    pub path: Vec<String>,
    /// What went wrong.
    pub kind: DiscrepancyKind,
}

impl Discrepancy {
    fn new(kind: DiscrepancyKind) -> Self {
        Self {
            path: Vec::new(),
            kind,
        }
    }

    /// Prepend a path segment as the mismatch bubbles out of a container.
    #[must_use]
    pub fn prefixed(mut self, segment: impl Into<String>) -> Self {
        self.path.insert(0, segment.into());
        self
    }
}

impl fmt::Display for Discrepancy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "at {}: {}", self.path.join("."), self.kind)
        }
    }
}

impl std::error::Error for Discrepancy {}

/// Matcher usage error, distinguishable from an assertion failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfigError {
    message: String,
}

impl ConfigError {
    /// The usage-error message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ConfigError {}

// Factory functions

/// Negated invocation of a shape matcher.
#[cold]
pub fn negation_unsupported(matcher_name: &str) -> ConfigError {
    ConfigError {
        message: format!(
            "the {matcher_name} matcher does not support negation: \
             a negated shape match is ambiguous"
        ),
    }
}

/// An expected key is absent from the received mapping.
#[cold]
pub fn missing_key(key: &str) -> Discrepancy {
    Discrepancy::new(DiscrepancyKind::MissingKey {
        key: key.to_string(),
    })
}

/// A leaf value differs from the expected literal.
#[cold]
pub fn value_mismatch(expected: &Value, received: &Value) -> Discrepancy {
    Discrepancy::new(DiscrepancyKind::ValueMismatch {
        expected: expected.to_string(),
        received: received.to_string(),
    })
}

/// A list has the wrong number of elements.
#[cold]
pub fn length_mismatch(expected: usize, received: usize) -> Discrepancy {
    Discrepancy::new(DiscrepancyKind::LengthMismatch { expected, received })
}

/// The received value has the wrong shape for the expected container.
#[cold]
pub fn kind_mismatch(expected: &'static str, received: &'static str) -> Discrepancy {
    Discrepancy::new(DiscrepancyKind::KindMismatch { expected, received })
}

/// An asymmetric predicate was not satisfied.
#[cold]
pub fn predicate_failed(predicate: &PredicateValue) -> Discrepancy {
    Discrepancy::new(DiscrepancyKind::PredicateFailed {
        predicate: predicate.to_string(),
    })
}
