//! Matcher registry and the host registration entry point.

use crate::is_error::IsErrorMatcher;
use crate::throws_error::ThrowsErrorMatcher;
use crate::MatcherDefinition;

// Static matcher instances for 'static lifetime references
static IS_ERROR: IsErrorMatcher = IsErrorMatcher;
static THROWS_ERROR: ThrowsErrorMatcher = ThrowsErrorMatcher;

/// The matchers this crate ships.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MatcherKind {
    /// Error-value matcher.
    IsError,
    /// Throwing-function matcher.
    ThrowsError,
}

/// Registry mapping `MatcherKind` to matcher definitions.
///
/// Uses direct enum dispatch instead of a map lookup. All matchers are ZSTs
/// with static lifetime, so this struct has zero overhead.
pub struct MatcherRegistry {
    // Marker field to prevent external construction
    _private: (),
}

impl MatcherRegistry {
    /// Create a registry with both matchers registered.
    pub fn new() -> Self {
        MatcherRegistry { _private: () }
    }

    /// Get the matcher definition for a given kind.
    pub fn get(&self, kind: MatcherKind) -> &'static dyn MatcherDefinition {
        match kind {
            MatcherKind::IsError => &IS_ERROR,
            MatcherKind::ThrowsError => &THROWS_ERROR,
        }
    }

    /// Look up a matcher by its registered name.
    pub fn by_name(&self, name: &str) -> Option<&'static dyn MatcherDefinition> {
        self.kinds()
            .map(|kind| self.get(kind))
            .find(|matcher| matcher.name() == name)
    }

    /// Get all registered matcher kinds.
    pub fn kinds(&self) -> impl Iterator<Item = MatcherKind> {
        [MatcherKind::IsError, MatcherKind::ThrowsError].into_iter()
    }

    /// Get the number of registered matchers.
    pub fn len(&self) -> usize {
        2
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Default for MatcherRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// The host framework's capability table for named matchers.
pub trait ExtensionPoint {
    /// Make a matcher available under the given name.
    fn extend(&mut self, name: &'static str, matcher: &'static dyn MatcherDefinition);
}

/// Register both matchers with a host.
///
/// Registration is an explicit call made by the adapter layer at startup,
/// not a side effect of linking this crate.
pub fn register_matchers(host: &mut dyn ExtensionPoint) {
    let registry = MatcherRegistry::new();
    for kind in registry.kinds() {
        let matcher = registry.get(kind);
        host.extend(matcher.name(), matcher);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn registry_has_both_matchers() {
        let registry = MatcherRegistry::new();
        assert_eq!(registry.len(), 2);
        assert!(!registry.is_empty());

        assert_eq!(
            registry.get(MatcherKind::IsError).name(),
            "is_error_matching"
        );
        assert_eq!(
            registry.get(MatcherKind::ThrowsError).name(),
            "throws_error_matching"
        );
    }

    #[test]
    fn by_name_resolves_registered_names() {
        let registry = MatcherRegistry::new();
        assert!(registry.by_name("is_error_matching").is_some());
        assert!(registry.by_name("throws_error_matching").is_some());
        assert!(registry.by_name("no_such_matcher").is_none());
    }

    #[test]
    fn register_matchers_extends_the_host() {
        struct RecordingHost {
            names: Vec<&'static str>,
        }
        impl ExtensionPoint for RecordingHost {
            fn extend(&mut self, name: &'static str, _matcher: &'static dyn MatcherDefinition) {
                self.names.push(name);
            }
        }

        let mut host = RecordingHost { names: Vec::new() };
        register_matchers(&mut host);
        assert_eq!(
            host.names,
            vec!["is_error_matching", "throws_error_matching"]
        );
    }
}
