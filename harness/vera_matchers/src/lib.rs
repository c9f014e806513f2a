//! Vera Matchers - Error-shape assertion matchers for the Vera harness.
//!
//! This crate provides:
//! - Two matcher definitions: `is_error_matching` (is this value an error
//!   matching the expected properties?) and `throws_error_matching` (does
//!   this subject raise such an error?)
//! - The comparable-projection, diff-partition, and classification steps
//!   the matchers are built from
//! - Lazily rendered failure reports separating matched-on properties from
//!   ignored ones
//! - The `Harness` adapter trait for host-framework utilities, with a
//!   `StandardHarness` reference implementation
//! - A matcher registry and explicit host registration entry point
//!
//! # Architecture
//!
//! Matchers implement `MatcherDefinition` and are registered in
//! `MatcherRegistry`; hosts receive them through `register_matchers`. A
//! matcher never renders or compares values itself; it goes through the
//! `Harness` the host passes in, so relaxed matching and report formatting
//! stay host-replaceable.
//!
//! # Negation
//!
//! Neither matcher supports negation: a negated shape match is ambiguous.
//! Negated invocation is a `ConfigError`, raised before the received value
//! is looked at, and is never reported as an assertion failure.

mod classify;
mod comparable;
mod errors;
mod harness;
mod is_error;
mod partial;
mod partition;
mod registry;
mod render;
mod report;
mod throws_error;

use vera_value::{PropMap, Value};

pub use classify::classify_value;
pub use comparable::project_to_comparable;
pub use errors::{
    kind_mismatch, length_mismatch, missing_key, negation_unsupported, predicate_failed,
    value_mismatch, ConfigError, Discrepancy, DiscrepancyKind,
};
pub use harness::{Harness, StandardHarness};
pub use is_error::IsErrorMatcher;
pub use partial::partial_match;
pub use partition::{partition_for_diff, DiffPartition};
pub use registry::{register_matchers, ExtensionPoint, MatcherKind, MatcherRegistry};
pub use render::{diff, matcher_hint, stringify};
pub use report::{ErrorShapeReport, MatchOutcome, MatcherResult, Report};
pub use throws_error::ThrowsErrorMatcher;

/// How the host is evaluating the subject.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EvalMode {
    /// The received value is the subject itself.
    Normal,
    /// The subject was a promise the host awaited; the received value is
    /// its rejection reason.
    Rejects,
}

/// Per-invocation context supplied by the host framework.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MatcherContext {
    /// Whether the invocation was negated.
    pub negated: bool,
    /// The evaluation mode.
    pub mode: EvalMode,
}

impl MatcherContext {
    /// Create a context.
    pub fn new(negated: bool, mode: EvalMode) -> Self {
        MatcherContext { negated, mode }
    }

    /// A plain, non-negated invocation.
    pub fn normal() -> Self {
        MatcherContext::new(false, EvalMode::Normal)
    }

    /// A non-negated invocation in rejects mode.
    pub fn rejects() -> Self {
        MatcherContext::new(false, EvalMode::Rejects)
    }
}

/// Trait defining a matcher's behavior.
///
/// Each matcher implements this trait to define its verdict and failure
/// report. Adding a matcher requires implementing the trait and registering
/// it in `MatcherRegistry::new()`; no evaluation code changes.
pub trait MatcherDefinition: Send + Sync {
    /// The matcher's registered name (e.g., `is_error_matching`).
    fn name(&self) -> &'static str;

    /// Evaluate the matcher.
    ///
    /// Returns `Err` only for usage errors (negation); every assertion
    /// verdict, pass or fail, is an `Ok` result carrying its report.
    fn check(
        &self,
        ctx: &MatcherContext,
        harness: &dyn Harness,
        received: &Value,
        expected: Option<&PropMap>,
    ) -> Result<MatcherResult, ConfigError>;
}
