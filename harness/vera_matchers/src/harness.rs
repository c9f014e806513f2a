//! Host-framework adapter.

use vera_value::Value;

use crate::errors::Discrepancy;
use crate::render;
use crate::{EvalMode, MatcherContext};

/// The utilities a host test framework supplies to matchers.
///
/// Matchers never render or compare values directly; they go through this
/// trait, so a host with its own stringifier, differ, or relaxed-matching
/// primitive plugs in without touching matcher logic.
pub trait Harness {
    /// Probe a value against an expected shape.
    ///
    /// Mismatch is a returned `Discrepancy`, never an unwind; callers
    /// convert it to a boolean locally.
    fn partial_match(&self, actual: &Value, expected: &Value) -> Result<(), Discrepancy>;

    /// Pretty-print a value for failure messages.
    fn stringify(&self, value: &Value) -> String;

    /// Structural diff between two values; `None` when they are equal.
    fn diff(&self, expected: &Value, received: &Value) -> Option<String>;

    /// Render the hint line for a matcher invocation.
    fn matcher_hint(&self, matcher_name: &str, ctx: &MatcherContext) -> String;
}

/// Reference harness wired to this crate's own matching and rendering.
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardHarness;

impl Harness for StandardHarness {
    fn partial_match(&self, actual: &Value, expected: &Value) -> Result<(), Discrepancy> {
        crate::partial::partial_match(actual, expected)
    }

    fn stringify(&self, value: &Value) -> String {
        render::stringify(value)
    }

    fn diff(&self, expected: &Value, received: &Value) -> Option<String> {
        render::diff(expected, received)
    }

    fn matcher_hint(&self, matcher_name: &str, ctx: &MatcherContext) -> String {
        render::matcher_hint(matcher_name, ctx.negated, ctx.mode == EvalMode::Rejects)
    }
}
