//! Error-value matcher: is the received value an error matching the shape?

use tracing::debug;
use vera_value::{PropMap, Value};

use crate::comparable::project_to_comparable;
use crate::errors::{negation_unsupported, ConfigError};
use crate::harness::Harness;
use crate::report::{ErrorShapeReport, MatchOutcome, MatcherResult, Report};
use crate::{MatcherContext, MatcherDefinition};

/// Asserts that a value is an error instance whose properties named by the
/// expected shape all match. Properties the shape does not name never
/// affect the verdict.
pub struct IsErrorMatcher;

impl MatcherDefinition for IsErrorMatcher {
    fn name(&self) -> &'static str {
        "is_error_matching"
    }

    fn check(
        &self,
        ctx: &MatcherContext,
        harness: &dyn Harness,
        received: &Value,
        expected: Option<&PropMap>,
    ) -> Result<MatcherResult, ConfigError> {
        if ctx.negated {
            return Err(negation_unsupported(self.name()));
        }

        // In rejects mode the host has already unwrapped the rejection
        // reason into `received`; nothing here depends on the mode.
        let is_error_instance = received.is_error();
        let comparable_received = project_to_comparable(received);
        let shape = expected.cloned().unwrap_or_default();
        let comparable_expected = Value::map(shape.clone());

        // Probe only: a discrepancy becomes `false`, it never propagates.
        let properties_match = harness
            .partial_match(&comparable_received, &comparable_expected)
            .is_ok();

        let outcome = MatchOutcome {
            is_error_instance,
            properties_match,
        };
        debug!(
            matcher = self.name(),
            is_error_instance,
            properties_match,
            "evaluated error shape"
        );

        Ok(MatcherResult::new(
            outcome.pass(),
            Report::ErrorShape(ErrorShapeReport {
                matcher_name: self.name(),
                mode: ctx.mode,
                outcome,
                received: received.clone(),
                comparable_received,
                comparable_expected: shape,
            }),
        ))
    }
}
