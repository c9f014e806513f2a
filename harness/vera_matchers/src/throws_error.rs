//! Throwing-function matcher: does the subject raise a matching error?

use tracing::trace;
use vera_value::{PropMap, Value};

use crate::errors::{negation_unsupported, ConfigError};
use crate::harness::Harness;
use crate::is_error::IsErrorMatcher;
use crate::report::{MatcherResult, Report};
use crate::{EvalMode, MatcherContext, MatcherDefinition};

/// Asserts that a zero-argument subject raises an error matching the
/// expected shape. In rejects mode the host has already awaited the subject
/// and supplies the rejection reason directly, so nothing is invoked.
pub struct ThrowsErrorMatcher;

impl MatcherDefinition for ThrowsErrorMatcher {
    fn name(&self) -> &'static str {
        "throws_error_matching"
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

        // The host awaited the subject and handed over the rejection
        // reason; hand it straight to the error-value matcher.
        if ctx.mode == EvalMode::Rejects {
            return IsErrorMatcher.check(ctx, harness, received, expected);
        }

        let Some(subject) = received.as_function() else {
            return Ok(MatcherResult::new(
                false,
                Report::NotAFunction {
                    received: received.clone(),
                },
            ));
        };

        trace!(matcher = self.name(), "invoking subject");
        match subject.call(&[]) {
            Ok(returned) => Ok(MatcherResult::new(false, Report::DidNotThrow { returned })),
            Err(raised) => IsErrorMatcher.check(ctx, harness, &raised, expected),
        }
    }
}
