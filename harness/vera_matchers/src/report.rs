//! Match outcomes and lazily rendered failure reports.

use vera_value::{PropMap, Value};

use crate::classify::classify_value;
use crate::harness::Harness;
use crate::partition::partition_for_diff;
use crate::{EvalMode, MatcherContext};

/// The two facts a shape match establishes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchOutcome {
    /// Whether the received value is a real error instance.
    pub is_error_instance: bool,
    /// Whether the properties named by the expected shape all matched.
    pub properties_match: bool,
}

impl MatchOutcome {
    /// The assertion passes only when both facts hold.
    #[inline]
    pub fn pass(self) -> bool {
        self.is_error_instance && self.properties_match
    }
}

/// A matcher's verdict plus its deferred failure message.
///
/// The report holds captured inputs, not rendered text: classification,
/// partitioning, diffing, and stringification all happen in `message`, so
/// the passing path pays none of that cost.
#[derive(Clone, Debug)]
pub struct MatcherResult {
    pass: bool,
    report: Report,
}

impl MatcherResult {
    pub(crate) fn new(pass: bool, report: Report) -> Self {
        Self { pass, report }
    }

    /// Whether the assertion passed.
    #[inline]
    pub fn pass(&self) -> bool {
        self.pass
    }

    /// The deferred report.
    pub fn report(&self) -> &Report {
        &self.report
    }

    /// Render the failure message. Deterministic: the same result renders
    /// the same text every time.
    pub fn message(&self, harness: &dyn Harness) -> String {
        self.report.render(harness)
    }
}

/// Captured inputs for a failure message, rendered on demand.
#[derive(Clone, Debug)]
pub enum Report {
    /// The throwing-function matcher was handed a non-callable subject.
    NotAFunction {
        /// The non-callable received value.
        received: Value,
    },
    /// The subject completed without raising.
    DidNotThrow {
        /// The subject's return value.
        returned: Value,
    },
    /// The shape comparison ran; one or both outcome facts may have failed.
    ErrorShape(ErrorShapeReport),
}

impl Report {
    /// Assemble the report text.
    pub fn render(&self, harness: &dyn Harness) -> String {
        match self {
            Report::NotAFunction { received } => format!(
                "Received value must be a function\n\nReceived: {}",
                harness.stringify(received)
            ),
            Report::DidNotThrow { returned } => format!(
                "Expected function to throw an error, but it returned successfully\n\n\
                 Returned value: {}",
                harness.stringify(returned)
            ),
            Report::ErrorShape(report) => report.render(harness),
        }
    }
}

/// Inputs captured by the error-value matcher for its report.
#[derive(Clone, Debug)]
pub struct ErrorShapeReport {
    /// Name used in the hint line.
    pub matcher_name: &'static str,
    /// Evaluation mode the host supplied.
    pub mode: EvalMode,
    /// The computed outcome facts.
    pub outcome: MatchOutcome,
    /// The received value as given, for classification.
    pub received: Value,
    /// The received value's comparable projection.
    pub comparable_received: Value,
    /// The expected shape's comparable projection.
    pub comparable_expected: PropMap,
}

impl ErrorShapeReport {
    fn render(&self, harness: &dyn Harness) -> String {
        let partition = partition_for_diff(&self.comparable_received, &self.comparable_expected);
        let ctx = MatcherContext::new(false, self.mode);

        let mut blocks = vec![
            harness.matcher_hint(self.matcher_name, &ctx),
            self.type_report(),
        ];
        if !self.outcome.properties_match {
            let expected = Value::map(self.comparable_expected.clone());
            if let Some(diff) = harness.diff(&expected, &partition.diffable) {
                blocks.push(diff);
            }
            if let Some(additional) = partition.additional {
                if !additional.is_empty() {
                    blocks.push(render_additional(&additional, harness));
                }
            }
        }
        blocks.join("\n\n")
    }

    fn type_report(&self) -> String {
        if self.outcome.is_error_instance {
            return "Received value was an Error, as expected, but it did not match \
                    the given properties (see below for diff)."
                .to_string();
        }
        let follow_up = if self.outcome.properties_match {
            "However it matches all of the expected properties."
        } else {
            "Additionally, the received value does not match the expected properties \
             (see below for diff)."
        };
        format!(
            "Expected an Error, received {}. {follow_up}",
            classify_value(&self.received)
        )
    }
}

fn render_additional(additional: &PropMap, harness: &dyn Harness) -> String {
    let entries = additional
        .iter()
        .map(|(key, value)| format!("  {key}: {}", harness.stringify(value)))
        .collect::<Vec<_>>()
        .join(",\n");
    format!(
        "Also received the following properties, which were ignored for matching:\n\n\
         {{\n{entries}\n}}"
    )
}
