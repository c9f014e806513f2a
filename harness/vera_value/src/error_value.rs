//! Error values raised by harness subjects.
//!
//! `ErrorValue` carries a name, a message, a trace of propagation sites, and
//! any custom properties the raising code attached. The trace renders to the
//! `stack` string that comparable projection exposes for matching.

use std::fmt;

use crate::{PropMap, Value};

/// A single trace entry recording where an error was propagated.
#[derive(Clone, Debug, PartialEq)]
pub struct TraceEntry {
    /// The function name where propagation occurred.
    pub function: String,
    /// The source file path.
    pub file: String,
    /// The 1-based line number.
    pub line: u32,
    /// The 1-based column number.
    pub column: u32,
}

impl TraceEntry {
    /// Create a trace entry.
    pub fn new(
        function: impl Into<String>,
        file: impl Into<String>,
        line: u32,
        column: u32,
    ) -> Self {
        Self {
            function: function.into(),
            file: file.into(),
            line,
            column,
        }
    }
}

impl fmt::Display for TraceEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "at {} ({}:{}:{})",
            self.function, self.file, self.line, self.column
        )
    }
}

/// An error value with a name, message, propagation trace, and custom
/// properties.
///
/// Built with the builder-style `with_*` methods:
///
/// ```text
/// let err = ErrorValue::new("boom")
///     .with_name("CustomError")
///     .with_property("code", Value::int(42));
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub struct ErrorValue {
    name: String,
    message: String,
    trace: Vec<TraceEntry>,
    properties: PropMap,
}

impl ErrorValue {
    /// Create an error named `Error` with the given message and no trace.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            name: "Error".to_string(),
            message: message.into(),
            trace: Vec::new(),
            properties: PropMap::new(),
        }
    }

    /// Override the error name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Replace the propagation trace.
    #[must_use]
    pub fn with_trace(mut self, trace: Vec<TraceEntry>) -> Self {
        self.trace = trace;
        self
    }

    /// Attach a custom property. Later writes override earlier ones,
    /// including properties named `name`, `message`, or `stack`.
    #[must_use]
    pub fn with_property(mut self, name: impl Into<String>, value: Value) -> Self {
        self.properties.insert(name, value);
        self
    }

    /// The error name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The error message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The accumulated trace entries.
    #[inline]
    pub fn trace(&self) -> &[TraceEntry] {
        &self.trace
    }

    /// The custom properties, in insertion order.
    #[inline]
    pub fn properties(&self) -> &PropMap {
        &self.properties
    }

    /// Append a trace entry.
    pub fn push_trace(&mut self, entry: TraceEntry) {
        self.trace.push(entry);
    }

    /// Render the stack string: `name: message` followed by one indented
    /// line per trace entry.
    pub fn render_stack(&self) -> String {
        let mut stack = format!("{}: {}", self.name, self.message);
        for entry in &self.trace {
            stack.push_str("\n  ");
            stack.push_str(&entry.to_string());
        }
        stack
    }
}

impl fmt::Display for ErrorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}: {}>", self.name, self.message)
    }
}
