//! Native callable values.

use std::fmt;
use std::sync::Arc;

use crate::Value;

/// Native function signature: arguments in, `Ok(return)` or `Err(raised)`.
///
/// Raising is modeled as the `Err` arm: any value can be raised, not only
/// errors, and the matcher pipeline classifies whatever comes back.
pub type NativeFn = Arc<dyn Fn(&[Value]) -> Result<Value, Value> + Send + Sync>;

/// A callable value wrapping a native closure.
#[derive(Clone)]
pub struct FunctionValue {
    name: Option<String>,
    body: NativeFn,
}

impl FunctionValue {
    /// Create an anonymous function value.
    pub fn new(body: impl Fn(&[Value]) -> Result<Value, Value> + Send + Sync + 'static) -> Self {
        Self {
            name: None,
            body: Arc::new(body),
        }
    }

    /// Create a named function value.
    pub fn named(
        name: impl Into<String>,
        body: impl Fn(&[Value]) -> Result<Value, Value> + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: Some(name.into()),
            body: Arc::new(body),
        }
    }

    /// The function's name, if it has one.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Invoke the function.
    pub fn call(&self, args: &[Value]) -> Result<Value, Value> {
        (self.body)(args)
    }
}

impl PartialEq for FunctionValue {
    /// Functions are equal by body identity.
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.body, &other.body)
    }
}

impl fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "FunctionValue({name})"),
            None => write!(f, "FunctionValue"),
        }
    }
}

impl fmt::Display for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "<function {name}>"),
            None => write!(f, "<function>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn call_returns_ok_value() {
        let f = FunctionValue::new(|_| Ok(Value::int(7)));
        assert_eq!(f.call(&[]), Ok(Value::int(7)));
    }

    #[test]
    fn call_surfaces_raised_value() {
        let f = FunctionValue::new(|_| Err(Value::string("raised")));
        assert_eq!(f.call(&[]), Err(Value::string("raised")));
    }

    #[test]
    fn equality_is_by_identity() {
        let f = FunctionValue::new(|_| Ok(Value::Undefined));
        let g = FunctionValue::new(|_| Ok(Value::Undefined));
        assert_eq!(f, f.clone());
        assert_ne!(f, g);
    }

    #[test]
    fn display_includes_name() {
        let f = FunctionValue::named("subject", |_| Ok(Value::Undefined));
        assert_eq!(f.to_string(), "<function subject>");
        let anon = FunctionValue::new(|_| Ok(Value::Undefined));
        assert_eq!(anon.to_string(), "<function>");
    }
}
