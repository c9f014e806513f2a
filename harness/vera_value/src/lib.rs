//! Vera Value - Runtime values for the Vera test harness.
//!
//! This crate provides the dynamic value model assertion matchers operate
//! on:
//! - `Value` with factory methods and `Heap`-enforced shared allocation
//! - `PropMap` insertion-ordered property mappings
//! - `ErrorValue` raised errors (name, message, trace, custom properties)
//! - `FunctionValue` native callable subjects
//! - `PredicateValue` asymmetric predicates for relaxed matching
//!
//! # Heap Enforcement
//!
//! All heap allocations go through factory methods on `Value`. The
//! `Heap<T>` wrapper has a crate-private constructor, so external code
//! cannot create heap values directly.

mod error_value;
mod function;
mod heap;
mod predicate;
mod props;
mod value;

pub use error_value::{ErrorValue, TraceEntry};
pub use function::{FunctionValue, NativeFn};
pub use heap::Heap;
pub use predicate::PredicateValue;
pub use props::PropMap;
pub use value::{SymbolValue, Value};
