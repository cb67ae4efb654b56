//! Request validation implementation.
//!
//! This module provides the constraint vocabulary and rule evaluator, and
//! the gate service built on top of them.

pub mod rules;
pub mod service;

pub use rules::{FieldRule, Format, IntegerConstraint, RuleSet, TextConstraint, evaluate};
pub use service::{Admitted, ValidationGate};
