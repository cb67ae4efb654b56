//! Error types for request validation, decoding, and dispatch.
//!
//! Violations are expected outcomes of validating malformed input and are
//! collected into a [`Rejection`]. Programming errors in a request's rule
//! declaration surface separately as [`GateError`] defects.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// The class of rule a field failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ViolationKind {
    /// A required field was absent or blank.
    MissingField,
    /// A numeric field fell outside its declared bounds.
    OutOfRange,
    /// A string field was shorter than its declared minimum.
    TooShort,
    /// A string field was longer than its declared maximum.
    TooLong,
    /// A string field did not match its declared format.
    BadFormat,
}

impl ViolationKind {
    /// Returns the stable wire name of this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MissingField => "missingField",
            Self::OutOfRange => "outOfRange",
            Self::TooShort => "tooShort",
            Self::TooLong => "tooLong",
            Self::BadFormat => "badFormat",
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single failure of one declared rule against one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Wire name of the offending field.
    pub field: &'static str,
    /// The rule class that failed.
    pub kind: ViolationKind,
    /// Human-readable description of the failure.
    pub message: String,
}

impl Violation {
    /// Creates a violation for `field`.
    #[must_use]
    pub fn new(field: &'static str, kind: ViolationKind, message: impl Into<String>) -> Self {
        Self {
            field,
            kind,
            message: message.into(),
        }
    }

    /// Creates a [`ViolationKind::MissingField`] violation.
    #[must_use]
    pub fn missing(field: &'static str, message: impl Into<String>) -> Self {
        Self::new(field, ViolationKind::MissingField, message)
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.field, self.kind, self.message)
    }
}

/// An ordered, non-empty set of violations for one request.
///
/// Callers must not dispatch a request that produced a rejection.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("request rejected: {}", format_violations(.violations))]
pub struct Rejection {
    violations: Vec<Violation>,
}

fn format_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl Rejection {
    /// Wraps a violation list, returning `None` when it is empty.
    #[must_use]
    pub fn from_violations(violations: Vec<Violation>) -> Option<Self> {
        if violations.is_empty() {
            None
        } else {
            Some(Self { violations })
        }
    }

    /// Returns the violations in evaluation order.
    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Consumes the rejection, returning its violations.
    #[must_use]
    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }

    /// Returns the number of violations.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.violations.len()
    }

    /// Always `false`; a rejection holds at least one violation.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns the violations reported against `field`.
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a Violation> + 'a {
        self.violations.iter().filter(move |v| v.field == field)
    }
}

/// Errors produced by the validation gate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GateError {
    /// The request failed one or more declared rules.
    #[error(transparent)]
    Rejected(#[from] Rejection),

    /// The request kind declares no rules while the gate requires them.
    #[error("request kind '{0}' declares no validation rules")]
    NoRulesDeclared(&'static str),
}

impl GateError {
    /// Returns the rejection if this error carries field violations.
    #[must_use]
    pub const fn rejection(&self) -> Option<&Rejection> {
        match self {
            Self::Rejected(rejection) => Some(rejection),
            Self::NoRulesDeclared(_) => None,
        }
    }

    /// Returns `true` if this error reports a programming defect rather than
    /// malformed input.
    #[must_use]
    pub const fn is_defect(&self) -> bool {
        matches!(self, Self::NoRulesDeclared(_))
    }
}

/// Errors raised while decoding an inbound payload into a typed request.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The payload was not valid JSON or did not match any request shape.
    #[error("malformed request payload: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The payload did not name a request kind.
    #[error("request payload has no 'type' field")]
    MissingKind,

    /// The payload named a request kind this service does not accept.
    #[error("unknown request kind: {0}")]
    UnknownKind(String),
}

/// Error returned by a downstream journey handler.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("handler failed: {0}")]
pub struct HandlerError(pub String);

impl HandlerError {
    /// Creates a handler error from a message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Errors returned while validating and dispatching a request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// The gate refused the request; the handler was not invoked.
    #[error(transparent)]
    Gate(#[from] GateError),

    /// The handler ran and failed.
    #[error(transparent)]
    Handler(#[from] HandlerError),
}
