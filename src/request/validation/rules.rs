//! Constraint vocabulary, rule tables, and the generic rule evaluator.
//!
//! A request declares its rules as a [`RuleSet`]: an ordered list of
//! `{field, constraint}` pairs that borrow the request's current field
//! values. [`evaluate`] checks every rule and collects the violations.

use std::ops::Bound;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::request::{
    error::{Rejection, Violation, ViolationKind},
    ports::validator::ValidationResult,
};

static IDENTIFIER_PATTERN: Lazy<Regex> = Lazy::new(|| compile(r"^[A-Za-z0-9][A-Za-z0-9_-]*$"));
static HTTP_URL_PATTERN: Lazy<Regex> = Lazy::new(|| compile(r"^https?://[^\s/$.?#][^\s]*$"));

#[expect(
    clippy::expect_used,
    reason = "patterns are string literals exercised by unit tests"
)]
fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("static pattern should compile")
}

/// Named string formats a text field can be checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// ASCII letters, digits, `_` and `-`, starting with a letter or digit.
    Identifier,
    /// An absolute `http` or `https` URL without whitespace.
    HttpUrl,
}

impl Format {
    /// Returns `true` if `value` matches this format.
    #[must_use]
    pub fn matches(self, value: &str) -> bool {
        match self {
            Self::Identifier => IDENTIFIER_PATTERN.is_match(value),
            Self::HttpUrl => HTTP_URL_PATTERN.is_match(value),
        }
    }

    const fn describe(self) -> &'static str {
        match self {
            Self::Identifier => "an identifier of letters, digits, '_' or '-'",
            Self::HttpUrl => "an http or https URL",
        }
    }
}

/// A constraint on a string field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextConstraint {
    /// The field must be present and not blank.
    Required,
    /// Character count must lie within the given bounds.
    Length {
        /// Inclusive minimum, if any.
        min: Option<usize>,
        /// Inclusive maximum, if any.
        max: Option<usize>,
    },
    /// The value must match a named format.
    Format(Format),
}

impl TextConstraint {
    /// Creates an inclusive length bound.
    #[must_use]
    pub const fn length(min: usize, max: usize) -> Self {
        Self::Length {
            min: Some(min),
            max: Some(max),
        }
    }

    /// Creates an upper length bound.
    #[must_use]
    pub const fn max_length(max: usize) -> Self {
        Self::Length {
            min: None,
            max: Some(max),
        }
    }
}

/// A constraint on an integer field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegerConstraint {
    /// The field must be present.
    Required,
    /// The value must lie within the given bounds.
    Range {
        /// Lower bound.
        min: Bound<i64>,
        /// Upper bound.
        max: Bound<i64>,
    },
}

impl IntegerConstraint {
    /// Creates an inclusive lower bound with no upper bound.
    #[must_use]
    pub const fn at_least(min: i64) -> Self {
        Self::Range {
            min: Bound::Included(min),
            max: Bound::Unbounded,
        }
    }

    /// Creates a range from explicit bounds.
    #[must_use]
    pub const fn range(min: Bound<i64>, max: Bound<i64>) -> Self {
        Self::Range { min, max }
    }
}

/// One `{field, constraint}` pair bound to the field's current value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldRule<'a> {
    /// A rule over a string field.
    Text {
        /// Wire name of the field.
        field: &'static str,
        /// Current value; `None` if the client did not send it.
        value: Option<&'a str>,
        /// The constraint to check.
        constraint: TextConstraint,
    },
    /// A rule over an integer field.
    Integer {
        /// Wire name of the field.
        field: &'static str,
        /// Current value; `None` if the client did not send it.
        value: Option<i64>,
        /// The constraint to check.
        constraint: IntegerConstraint,
    },
}

impl FieldRule<'_> {
    /// Returns the wire name of the field this rule applies to.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match *self {
            Self::Text { field, .. } | Self::Integer { field, .. } => field,
        }
    }

    /// Checks the rule, returning a violation if it fails.
    #[must_use]
    pub fn check(&self) -> Option<Violation> {
        match *self {
            Self::Text {
                field,
                value,
                constraint,
            } => check_text(field, value, constraint),
            Self::Integer {
                field,
                value,
                constraint,
            } => check_integer(field, value, constraint),
        }
    }
}

/// Ordered rule table declared by a request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet<'a> {
    rules: Vec<FieldRule<'a>>,
}

impl<'a> RuleSet<'a> {
    /// Creates an empty rule set.
    #[must_use]
    pub const fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Declares constraints on a string field.
    #[must_use]
    pub fn text(
        mut self,
        field: &'static str,
        value: Option<&'a str>,
        constraints: impl IntoIterator<Item = TextConstraint>,
    ) -> Self {
        self.rules
            .extend(constraints.into_iter().map(|constraint| FieldRule::Text {
                field,
                value,
                constraint,
            }));
        self
    }

    /// Declares constraints on an integer field.
    #[must_use]
    pub fn integer(
        mut self,
        field: &'static str,
        value: Option<i64>,
        constraints: impl IntoIterator<Item = IntegerConstraint>,
    ) -> Self {
        self.rules
            .extend(constraints.into_iter().map(|constraint| FieldRule::Integer {
                field,
                value,
                constraint,
            }));
        self
    }

    /// Returns the rules in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &FieldRule<'a>> {
        self.rules.iter()
    }

    /// Returns the number of declared rules.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` if no rules are declared.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Evaluates every rule in `rules`, collecting all violations.
///
/// An empty rule set passes.
///
/// # Errors
///
/// Returns [`Rejection`] listing each failed rule in declaration order.
///
/// # Examples
///
/// ```
/// use journey_gate::request::validation::rules::{
///     IntegerConstraint, RuleSet, TextConstraint, evaluate,
/// };
///
/// let rules = RuleSet::new()
///     .text("userId", Some(""), [TextConstraint::Required])
///     .integer("from", Some(-1), [IntegerConstraint::at_least(0)]);
///
/// let rejection = evaluate(&rules).unwrap_err();
/// assert_eq!(rejection.len(), 2);
/// ```
pub fn evaluate(rules: &RuleSet<'_>) -> ValidationResult {
    let violations = rules.iter().filter_map(FieldRule::check).collect();
    Rejection::from_violations(violations).map_or(Ok(()), Err)
}

fn check_text(
    field: &'static str,
    value: Option<&str>,
    constraint: TextConstraint,
) -> Option<Violation> {
    let present = value.filter(|text| !text.trim().is_empty());
    match (constraint, present) {
        (TextConstraint::Required, None) => Some(missing(field, value.is_some())),
        (TextConstraint::Required, Some(_)) | (_, None) => None,
        (TextConstraint::Length { min, max }, Some(text)) => check_length(field, text, min, max),
        (TextConstraint::Format(format), Some(text)) => (!format.matches(text)).then(|| {
            Violation::new(
                field,
                ViolationKind::BadFormat,
                format!("{field} must be {}", format.describe()),
            )
        }),
    }
}

fn missing(field: &'static str, sent_blank: bool) -> Violation {
    if sent_blank {
        Violation::missing(field, format!("{field} must not be empty"))
    } else {
        Violation::missing(field, format!("{field} is required"))
    }
}

fn check_length(
    field: &'static str,
    text: &str,
    min: Option<usize>,
    max: Option<usize>,
) -> Option<Violation> {
    let count = text.trim().chars().count();
    if let Some(limit) = min
        && count < limit
    {
        return Some(Violation::new(
            field,
            ViolationKind::TooShort,
            format!("{field} must be at least {limit} characters (got {count})"),
        ));
    }
    if let Some(limit) = max
        && count > limit
    {
        return Some(Violation::new(
            field,
            ViolationKind::TooLong,
            format!("{field} must be at most {limit} characters (got {count})"),
        ));
    }
    None
}

fn check_integer(
    field: &'static str,
    value: Option<i64>,
    constraint: IntegerConstraint,
) -> Option<Violation> {
    match (constraint, value) {
        (IntegerConstraint::Required, None) => Some(missing(field, false)),
        (IntegerConstraint::Required, Some(_)) | (IntegerConstraint::Range { .. }, None) => None,
        (IntegerConstraint::Range { min, max }, Some(number)) => {
            let Some(failed) = below(number, min).or_else(|| above(number, max)) else {
                return None;
            };
            Some(Violation::new(
                field,
                ViolationKind::OutOfRange,
                format!("{field} must be {failed} (got {number})"),
            ))
        }
    }
}

fn below(number: i64, min: Bound<i64>) -> Option<String> {
    match min {
        Bound::Included(limit) if number < limit => Some(format!("at least {limit}")),
        Bound::Excluded(limit) if number <= limit => Some(format!("greater than {limit}")),
        _ => None,
    }
}

fn above(number: i64, max: Bound<i64>) -> Option<String> {
    match max {
        Bound::Included(limit) if number > limit => Some(format!("at most {limit}")),
        Bound::Excluded(limit) if number >= limit => Some(format!("less than {limit}")),
        _ => None,
    }
}
