//! Validation gate implementation.
//!
//! Provides the default implementation of the `RequestValidator` port and
//! the [`Admitted`] wrapper that marks a request as safe to dispatch.

use std::ops::Deref;

use crate::request::{
    error::GateError,
    ports::validator::{RequestValidator, Validatable, ValidationConfig},
    validation::rules::evaluate,
};

/// Stateless gate that every inbound request passes through before it
/// reaches business logic.
///
/// Evaluates all declared rules, collecting every violation rather than
/// failing on the first one.
///
/// # Examples
///
/// ```
/// use journey_gate::request::domain::GetMessageRequest;
/// use journey_gate::request::error::ViolationKind;
/// use journey_gate::request::ports::validator::RequestValidator;
/// use journey_gate::request::validation::service::ValidationGate;
///
/// let gate = ValidationGate::new();
/// let request = GetMessageRequest::new("u1", -1, 10);
///
/// let err = gate.validate(&request).unwrap_err();
/// let rejection = err.rejection().expect("field violations");
/// assert_eq!(rejection.len(), 1);
/// assert_eq!(rejection.violations()[0].kind, ViolationKind::OutOfRange);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ValidationGate {
    config: ValidationConfig,
}

impl ValidationGate {
    /// Creates a gate with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a gate with a custom configuration.
    #[must_use]
    pub const fn with_config(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Returns the gate's configuration.
    #[must_use]
    pub const fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Validates `request` and, on success, wraps it for dispatch.
    ///
    /// # Errors
    ///
    /// Returns [`GateError`] under the same conditions as
    /// [`RequestValidator::validate`]; the request is dropped.
    pub fn admit<R: Validatable>(&self, request: R) -> Result<Admitted<R>, GateError> {
        self.validate(&request)?;
        Ok(Admitted(request))
    }
}

impl RequestValidator for ValidationGate {
    fn validate(&self, request: &dyn Validatable) -> Result<(), GateError> {
        let kind = request.kind();
        let declared = request.rules(&self.config);

        if declared.is_empty() && self.config.require_declared_rules {
            tracing::warn!(kind, "request kind declares no validation rules");
            return Err(GateError::NoRulesDeclared(kind));
        }

        match evaluate(&declared) {
            Ok(()) => {
                tracing::debug!(kind, rules = declared.len(), "request admitted");
                Ok(())
            }
            Err(rejection) => {
                tracing::debug!(
                    kind,
                    violations = rejection.len(),
                    "request rejected: {rejection}"
                );
                Err(rejection.into())
            }
        }
    }
}

/// A request that has passed the validation gate.
///
/// Only the gate constructs this type, so a handler accepting
/// `Admitted<R>` can never observe an unvalidated request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Admitted<R>(R);

impl<R> Admitted<R> {
    /// Returns the validated request.
    #[must_use]
    pub fn into_inner(self) -> R {
        self.0
    }
}

impl<R> Deref for Admitted<R> {
    type Target = R;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

// Note: Unit tests for ValidationGate are located in
// src/request/tests/gate_tests.rs.
