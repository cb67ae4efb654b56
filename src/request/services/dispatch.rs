//! Service that gates inbound requests before handing them to business
//! logic.

use std::sync::Arc;

use crate::request::{
    domain::JourneyRequest,
    error::DispatchError,
    ports::{
        handler::{HandlerResult, JourneyHandler},
        validator::Validatable,
    },
    validation::service::{Admitted, ValidationGate},
};

/// Result type for dispatch operations.
pub type DispatchResult = Result<serde_json::Value, DispatchError>;

/// Validates each request and routes admitted ones to a [`JourneyHandler`].
///
/// The handler is never invoked for a request that fails validation.
#[derive(Clone)]
pub struct RequestDispatcher<H>
where
    H: JourneyHandler,
{
    gate: ValidationGate,
    handler: Arc<H>,
}

impl<H> RequestDispatcher<H>
where
    H: JourneyHandler,
{
    /// Creates a dispatcher in front of `handler`.
    #[must_use]
    pub const fn new(gate: ValidationGate, handler: Arc<H>) -> Self {
        Self { gate, handler }
    }

    /// Returns the gate used by this dispatcher.
    #[must_use]
    pub const fn gate(&self) -> &ValidationGate {
        &self.gate
    }

    /// Validates `request` and, if admitted, passes it to the handler.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::Gate`] when validation fails, carrying the
    /// complete violation set, or [`DispatchError::Handler`] when the handler
    /// itself fails.
    pub fn dispatch(&self, request: impl Into<JourneyRequest>) -> DispatchResult {
        let outcome = match request.into() {
            JourneyRequest::JoinJourney(inner) => self.route(inner, H::join_journey),
            JourneyRequest::GetMessages(inner) => self.route(inner, H::get_messages),
            JourneyRequest::UpdateUserInfo(inner) => self.route(inner, H::update_user_info),
        }?;
        Ok(outcome?)
    }

    fn route<R, F>(&self, request: R, call: F) -> Result<HandlerResult, DispatchError>
    where
        R: Validatable,
        F: FnOnce(&H, Admitted<R>) -> HandlerResult,
    {
        let admitted = self.gate.admit(request)?;
        Ok(call(self.handler.as_ref(), admitted))
    }
}
