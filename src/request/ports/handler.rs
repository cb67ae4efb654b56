//! Downstream port for the business logic behind the gate.

use serde_json::Value;

use crate::request::{
    domain::{GetMessageRequest, JoinJourneyRequest, UpdateUserInfoRequest},
    error::HandlerError,
    validation::service::Admitted,
};

/// Result type for handler operations.
pub type HandlerResult = Result<Value, HandlerError>;

/// Business logic that consumes admitted requests.
///
/// Every method takes an [`Admitted`] request, so an implementation is only
/// ever reached once the request has passed the validation gate. Checks that
/// need storage, such as whether a journey exists, belong here.
#[cfg_attr(test, mockall::automock)]
pub trait JourneyHandler: Send + Sync {
    /// Adds the caller to a journey.
    ///
    /// # Errors
    ///
    /// Returns [`HandlerError`] when the journey cannot be joined.
    fn join_journey(&self, request: Admitted<JoinJourneyRequest>) -> HandlerResult;

    /// Returns a page of messages.
    ///
    /// # Errors
    ///
    /// Returns [`HandlerError`] when the messages cannot be loaded.
    fn get_messages(&self, request: Admitted<GetMessageRequest>) -> HandlerResult;

    /// Applies a profile update.
    ///
    /// # Errors
    ///
    /// Returns [`HandlerError`] when the profile cannot be updated.
    fn update_user_info(&self, request: Admitted<UpdateUserInfoRequest>) -> HandlerResult;
}
