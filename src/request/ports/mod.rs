//! Port trait definitions for request handling.
//!
//! The validator port guards entry; the handler port is the business logic
//! reached only by admitted requests.

pub mod handler;
pub mod validator;

pub use handler::{HandlerResult, JourneyHandler};
pub use validator::{ProfilePolicy, RequestValidator, Validatable, ValidationConfig};
