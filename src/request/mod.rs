//! Inbound request validation for the journey sharing service.
//!
//! Every request payload declares its own field rules; the validation gate
//! evaluates them all and either admits the request or rejects it with the
//! complete set of violations. Business logic only ever receives admitted
//! requests.
//!
//! # Architecture
//!
//! - **Domain**: Plain request payloads ([`domain::JoinJourneyRequest`],
//!   [`domain::GetMessageRequest`], [`domain::UpdateUserInfoRequest`]) and the
//!   [`domain::JourneyRequest`] envelope
//! - **Ports**: The [`ports::validator::Validatable`] capability, the
//!   [`ports::validator::RequestValidator`] gate port, and the downstream
//!   [`ports::handler::JourneyHandler`]
//! - **Validation**: The constraint vocabulary, rule evaluator, and
//!   [`validation::service::ValidationGate`]
//! - **Services**: [`services::RequestDispatcher`], gate plus handler
//! - **Adapters**: JSON decoding of inbound payloads
//!
//! # Example
//!
//! ```
//! use journey_gate::request::domain::JoinJourneyRequest;
//! use journey_gate::request::ports::validator::Validatable;
//!
//! let request = JoinJourneyRequest::new("journey-7");
//! request.validate().expect("validation should pass");
//!
//! let empty = JoinJourneyRequest::new("");
//! let rejection = empty.validate().expect_err("empty id is rejected");
//! assert_eq!(rejection.violations()[0].field, "journeyId");
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;
pub mod services;
pub mod validation;

#[cfg(test)]
mod tests;
