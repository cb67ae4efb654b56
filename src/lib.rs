//! Journey gate: request validation for a journey sharing service.
//!
//! This crate provides the request payloads accepted by a multi-user journey
//! sharing service and the validation gate every payload must pass before it
//! reaches business logic.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Plain request data with declared rules, no infrastructure
//! - **Ports**: Abstract trait interfaces for validation and request handling
//! - **Adapters**: Concrete transport decoding (JSON)
//!
//! # Modules
//!
//! - [`request`]: Request payloads, validation gate, and dispatch

pub mod request;
