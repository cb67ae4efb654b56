//! Adapters between transports and typed requests.

pub mod json;
