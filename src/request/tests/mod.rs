//! Unit tests for the request module.
//!
//! Tests are organised by concern, covering each request kind's rule table,
//! the gate's collection semantics, and dispatch.

mod fixtures;
