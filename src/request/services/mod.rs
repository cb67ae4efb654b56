//! Application services for request handling.

mod dispatch;

pub use dispatch::{DispatchResult, RequestDispatcher};
