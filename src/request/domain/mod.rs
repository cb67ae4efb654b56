//! Request payloads accepted by the journey sharing service.
//!
//! Each payload is plain data that declares its own validation rules. Fields
//! are `Option` so that "not sent" and "sent empty" stay distinguishable.

mod envelope;
mod get_message;
mod join_journey;
mod update_user_info;

pub use envelope::JourneyRequest;
pub use get_message::GetMessageRequest;
pub use join_journey::JoinJourneyRequest;
pub use update_user_info::UpdateUserInfoRequest;
