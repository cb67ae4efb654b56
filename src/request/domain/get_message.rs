//! Request for a page of a user's journey messages.

use std::ops::Bound;

use serde::{Deserialize, Serialize};

use crate::request::{
    ports::validator::{Validatable, ValidationConfig},
    validation::rules::{Format, IntegerConstraint, RuleSet, TextConstraint},
};

/// Fetches `len` messages for a user, starting at offset `from`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetMessageRequest {
    /// User whose messages are requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// Zero-based offset of the first message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<i64>,
    /// Number of messages to return.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub len: Option<i64>,
}

impl GetMessageRequest {
    /// Request kind name.
    pub const KIND: &'static str = "getMessages";
    /// Wire name of the user identifier field.
    pub const USER_ID: &'static str = "userId";
    /// Wire name of the window offset field.
    pub const FROM: &'static str = "from";
    /// Wire name of the window length field.
    pub const LEN: &'static str = "len";

    /// Creates a request for the window `[from, from + len)`.
    #[must_use]
    pub fn new(user_id: impl Into<String>, from: i64, len: i64) -> Self {
        Self {
            user_id: Some(user_id.into()),
            from: Some(from),
            len: Some(len),
        }
    }
}

impl Validatable for GetMessageRequest {
    fn kind(&self) -> &'static str {
        Self::KIND
    }

    fn rules(&self, config: &ValidationConfig) -> RuleSet<'_> {
        RuleSet::new()
            .text(
                Self::USER_ID,
                self.user_id.as_deref(),
                [
                    TextConstraint::Required,
                    TextConstraint::max_length(config.max_identifier_length),
                    TextConstraint::Format(Format::Identifier),
                ],
            )
            .integer(
                Self::FROM,
                self.from,
                [IntegerConstraint::Required, IntegerConstraint::at_least(0)],
            )
            .integer(
                Self::LEN,
                self.len,
                [
                    IntegerConstraint::Required,
                    IntegerConstraint::range(
                        Bound::Excluded(0),
                        Bound::Included(config.max_page_length),
                    ),
                ],
            )
    }
}
