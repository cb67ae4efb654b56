//! Tagged envelope over every request kind the service accepts.

use serde::{Deserialize, Serialize};

use super::{GetMessageRequest, JoinJourneyRequest, UpdateUserInfoRequest};
use crate::request::{
    ports::validator::{Validatable, ValidationConfig},
    validation::rules::RuleSet,
};

/// An inbound request of any supported kind.
///
/// On the wire the kind is carried in a `type` field alongside the request's
/// own fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum JourneyRequest {
    /// Join a shared journey.
    JoinJourney(JoinJourneyRequest),
    /// Fetch a page of messages.
    GetMessages(GetMessageRequest),
    /// Update profile information.
    UpdateUserInfo(UpdateUserInfoRequest),
}

impl JourneyRequest {
    /// Kind names accepted in the `type` field.
    pub const KINDS: [&'static str; 3] = [
        JoinJourneyRequest::KIND,
        GetMessageRequest::KIND,
        UpdateUserInfoRequest::KIND,
    ];

    fn inner(&self) -> &dyn Validatable {
        match self {
            Self::JoinJourney(request) => request,
            Self::GetMessages(request) => request,
            Self::UpdateUserInfo(request) => request,
        }
    }
}

impl Validatable for JourneyRequest {
    fn kind(&self) -> &'static str {
        self.inner().kind()
    }

    fn rules(&self, config: &ValidationConfig) -> RuleSet<'_> {
        self.inner().rules(config)
    }
}

impl From<JoinJourneyRequest> for JourneyRequest {
    fn from(request: JoinJourneyRequest) -> Self {
        Self::JoinJourney(request)
    }
}

impl From<GetMessageRequest> for JourneyRequest {
    fn from(request: GetMessageRequest) -> Self {
        Self::GetMessages(request)
    }
}

impl From<UpdateUserInfoRequest> for JourneyRequest {
    fn from(request: UpdateUserInfoRequest) -> Self {
        Self::UpdateUserInfo(request)
    }
}
