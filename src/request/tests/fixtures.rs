//! Shared fixtures for request validation tests.

use crate::request::{
    domain::{GetMessageRequest, JoinJourneyRequest, UpdateUserInfoRequest},
    error::{Rejection, ViolationKind},
    ports::validator::{ProfilePolicy, Validatable, ValidationConfig},
    validation::{rules::RuleSet, service::ValidationGate},
};
use rstest::fixture;

#[fixture]
pub fn default_gate() -> ValidationGate {
    ValidationGate::new()
}

#[fixture]
pub fn strict_gate() -> ValidationGate {
    ValidationGate::with_config(ValidationConfig::strict())
}

#[fixture]
pub fn username_required_gate() -> ValidationGate {
    ValidationGate::with_config(
        ValidationConfig::default().with_profile_policy(ProfilePolicy::RequireUsername),
    )
}

/// Minimally valid join request.
#[fixture]
pub fn join_request() -> JoinJourneyRequest {
    JoinJourneyRequest::new("j")
}

/// Minimally valid message page request.
#[fixture]
pub fn message_request() -> GetMessageRequest {
    GetMessageRequest::new("u", 0, 1)
}

/// Minimally valid profile update under the username-required policy.
#[fixture]
pub fn profile_request() -> UpdateUserInfoRequest {
    UpdateUserInfoRequest::new().with_username("abc")
}

/// A request kind that declares no rules.
#[derive(Debug, Default)]
pub struct Ping;

impl Validatable for Ping {
    fn kind(&self) -> &'static str {
        "ping"
    }

    fn rules(&self, _config: &ValidationConfig) -> RuleSet<'_> {
        RuleSet::new()
    }
}

/// Returns `(field, kind)` pairs for every violation in order.
pub fn summary(rejection: &Rejection) -> Vec<(&'static str, ViolationKind)> {
    rejection
        .violations()
        .iter()
        .map(|violation| (violation.field, violation.kind))
        .collect()
}
