//! Request to join an existing shared journey.

use serde::{Deserialize, Serialize};

use crate::request::{
    ports::validator::{Validatable, ValidationConfig},
    validation::rules::{Format, RuleSet, TextConstraint},
};

/// Asks to add the caller to a journey.
///
/// Whether the journey exists is decided by the journey service after the
/// request is admitted, not by the gate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinJourneyRequest {
    /// Identifier of the journey to join.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub journey_id: Option<String>,
}

impl JoinJourneyRequest {
    /// Request kind name.
    pub const KIND: &'static str = "joinJourney";
    /// Wire name of the journey identifier field.
    pub const JOURNEY_ID: &'static str = "journeyId";

    /// Creates a request to join `journey_id`.
    #[must_use]
    pub fn new(journey_id: impl Into<String>) -> Self {
        Self {
            journey_id: Some(journey_id.into()),
        }
    }
}

impl Validatable for JoinJourneyRequest {
    fn kind(&self) -> &'static str {
        Self::KIND
    }

    fn rules(&self, config: &ValidationConfig) -> RuleSet<'_> {
        RuleSet::new().text(
            Self::JOURNEY_ID,
            self.journey_id.as_deref(),
            [
                TextConstraint::Required,
                TextConstraint::max_length(config.max_identifier_length),
                TextConstraint::Format(Format::Identifier),
            ],
        )
    }
}
