//! Behavioural integration tests for request decoding and validation.
//!
//! These tests exercise end-to-end scenarios for inbound requests,
//! verifying that the flow from raw payload through the validation gate
//! produces the expected outcome.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]

use journey_gate::request::{
    adapters::json::decode_request,
    domain::{GetMessageRequest, JoinJourneyRequest, JourneyRequest, UpdateUserInfoRequest},
    error::{GateError, Violation, ViolationKind},
    ports::validator::{ProfilePolicy, RequestValidator, Validatable, ValidationConfig},
    validation::service::ValidationGate,
};

fn kinds(violations: &[Violation]) -> Vec<(&'static str, ViolationKind)> {
    violations.iter().map(|v| (v.field, v.kind)).collect()
}

// ============================================================================
// Scenario: Well-formed payloads are admitted
// ============================================================================

/// When a client sends a complete, well-formed payload of each kind,
/// the gate should admit it.
#[test]
fn well_formed_payloads_are_admitted() {
    // Arrange
    let gate = ValidationGate::new();
    let payloads = [
        r#"{"type": "joinJourney", "journeyId": "journey-42"}"#,
        r#"{"type": "getMessages", "userId": "u1", "from": 0, "len": 20}"#,
        r#"{"type": "updateUserInfo", "username": "rambler", "avatarUrl": "https://img.example.com/r.png", "boi": "Hills"}"#,
    ];

    for payload in payloads {
        // Act
        let request = decode_request(payload).expect("payload should decode");
        let result = gate.validate(&request);

        // Assert
        assert!(result.is_ok(), "{payload} should be admitted: {result:?}");
    }
}

// ============================================================================
// Scenario: Absent fields are violations, not crashes
// ============================================================================

/// When a client omits required fields entirely, each omission should be
/// reported as a missing-field violation.
#[test]
fn omitted_fields_are_reported_as_missing() {
    // Arrange
    let gate = ValidationGate::new();
    let request = decode_request(r#"{"type": "getMessages"}"#).expect("decodes");

    // Act
    let err = gate.validate(&request).expect_err("fields are missing");

    // Assert
    let rejection = err.rejection().expect("field violations");
    assert_eq!(
        kinds(rejection.violations()),
        [
            ("userId", ViolationKind::MissingField),
            ("from", ViolationKind::MissingField),
            ("len", ViolationKind::MissingField),
        ]
    );
}

/// When a client sends an explicit null, it is treated like an omitted field.
#[test]
fn null_journey_id_is_reported_as_missing() {
    let request = decode_request(r#"{"type": "joinJourney", "journeyId": null}"#).expect("decodes");

    let rejection = request.validate().expect_err("journeyId is null");

    assert_eq!(
        kinds(rejection.violations()),
        [("journeyId", ViolationKind::MissingField)]
    );
}

// ============================================================================
// Scenario: Clearing a required field yields one violation
// ============================================================================

/// For every request kind, blanking a single required field reports exactly
/// one missing-field violation naming it.
#[test]
fn clearing_each_required_field_yields_one_violation() {
    let gate = ValidationGate::with_config(
        ValidationConfig::default().with_profile_policy(ProfilePolicy::RequireUsername),
    );
    let cases: [(JourneyRequest, &str); 3] = [
        (JoinJourneyRequest::new("").into(), "journeyId"),
        (GetMessageRequest::new("", 0, 1).into(), "userId"),
        (
            UpdateUserInfoRequest::new()
                .with_username("")
                .with_bio("Cyclist")
                .into(),
            "username",
        ),
    ];

    for (request, field) in cases {
        let err = gate.validate(&request).expect_err("cleared field");
        let rejection = err.rejection().expect("field violations");
        assert_eq!(
            kinds(rejection.violations()),
            [(field, ViolationKind::MissingField)],
            "{} should report only {field}",
            request.kind()
        );
    }
}

// ============================================================================
// Scenario: All violations are reported together
// ============================================================================

/// When a request breaks several independent rules, the client receives
/// all of them in one response.
#[test]
fn independent_violations_are_reported_together() {
    let request = GetMessageRequest::new("", -1, 10);

    let rejection = request.validate().expect_err("two failures");

    assert_eq!(
        kinds(rejection.violations()),
        [
            ("userId", ViolationKind::MissingField),
            ("from", ViolationKind::OutOfRange),
        ]
    );
    let body = serde_json::to_value(&rejection).expect("rejection serialises");
    assert_eq!(body["violations"][1]["kind"], "outOfRange");
}

// ============================================================================
// Scenario: Profile update policy
// ============================================================================

/// An all-default profile update is accepted when fields are optional and
/// rejected on the username alone when the username is required.
#[test]
fn default_profile_update_depends_on_policy() {
    let request = decode_request(
        r#"{"type": "updateUserInfo", "username": "", "avatarUrl": "", "boi": ""}"#,
    )
    .expect("decodes");
    let partial = ValidationGate::new();
    let required = ValidationGate::with_config(
        ValidationConfig::default().with_profile_policy(ProfilePolicy::RequireUsername),
    );

    assert!(partial.validate(&request).is_ok());

    let err = required.validate(&request).expect_err("username required");
    let rejection = err.rejection().expect("field violations");
    assert_eq!(
        kinds(rejection.violations()),
        [("username", ViolationKind::MissingField)]
    );
}

// ============================================================================
// Scenario: Validation is safe to run concurrently
// ============================================================================

/// Many request handlers can share one gate without coordination.
#[test]
fn shared_gate_validates_concurrently() {
    let gate = ValidationGate::new();

    let results: Vec<Result<(), GateError>> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0_i64..8)
            .map(|offset| {
                let shared = &gate;
                scope.spawn(move || {
                    shared.validate(&GetMessageRequest::new("u1", offset - 4, 10))
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().expect("validation thread should not panic"))
            .collect()
    });

    let rejected = results.iter().filter(|result| result.is_err()).count();
    assert_eq!(rejected, 4);
}
