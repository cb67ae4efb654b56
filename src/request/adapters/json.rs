//! JSON decoding of inbound request payloads.
//!
//! Decoding only establishes shape: absent fields become `None`, and no
//! validation rules run here. The decoded request must still pass the gate.

use serde_json::Value;

use crate::request::{domain::JourneyRequest, error::DecodeError};

/// Name of the envelope field carrying the request kind.
pub const KIND_FIELD: &str = "type";

/// Decodes a JSON envelope such as
/// `{"type": "getMessages", "userId": "u1", "from": 0, "len": 20}`.
///
/// # Errors
///
/// Returns [`DecodeError::MissingKind`] when the `type` field is absent or not
/// a string, [`DecodeError::UnknownKind`] for an unsupported kind, and
/// [`DecodeError::Malformed`] when the payload is not JSON or a field has the
/// wrong type.
///
/// # Examples
///
/// ```
/// use journey_gate::request::adapters::json::decode_request;
/// use journey_gate::request::domain::{JoinJourneyRequest, JourneyRequest};
///
/// let request = decode_request(r#"{"type": "joinJourney", "journeyId": "j-1"}"#)
///     .expect("valid payload");
/// assert_eq!(request, JourneyRequest::JoinJourney(JoinJourneyRequest::new("j-1")));
/// ```
pub fn decode_request(payload: &str) -> Result<JourneyRequest, DecodeError> {
    let value: Value = serde_json::from_str(payload)?;
    decode_value(value)
}

/// Decodes an already-parsed JSON envelope.
///
/// # Errors
///
/// See [`decode_request`].
pub fn decode_value(value: Value) -> Result<JourneyRequest, DecodeError> {
    let kind = value
        .get(KIND_FIELD)
        .and_then(Value::as_str)
        .ok_or(DecodeError::MissingKind)?;

    if !JourneyRequest::KINDS.contains(&kind) {
        return Err(DecodeError::UnknownKind(kind.to_owned()));
    }

    Ok(serde_json::from_value(value)?)
}
