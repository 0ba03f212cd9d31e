//! Decoded response payloads and the typed envelopes for built-in modes.

use std::collections::HashMap;

use serde::Deserialize;

use crate::{prelude::*, Error};

/// A decoded response body.
///
/// JSON-format requests decode to `Json`; anything else (the API's XML
/// output included) is stored verbatim as `Raw`.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Json(serde_json::Value),
    Raw(String),
}

impl Payload {
    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            Payload::Json(value) => Some(value),
            Payload::Raw(_) => None,
        }
    }

    pub fn as_raw(&self) -> Option<&str> {
        match self {
            Payload::Json(_) => None,
            Payload::Raw(text) => Some(text),
        }
    }
}

/// Responses from one [`run`](crate::SimwoodClient::run), keyed by mode.
pub type ResponseMap = HashMap<String, Payload>;

/// Common shape of the API's JSON responses: a numeric `status` (1 on
/// success) and a mode-specific `results` object.
#[derive(Deserialize, Debug)]
pub(crate) struct Envelope<T> {
    pub(crate) status: i64,
    pub(crate) results: Option<T>,
}

#[derive(Deserialize, Debug)]
pub(crate) struct AuthResults {
    pub(crate) token: String,
}

#[derive(Deserialize, Debug)]
pub(crate) struct IpResults {
    pub(crate) ip: String,
}

#[derive(Deserialize, Debug)]
pub(crate) struct TimeResults {
    pub(crate) timestamp: u64,
}

impl<T: for<'a> Deserialize<'a>> Envelope<T> {
    /// Decode a JSON body into an envelope, then require `status == 1` and
    /// a present `results` object.
    pub(crate) fn decode_success(mode: &str, body: &str) -> Result<T> {
        let envelope: Envelope<T> =
            serde_json::from_str(body).map_err(|e| Error::JsonParse(e.to_string()))?;
        if envelope.status != 1 {
            return Err(Error::malformed(
                mode,
                format!("status {}", envelope.status),
            ));
        }
        envelope
            .results
            .ok_or_else(|| Error::malformed(mode, "missing results"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_success_extracts_results() {
        let body = r#"{"status":1,"results":{"ip":"1.2.3.4"}}"#;
        let results: IpResults = Envelope::decode_success("MYIP", body).unwrap();
        assert_eq!(results.ip, "1.2.3.4");
    }

    #[test]
    fn decode_success_rejects_failure_status() {
        let body = r#"{"status":0,"results":null}"#;
        let err = Envelope::<TimeResults>::decode_success("TIME", body).unwrap_err();
        assert!(matches!(err, Error::MalformedResponse { .. }));
    }

    #[test]
    fn decode_success_rejects_missing_results() {
        let body = r#"{"status":1}"#;
        let err = Envelope::<AuthResults>::decode_success("AUTH", body).unwrap_err();
        assert!(matches!(err, Error::MalformedResponse { .. }));
    }

    #[test]
    fn decode_success_rejects_bad_json() {
        let err = Envelope::<AuthResults>::decode_success("AUTH", "<xml/>").unwrap_err();
        assert!(matches!(err, Error::JsonParse(_)));
    }

    #[test]
    fn payload_accessors() {
        let json = Payload::Json(serde_json::json!({"status": 1}));
        assert!(json.as_json().is_some());
        assert!(json.as_raw().is_none());

        let raw = Payload::Raw("<response/>".to_string());
        assert_eq!(raw.as_raw(), Some("<response/>"));
        assert!(raw.as_json().is_none());
    }
}
