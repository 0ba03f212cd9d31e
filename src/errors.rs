use thiserror::Error;

/// Errors surfaced by the Simwood client.
///
/// Every remote call returns a `Result` with one of these variants on
/// failure; there are no sentinel values in response maps.
#[derive(Error, Debug, Clone)]
pub enum Error {
    /// Connection-level failure before a response was received.
    #[error("transport error: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    #[error("HTTP error (status {status}): {body}")]
    Http { status: u16, body: String },

    /// A JSON-format response body could not be decoded.
    #[error("JSON parse error: {0}")]
    JsonParse(String),

    /// A decoded response is missing a field the protocol requires.
    #[error("malformed {mode} response: {reason}")]
    MalformedResponse { mode: String, reason: String },

    /// The AUTH call returned a non-success status.
    #[error("could not authenticate you")]
    AuthRejected,

    /// `user` or `password` is unset but a signed call was attempted.
    #[error("user and password are required for authentication")]
    MissingCredentials,
}

impl Error {
    pub(crate) fn malformed(mode: &str, reason: impl Into<String>) -> Self {
        Error::MalformedResponse {
            mode: mode.to_string(),
            reason: reason.into(),
        }
    }
}
