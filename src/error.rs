use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors returned by LNPay operations.
#[derive(Debug, Error)]
pub enum LnPayError {
    /// The request never completed (DNS, connect, TLS), or a success body
    /// failed to decode into the declared result type.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a status of 300 or above; the body is the
    /// decoded error it sent back.
    #[error("api error: {0}")]
    Api(ApiError),
}

impl LnPayError {
    /// The structured API error, if this failure came from the remote service.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            LnPayError::Api(err) => Some(err),
            LnPayError::Transport(_) => None,
        }
    }
}

/// Error body the LNPay API returns on non-success responses.
///
/// All fields are defaulted: when the body is not the expected shape, the
/// error still carries the HTTP status it arrived with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(default)]
#[error("{name} (status {status}): {message}")]
pub struct ApiError {
    pub name: String,
    pub message: String,
    pub code: i64,
    pub status: u16,
}

impl ApiError {
    /// Decode an error response body, falling back to an empty error that
    /// records only the HTTP status when the body is not valid JSON.
    pub(crate) fn from_body(status: u16, body: &[u8]) -> Self {
        let mut err: ApiError = serde_json::from_slice(body).unwrap_or_default();
        if err.status == 0 {
            err.status = status;
        }
        err
    }
}
