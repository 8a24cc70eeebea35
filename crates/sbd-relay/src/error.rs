//! Error types for the relay.

use crate::relay::RelayResponse;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Errors that end a webhook invocation early.
///
/// Each variant maps onto one fixed status/body pair of the webhook
/// response contract.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Device not registered: {0}")]
    NotRegistered(String),

    #[error("Bad signature")]
    BadSignature,

    #[error("Malformed request: {0}")]
    Malformed(String),

    #[error("SMS delivery failed: {0}")]
    SmsDelivery(#[from] twilio_client::TwilioError),
}

/// Result type alias for relay operations.
pub type RelayResult<T> = Result<T, RelayError>;

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            RelayError::NotRegistered(_) => (StatusCode::FORBIDDEN, "Not registered".to_string()),
            RelayError::BadSignature => (StatusCode::FORBIDDEN, "Bad signature".to_string()),
            RelayError::Malformed(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            RelayError::SmsDelivery(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "not ok".to_string())
            }
        };

        RelayResponse::text(status, body).into_response()
    }
}

impl From<CodecError> for RelayError {
    fn from(e: CodecError) -> Self {
        RelayError::Malformed(e.to_string())
    }
}

/// Hex payload decoding errors.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("invalid hex payload: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

/// Address directory load errors.
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("Failed to read directory file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse directory file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Empty device id or phone number in entry {device_id:?} -> {phone_number:?}")]
    EmptyEntry {
        device_id: String,
        phone_number: String,
    },

    #[error("Device {0} listed more than once")]
    DuplicateDevice(String),

    #[error("Phone number {phone_number} mapped to both {first} and {second}")]
    DuplicatePhoneNumber {
        phone_number: String,
        first: String,
        second: String,
    },
}
