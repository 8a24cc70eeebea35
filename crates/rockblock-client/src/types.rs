//! RockBLOCK API types.

use serde::Serialize;

/// Form body for a mobile-terminated send.
#[derive(Debug, Clone, Serialize)]
pub struct MtRequest<'a> {
    pub imei: &'a str,
    pub username: &'a str,
    pub password: &'a str,
    /// Hex-encoded payload
    pub data: &'a str,
}

/// Outcome reported by the MT endpoint.
///
/// RockBLOCK answers with a single text line, either `OK,<message id>` or
/// `FAILED,<code>,<description>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MtResponse {
    /// Message queued for the device
    Accepted { message_id: String },
    /// Request refused by RockBLOCK (bad credentials, unknown IMEI, no credit, ...)
    Failed { code: u16, description: String },
    /// Body did not match either documented shape
    Unrecognized(String),
}

impl MtResponse {
    /// Parse the raw response body.
    pub fn parse(body: &str) -> Self {
        let body = body.trim();
        let mut parts = body.splitn(3, ',');

        match (parts.next(), parts.next(), parts.next()) {
            (Some("OK"), Some(id), None) if !id.is_empty() => MtResponse::Accepted {
                message_id: id.to_string(),
            },
            (Some("FAILED"), Some(code), description) => match code.trim().parse() {
                Ok(code) => MtResponse::Failed {
                    code,
                    description: description.unwrap_or_default().trim().to_string(),
                },
                Err(_) => MtResponse::Unrecognized(body.to_string()),
            },
            _ => MtResponse::Unrecognized(body.to_string()),
        }
    }

    /// Whether RockBLOCK accepted the message.
    pub fn is_accepted(&self) -> bool {
        matches!(self, MtResponse::Accepted { .. })
    }
}
