//! Twilio REST API types.

use serde::{Deserialize, Serialize};

/// Form body for `POST /Accounts/{sid}/Messages.json`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateMessageRequest<'a> {
    pub from: &'a str,
    pub to: &'a str,
    pub body: &'a str,
}

/// Message resource returned on creation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessageResource {
    pub sid: String,
    #[serde(default)]
    pub status: Option<String>,
}

/// Error body returned by the REST API.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub code: Option<u32>,
    pub message: String,
}
