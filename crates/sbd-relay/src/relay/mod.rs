//! The two translation paths between satellite and SMS.

mod satellite;
mod telephone;

pub use satellite::SatelliteMessage;
pub use telephone::{TelephoneMessage, TelephoneRequest};

use crate::directory::Directory;
use crate::gateway::{SatelliteGateway, SmsGateway};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use std::sync::Arc;
use twilio_client::{twiml, RequestValidator};

const TEXT_PLAIN: &str = "text/plain";

/// Webhook reply: status, content type and body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayResponse {
    status: StatusCode,
    content_type: &'static str,
    body: String,
}

impl RelayResponse {
    /// Plain-text reply.
    pub fn text(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            content_type: TEXT_PLAIN,
            body: body.into(),
        }
    }

    /// Empty TwiML acknowledgement.
    pub fn twiml_ack(status: StatusCode) -> Self {
        Self {
            status,
            content_type: twiml::CONTENT_TYPE,
            body: twiml::EMPTY_MESSAGING_RESPONSE.to_string(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn content_type(&self) -> &'static str {
        self.content_type
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}

impl IntoResponse for RelayResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, self.content_type)],
            self.body,
        )
            .into_response()
    }
}

/// Per-deployment relay behaviour.
#[derive(Debug, Clone)]
pub struct RelaySettings {
    /// Twilio number SMS are sent from
    pub sms_from_number: String,
    /// Answer 500 instead of 200 when the RockBLOCK call fails in transport
    pub surface_mt_transport_errors: bool,
}

/// Translates inbound webhooks from one network into a send on the other.
///
/// Holds only read-only state, so one instance serves every request.
pub struct Relay {
    directory: Directory,
    sms: Arc<dyn SmsGateway>,
    satellite: Arc<dyn SatelliteGateway>,
    validator: RequestValidator,
    settings: RelaySettings,
}

impl Relay {
    pub fn new(
        directory: Directory,
        sms: Arc<dyn SmsGateway>,
        satellite: Arc<dyn SatelliteGateway>,
        validator: RequestValidator,
        settings: RelaySettings,
    ) -> Self {
        Self {
            directory,
            sms,
            satellite,
            validator,
            settings,
        }
    }

    pub fn directory(&self) -> &Directory {
        &self.directory
    }
}
