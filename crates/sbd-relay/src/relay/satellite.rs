//! Satellite → SMS path.

use super::{Relay, RelayResponse};
use crate::codec::{self, ADDRESS_DELIMITER};
use crate::error::{RelayError, RelayResult};
use axum::http::StatusCode;
use tracing::{error, info, instrument, warn};

/// A mobile-originated message delivered by RockBLOCK.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SatelliteMessage {
    pub device_id: String,
    /// Hex of `<destination number>:<body>`
    pub hex_payload: String,
}

impl Relay {
    /// Forward a satellite message as one SMS.
    ///
    /// The device must be in the directory. Its payload names the destination
    /// number; the SMS is sent from the relay's own Twilio number.
    #[instrument(skip(self, message), fields(imei = %message.device_id))]
    pub async fn relay_to_sms(&self, message: SatelliteMessage) -> RelayResult<RelayResponse> {
        let Some(sender) = self.directory.resolve_device_to_phone(&message.device_id) else {
            warn!("Message from unregistered device");
            return Err(RelayError::NotRegistered(message.device_id));
        };

        let decoded = codec::hex_decode(&message.hex_payload)?;
        let (destination, body) = codec::split_address_and_body(&decoded, ADDRESS_DELIMITER);
        let destination = destination.trim();

        if !decoded.contains(ADDRESS_DELIMITER) || destination.is_empty() {
            warn!(payload = %decoded, "Satellite payload has no destination number");
            return Err(RelayError::Malformed(
                "payload has no destination number".into(),
            ));
        }

        match self
            .sms
            .send_sms(&self.settings.sms_from_number, destination, body)
            .await
        {
            Ok(sent) => {
                info!(%sender, %destination, sid = %sent.sid, "Relayed satellite message to SMS");
                Ok(RelayResponse::text(StatusCode::OK, "ok"))
            }
            Err(e) => {
                error!(%sender, %destination, error = %e, "Error response from Twilio");
                Err(RelayError::SmsDelivery(e))
            }
        }
    }
}
