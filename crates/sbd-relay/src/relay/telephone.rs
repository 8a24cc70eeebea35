//! SMS → satellite path.

use super::{Relay, RelayResponse};
use crate::codec::{self, ADDRESS_DELIMITER};
use crate::error::{RelayError, RelayResult};
use axum::http::StatusCode;
use rockblock_client::MtResponse;
use tracing::{error, info, instrument, warn};

/// A Twilio incoming-message webhook as received, before validation.
#[derive(Debug, Clone)]
pub struct TelephoneRequest {
    /// Full URL Twilio posted to, used for the signature
    pub url: String,
    /// `X-Twilio-Signature` header value
    pub signature: Option<String>,
    /// Every form parameter, in the order received
    pub params: Vec<(String, String)>,
}

/// The fields of an incoming SMS the relay acts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelephoneMessage {
    pub from: String,
    pub to: String,
    pub body: String,
}

impl TelephoneMessage {
    /// Pick `From`, `To` and `Body` out of the webhook form.
    pub fn from_params(params: &[(String, String)]) -> RelayResult<Self> {
        let field = |name: &str| {
            params
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.clone())
                .ok_or_else(|| RelayError::Malformed(format!("missing field `{}`", name)))
        };

        Ok(Self {
            from: field("From")?,
            to: field("To")?,
            body: field("Body")?,
        })
    }
}

impl Relay {
    /// Forward a validated SMS to the destination's satellite device.
    ///
    /// Once the signature checks out, Twilio always gets an acknowledgement:
    /// an unregistered destination is answered with 200 so Twilio does not
    /// retry, and RockBLOCK failures are only logged.
    #[instrument(skip_all, fields(url = %request.url))]
    pub async fn relay_to_satellite(&self, request: TelephoneRequest) -> RelayResult<RelayResponse> {
        let TelephoneRequest {
            url,
            signature,
            params,
        } = request;

        let signature = signature.unwrap_or_default();
        if !self.validator.validate(&signature, &url, &params) {
            warn!(%url, ?params, %signature, "Twilio signature validation failed");
            return Err(RelayError::BadSignature);
        }

        let message = TelephoneMessage::from_params(&params)?;

        let Some(imei) = self.directory.resolve_phone_to_device(&message.to) else {
            info!(to = %message.to, "SMS to unregistered number");
            return Ok(RelayResponse::text(
                StatusCode::OK,
                format!("Error: {} is not registered.", message.to),
            ));
        };

        let payload = codec::text_encode_to_hex(&codec::compose_address_and_body(
            &message.from,
            &message.body,
            ADDRESS_DELIMITER,
        ));

        match self.satellite.send_mt(imei, &payload).await {
            Ok(MtResponse::Accepted { message_id }) => {
                info!(%imei, from = %message.from, %message_id, "Relayed SMS to satellite");
            }
            Ok(outcome) => {
                warn!(%imei, ?outcome, "RockBLOCK did not accept MT message");
            }
            Err(e) => {
                error!(%imei, error = %e, "Error sending request to RockBLOCK");
                if self.settings.surface_mt_transport_errors {
                    return Ok(RelayResponse::twiml_ack(StatusCode::INTERNAL_SERVER_ERROR));
                }
            }
        }

        Ok(RelayResponse::twiml_ack(StatusCode::OK))
    }
}
