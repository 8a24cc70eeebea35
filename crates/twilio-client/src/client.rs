//! Twilio REST API client.

use crate::error::TwilioError;
use crate::types::*;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, instrument, warn};

/// Production Twilio REST API host.
pub const DEFAULT_BASE_URL: &str = "https://api.twilio.com";

/// Twilio Messaging client.
///
/// The auth token is stored using `SecretString` to prevent accidental
/// exposure in logs or debug output.
#[derive(Clone)]
pub struct TwilioClient {
    client: Client,
    base_url: String,
    account_sid: String,
    auth_token: SecretString,
}

impl TwilioClient {
    /// Create a new Twilio client.
    pub fn new(
        base_url: impl Into<String>,
        account_sid: impl Into<String>,
        auth_token: SecretString,
    ) -> Result<Self, TwilioError> {
        let client = Client::builder().build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            account_sid: account_sid.into(),
            auth_token,
        })
    }

    fn messages_url(&self) -> String {
        format!(
            "{}/2010-04-01/Accounts/{}/Messages.json",
            self.base_url, self.account_sid
        )
    }

    /// Create (send) an SMS message.
    #[instrument(skip(self, body), fields(body_len = body.len()))]
    pub async fn send_sms(
        &self,
        from: &str,
        to: &str,
        body: &str,
    ) -> Result<MessageResource, TwilioError> {
        let request = CreateMessageRequest { from, to, body };

        let response = self
            .client
            .post(self.messages_url())
            .basic_auth(&self.account_sid, Some(self.auth_token.expose_secret()))
            .form(&request)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            warn!(%status, body = %text, "Twilio message create failed");

            return Err(match serde_json::from_str::<ApiErrorBody>(&text) {
                Ok(error) => TwilioError::Api {
                    status: status.as_u16(),
                    code: error.code,
                    message: error.message,
                },
                Err(_) => TwilioError::Api {
                    status: status.as_u16(),
                    code: None,
                    message: text,
                },
            });
        }

        let message: MessageResource = serde_json::from_str(&text)?;
        debug!(sid = %message.sid, status = ?message.status, "Twilio message created");
        Ok(message)
    }
}
