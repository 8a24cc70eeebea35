//! RockBLOCK HTTP client.

use crate::error::RockblockError;
use crate::types::*;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, instrument, warn};

/// Production RockBLOCK web services host.
pub const DEFAULT_BASE_URL: &str = "https://core.rock7.com";

const MT_ENDPOINT: &str = "/rockblock/MT";

/// RockBLOCK web services client.
///
/// The account password is stored using `SecretString` so it never shows up
/// in debug output.
#[derive(Clone)]
pub struct RockblockClient {
    client: Client,
    base_url: String,
    username: String,
    password: SecretString,
}

impl RockblockClient {
    /// Create a new RockBLOCK client.
    ///
    /// No request timeout is set; cancellation is left to the caller.
    pub fn new(
        base_url: impl Into<String>,
        username: impl Into<String>,
        password: SecretString,
    ) -> Result<Self, RockblockError> {
        let client = Client::builder().build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            username: username.into(),
            password,
        })
    }

    /// Queue a mobile-terminated message for a device.
    ///
    /// Any response RockBLOCK completes counts as delivered to the API; the
    /// parsed body says whether it was actually queued. Only transport
    /// failures are errors.
    #[instrument(skip(self, data), fields(data_len = data.len()))]
    pub async fn send_mt(&self, imei: &str, data: &str) -> Result<MtResponse, RockblockError> {
        let request = MtRequest {
            imei,
            username: &self.username,
            password: self.password.expose_secret(),
            data,
        };

        let response = self
            .client
            .post(format!("{}{}", self.base_url, MT_ENDPOINT))
            .form(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        let outcome = MtResponse::parse(&body);

        if outcome.is_accepted() {
            debug!(%status, ?outcome, "MT message accepted");
        } else {
            warn!(%status, ?outcome, "MT message not accepted");
        }

        Ok(outcome)
    }
}
