//! Outbound provider seams.
//!
//! The relay only talks to the two networks through these traits, so the
//! translation paths can be driven without live provider accounts.

use async_trait::async_trait;
use rockblock_client::{MtResponse, RockblockClient, RockblockError};
use twilio_client::{MessageResource, TwilioClient, TwilioError};

#[cfg(test)]
use mockall::automock;

/// Sends SMS through the telephone network.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SmsGateway: Send + Sync {
    async fn send_sms(&self, from: &str, to: &str, body: &str)
        -> Result<MessageResource, TwilioError>;
}

/// Sends mobile-terminated messages to satellite devices.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SatelliteGateway: Send + Sync {
    async fn send_mt(&self, imei: &str, hex_data: &str) -> Result<MtResponse, RockblockError>;
}

#[async_trait]
impl SmsGateway for TwilioClient {
    async fn send_sms(
        &self,
        from: &str,
        to: &str,
        body: &str,
    ) -> Result<MessageResource, TwilioError> {
        TwilioClient::send_sms(self, from, to, body).await
    }
}

#[async_trait]
impl SatelliteGateway for RockblockClient {
    async fn send_mt(&self, imei: &str, hex_data: &str) -> Result<MtResponse, RockblockError> {
        RockblockClient::send_mt(self, imei, hex_data).await
    }
}
