//! Common test utilities for integration tests.

use rockblock_client::RockblockClient;
use sbd_relay::{api::AppState, Directory, Relay, RelaySettings};
use secrecy::SecretString;
use std::sync::Arc;
use twilio_client::{RequestValidator, TwilioClient};
use urlencoding::encode;
use wiremock::MockServer;

pub const AUTH_TOKEN: &str = "test-auth-token";
pub const ACCOUNT_SID: &str = "ACtest";
pub const FROM_NUMBER: &str = "+15550001111";
pub const HOST: &str = "relay.example.com";
pub const MESSAGES_PATH: &str = "/2010-04-01/Accounts/ACtest/Messages.json";

/// Directory used across scenarios.
pub fn test_directory() -> Directory {
    Directory::from_entries([("300025010000001", "15551234567"), ("D1", "15559998888")])
        .unwrap()
}

/// Build app state whose clients point at the given mock servers.
pub fn test_state(twilio: &MockServer, rockblock_url: &str, surface: bool) -> AppState {
    let twilio_client = TwilioClient::new(
        twilio.uri(),
        ACCOUNT_SID,
        SecretString::new(AUTH_TOKEN.into()),
    )
    .unwrap();
    let rockblock_client = RockblockClient::new(
        rockblock_url,
        "rb-user",
        SecretString::new("rb-pass".into()),
    )
    .unwrap();

    let relay = Relay::new(
        test_directory(),
        Arc::new(twilio_client),
        Arc::new(rockblock_client),
        RequestValidator::new(SecretString::new(AUTH_TOKEN.into())),
        RelaySettings {
            sms_from_number: FROM_NUMBER.into(),
            surface_mt_transport_errors: surface,
        },
    );

    AppState::new(relay, None)
}

/// URL-encode a form body.
pub fn form_body(params: &[(&str, &str)]) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{}={}", encode(k), encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Sign form parameters for `https://<HOST><path>`.
pub fn sign(path: &str, params: &[(&str, &str)]) -> String {
    let owned: Vec<(String, String)> = params
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    RequestValidator::new(SecretString::new(AUTH_TOKEN.into()))
        .sign(&format!("https://{}{}", HOST, path), &owned)
}
