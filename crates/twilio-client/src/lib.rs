//! Twilio Messaging client: outbound SMS, inbound webhook validation and
//! TwiML acknowledgements.

mod client;
mod error;
pub mod signature;
pub mod twiml;
mod types;

pub use client::{TwilioClient, DEFAULT_BASE_URL};
pub use error::TwilioError;
pub use signature::{RequestValidator, SIGNATURE_HEADER};
pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::SecretString;
    use wiremock::matchers::{basic_auth, body_string_contains, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const MESSAGES_PATH: &str = "/2010-04-01/Accounts/ACtest/Messages.json";

    fn create_test_client(mock_server: &MockServer) -> TwilioClient {
        TwilioClient::new(
            mock_server.uri(),
            "ACtest",
            SecretString::new("test-token".into()),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_send_sms() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(MESSAGES_PATH))
            .and(basic_auth("ACtest", "test-token"))
            .and(body_string_contains("From=%2B15550001111"))
            .and(body_string_contains("To=15551234567"))
            .and(body_string_contains("Body=Hello%3Aworld"))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "sid": "SM123",
                "status": "queued",
                "from": "+15550001111",
                "to": "15551234567",
                "body": "Hello:world"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        let result = client
            .send_sms("+15550001111", "15551234567", "Hello:world")
            .await;

        assert!(result.is_ok());
        let message = result.unwrap();
        assert_eq!(message.sid, "SM123");
        assert_eq!(message.status.as_deref(), Some("queued"));
    }

    #[tokio::test]
    async fn test_send_sms_api_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(MESSAGES_PATH))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "code": 21211,
                "message": "The 'To' number 123 is not a valid phone number.",
                "more_info": "https://www.twilio.com/docs/errors/21211",
                "status": 400
            })))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        let result = client.send_sms("+15550001111", "123", "Hi").await;

        match result {
            Err(TwilioError::Api {
                status,
                code,
                message,
            }) => {
                assert_eq!(status, 400);
                assert_eq!(code, Some(21211));
                assert!(message.contains("not a valid phone number"));
            }
            other => panic!("expected API error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_send_sms_unparseable_error_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(MESSAGES_PATH))
            .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        let result = client.send_sms("+15550001111", "15551234567", "Hi").await;

        assert!(matches!(
            result,
            Err(TwilioError::Api {
                status: 503,
                code: None,
                ..
            })
        ));
    }

    #[test]
    fn test_empty_messaging_response() {
        assert!(twiml::EMPTY_MESSAGING_RESPONSE.ends_with("<Response/>"));
        assert_eq!(twiml::CONTENT_TYPE, "text/xml");
    }
}
