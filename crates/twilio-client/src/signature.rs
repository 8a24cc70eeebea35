//! Webhook request signing (`X-Twilio-Signature`).
//!
//! Twilio signs each webhook with HMAC-SHA1 keyed by the account auth token.
//! The signed data is the full request URL followed by every POST parameter,
//! sorted by name, appended as `name` + `value` with no separators. The
//! digest is sent base64-encoded.

use base64::{engine::general_purpose::STANDARD, Engine};
use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use sha1::Sha1;

/// Header carrying the request signature.
pub const SIGNATURE_HEADER: &str = "X-Twilio-Signature";

type HmacSha1 = Hmac<Sha1>;

fn signing_mac(url: &str, params: &[(String, String)], auth_token: &str) -> HmacSha1 {
    let mut sorted: Vec<&(String, String)> = params.iter().collect();
    sorted.sort();

    let mut mac =
        HmacSha1::new_from_slice(auth_token.as_bytes()).expect("HMAC accepts any key length");
    mac.update(url.as_bytes());
    for (name, value) in sorted {
        mac.update(name.as_bytes());
        mac.update(value.as_bytes());
    }
    mac
}

/// Compute the signature Twilio would send for this request.
pub fn compute_signature(url: &str, params: &[(String, String)], auth_token: &str) -> String {
    STANDARD.encode(signing_mac(url, params, auth_token).finalize().into_bytes())
}

/// Check a received signature against the one recomputed from the request.
///
/// The digest comparison runs in constant time. A signature that is not
/// valid base64 never matches.
pub fn validate_signature(
    signature: &str,
    url: &str,
    params: &[(String, String)],
    auth_token: &str,
) -> bool {
    let Ok(received) = STANDARD.decode(signature.trim()) else {
        return false;
    };

    signing_mac(url, params, auth_token)
        .verify_slice(&received)
        .is_ok()
}

/// Validates inbound webhooks with the account auth token.
#[derive(Debug, Clone)]
pub struct RequestValidator {
    auth_token: SecretString,
}

impl RequestValidator {
    pub fn new(auth_token: SecretString) -> Self {
        Self { auth_token }
    }

    /// Whether `signature` was produced for this URL and parameter set.
    pub fn validate(&self, signature: &str, url: &str, params: &[(String, String)]) -> bool {
        validate_signature(signature, url, params, self.auth_token.expose_secret())
    }

    /// Sign a request the way Twilio does.
    pub fn sign(&self, url: &str, params: &[(String, String)]) -> String {
        compute_signature(url, params, self.auth_token.expose_secret())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AUTH_TOKEN: &str = "12345";
    const URL: &str = "https://mycompany.com/myapp.php?foo=1&bar=2";
    // Published example from Twilio's webhook security documentation
    const EXPECTED: &str = "RSOYDt4T1cUTdK1PDd93/VVr8B8=";

    fn params() -> Vec<(String, String)> {
        [
            ("CallSid", "CA1234567890ABCDE"),
            ("Caller", "+14158675309"),
            ("Digits", "1234"),
            ("From", "+14158675309"),
            ("To", "+18005551212"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    #[test]
    fn test_compute_signature_known_vector() {
        assert_eq!(compute_signature(URL, &params(), AUTH_TOKEN), EXPECTED);
    }

    #[test]
    fn test_parameter_order_does_not_matter() {
        let mut reversed = params();
        reversed.reverse();
        assert_eq!(compute_signature(URL, &reversed, AUTH_TOKEN), EXPECTED);
    }

    #[test]
    fn test_validate_signature() {
        assert!(validate_signature(EXPECTED, URL, &params(), AUTH_TOKEN));
        assert!(!validate_signature(EXPECTED, URL, &params(), "54321"));
        assert!(!validate_signature(
            EXPECTED,
            "https://mycompany.com/other.php",
            &params(),
            AUTH_TOKEN
        ));
    }

    #[test]
    fn test_tampered_parameter_rejected() {
        let mut tampered = params();
        tampered[2].1 = "9999".into();
        assert!(!validate_signature(EXPECTED, URL, &tampered, AUTH_TOKEN));
    }

    #[test]
    fn test_malformed_signature_rejected() {
        assert!(!validate_signature("", URL, &params(), AUTH_TOKEN));
        assert!(!validate_signature("not base64!!", URL, &params(), AUTH_TOKEN));
        // Valid base64, wrong length
        assert!(!validate_signature("AAAA", URL, &params(), AUTH_TOKEN));
    }

    #[test]
    fn test_request_validator() {
        let validator = RequestValidator::new(SecretString::new(AUTH_TOKEN.into()));
        let signature = validator.sign(URL, &params());

        assert_eq!(signature, EXPECTED);
        assert!(validator.validate(&signature, URL, &params()));
        assert!(!format!("{:?}", validator).contains(AUTH_TOKEN));
    }
}
