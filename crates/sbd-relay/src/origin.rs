//! Inbound request origin classification.

/// `User-Agent` prefix Twilio's webhook proxy sends.
pub const TWILIO_USER_AGENT_PREFIX: &str = "TwilioProxy";

/// Which network sent an inbound webhook.
///
/// Classification is a routing heuristic only; Twilio requests are
/// authenticated separately by signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// RockBLOCK mobile-originated delivery
    Satellite,
    /// Twilio incoming SMS
    Telephone,
}

impl Origin {
    /// Classify a request by its `User-Agent` header.
    pub fn classify(user_agent: Option<&str>) -> Self {
        match user_agent {
            Some(ua) if ua.starts_with(TWILIO_USER_AGENT_PREFIX) => Origin::Telephone,
            _ => Origin::Satellite,
        }
    }
}
