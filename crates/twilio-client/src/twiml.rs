//! TwiML webhook replies.

/// Content type Twilio expects for TwiML.
pub const CONTENT_TYPE: &str = "text/xml";

/// A `<Response>` with no verbs: acknowledges the webhook without replying.
pub const EMPTY_MESSAGING_RESPONSE: &str = r#"<?xml version="1.0" encoding="UTF-8"?><Response/>"#;
