//! Payload transcoding between the SBD hex wire format and text.
//!
//! Satellite payloads are `<phone number>:<message body>` sent as hex. Phone
//! numbers never contain the delimiter, bodies may, so only the first
//! delimiter separates the two.

use crate::error::CodecError;

/// Separates the phone number from the message body.
pub const ADDRESS_DELIMITER: char = ':';

/// Decode a hex payload to text. Invalid UTF-8 sequences are replaced.
pub fn hex_decode(hex: &str) -> Result<String, CodecError> {
    let bytes = hex::decode(hex.trim())?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Encode text as lowercase hex of its UTF-8 bytes.
pub fn text_encode_to_hex(text: &str) -> String {
    hex::encode(text.as_bytes())
}

/// Split on the first `delimiter`. Everything after it, further delimiters
/// included, is the tail. Without a delimiter the tail is empty.
pub fn split_address_and_body(s: &str, delimiter: char) -> (&str, &str) {
    s.split_once(delimiter).unwrap_or((s, ""))
}

/// Join an address and body into a single payload.
pub fn compose_address_and_body(address: &str, body: &str, delimiter: char) -> String {
    format!("{address}{delimiter}{body}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_round_trip() {
        for text in ["", "Hello", "15551234567:hello:world", "caf\u{e9} \u{1f6f0}"] {
            assert_eq!(hex_decode(&text_encode_to_hex(text)).unwrap(), text);
        }
    }

    #[test]
    fn test_hex_encoding_is_lowercase_ascii() {
        assert_eq!(
            text_encode_to_hex("15551234567:Hello"),
            "31353535313233343536373a48656c6c6f"
        );
    }

    #[test]
    fn test_hex_decode_accepts_uppercase() {
        assert_eq!(hex_decode("48454C4C4F").unwrap(), "HELLO");
    }

    #[test]
    fn test_hex_decode_invalid() {
        assert!(matches!(hex_decode("zz"), Err(CodecError::InvalidHex(_))));
        assert!(matches!(hex_decode("abc"), Err(CodecError::InvalidHex(_))));
    }

    #[test]
    fn test_hex_decode_invalid_utf8_is_lossy() {
        assert_eq!(hex_decode("41ff42").unwrap(), "A\u{fffd}B");
    }

    #[test]
    fn test_split_keeps_later_delimiters_in_body() {
        assert_eq!(
            split_address_and_body("15551234567:hello:world", ':'),
            ("15551234567", "hello:world")
        );
    }

    #[test]
    fn test_split_single_delimiter() {
        assert_eq!(
            split_address_and_body("15551234567:Hello", ':'),
            ("15551234567", "Hello")
        );
        assert_eq!(split_address_and_body("15551234567:", ':'), ("15551234567", ""));
    }

    #[test]
    fn test_split_without_delimiter() {
        assert_eq!(split_address_and_body("Hello", ':'), ("Hello", ""));
    }

    #[test]
    fn test_compose_then_split() {
        let payload = compose_address_and_body("15551234567", "a:b:c", ADDRESS_DELIMITER);
        assert_eq!(payload, "15551234567:a:b:c");
        assert_eq!(
            split_address_and_body(&payload, ADDRESS_DELIMITER),
            ("15551234567", "a:b:c")
        );
    }
}
