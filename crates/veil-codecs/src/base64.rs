//! Base64 stage
//!
//! Wraps an inner codec and makes its bytes text-safe using the standard
//! Base64 alphabet with padding. An empty input decodes to the inner codec's
//! reading of an empty sequence.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use veil_core::{Codec, DecodingError, Identity, Result};

/// Base64 text armor around an inner codec.
#[derive(Debug, Clone)]
pub struct Base64Codec<C> {
    origin: C,
}

impl<C: Codec> Base64Codec<C> {
    /// Wraps `origin` in Base64 armor.
    pub fn new(origin: C) -> Self {
        Self { origin }
    }
}

fn in_alphabet(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'+' | b'/' | b'=')
}

impl<C: Codec> Codec for Base64Codec<C> {
    fn encode(&self, identity: &Identity) -> Result<Vec<u8>> {
        let payload = self.origin.encode(identity)?;
        Ok(STANDARD.encode(payload).into_bytes())
    }

    fn decode(&self, raw: &[u8]) -> Result<Identity> {
        let payload = STANDARD.decode(raw).map_err(|err| {
            let offenders: Vec<u8> = raw
                .iter()
                .copied()
                .filter(|byte| !in_alphabet(*byte))
                .collect();
            if offenders.is_empty() {
                DecodingError::malformed(format!("invalid Base64 payload: {err}"))
            } else {
                DecodingError::illegal_base64(offenders)
            }
        })?;
        self.origin.decode(&payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::plain::PlainCodec;

    #[test]
    fn roundtrips_through_plain() {
        let codec = Base64Codec::new(PlainCodec::new());
        let identity = Identity::new("urn:test:3");
        let bytes = codec.encode(&identity).unwrap();
        assert_eq!(codec.decode(&bytes).unwrap(), identity);
    }

    #[test]
    fn output_is_text_safe() {
        let codec = Base64Codec::new(PlainCodec::new());
        let identity = Identity::new("urn:test:3").with_property("name", "Jeff Lebowski");
        let bytes = codec.encode(&identity).unwrap();
        assert!(bytes.iter().all(|byte| in_alphabet(*byte)));
    }

    #[test]
    fn empty_input_reaches_the_inner_codec() {
        let codec = Base64Codec::new(PlainCodec::new());
        let decoded = codec.decode(b"").unwrap();
        assert_eq!(decoded.urn(), "");
    }

    #[test]
    fn illegal_characters_are_listed_in_the_diagnostic() {
        let codec = Base64Codec::new(PlainCodec::new());
        let err = codec.decode(b" %").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Illegal character in Base64 encoded data. [32, 37]"
        );
    }

    #[test]
    fn bad_padding_with_legal_characters_still_fails() {
        let codec = Base64Codec::new(PlainCodec::new());
        assert!(codec.decode(b"AAAAA").is_err());
    }
}
