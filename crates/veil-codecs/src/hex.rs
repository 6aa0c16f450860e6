//! Hexadecimal stage
//!
//! Renders the inner codec's bytes as uppercase hexadecimal, grouped for
//! readability: a `-` after every 4 bytes (8 hex digits), a final short
//! group when the byte count is not a multiple of 4, and no trailing
//! separator. Decoding strips the separators and accepts either digit case.

use hex::FromHexError;

use veil_core::{Codec, DecodingError, Identity, Result};

const GROUP_BYTES: usize = 4;

/// Grouped uppercase hexadecimal armor around an inner codec.
#[derive(Debug, Clone)]
pub struct HexCodec<C> {
    origin: C,
}

impl<C: Codec> HexCodec<C> {
    /// Wraps `origin` in hexadecimal armor.
    pub fn new(origin: C) -> Self {
        Self { origin }
    }
}

impl<C: Codec> Codec for HexCodec<C> {
    fn encode(&self, identity: &Identity) -> Result<Vec<u8>> {
        let payload = self.origin.encode(identity)?;
        let groups: Vec<String> = payload
            .chunks(GROUP_BYTES)
            .map(hex::encode_upper)
            .collect();
        Ok(groups.join("-").into_bytes())
    }

    fn decode(&self, raw: &[u8]) -> Result<Identity> {
        let digits: Vec<u8> = raw
            .iter()
            .copied()
            .filter(|byte| *byte != b'-')
            .collect();
        let payload = hex::decode(&digits).map_err(|err| match err {
            FromHexError::InvalidHexCharacter { c, .. } => {
                DecodingError::illegal_hex(format!("invalid hex character {c:?}"))
            }
            FromHexError::OddLength | FromHexError::InvalidStringLength => {
                DecodingError::illegal_hex(format!(
                    "odd number of hex digits ({})",
                    digits.len()
                ))
            }
        })?;
        self.origin.decode(&payload)
    }
}
