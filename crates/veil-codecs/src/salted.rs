//! Random-salt stage
//!
//! Prepends a random-length, random-content salt to the inner codec's bytes
//! so that encoding the same identity twice never yields the same token.
//! This defeats deterministic-ciphertext correlation and naive replay
//! spotting on whatever stages sit outside it.
//!
//! Wire form: `<length prefix: 1 byte><salt bytes><payload bytes>`. The
//! prefix is never zero, so an all-zeros buffer can never validate.

use rand::{Rng, RngCore};

use veil_core::{Codec, DecodingError, Identity, Result};

const MAX_SALT_LEN: usize = 16;

/// Random salt prefix around an inner codec.
#[derive(Debug, Clone)]
pub struct SaltedCodec<C> {
    origin: C,
}

impl<C: Codec> SaltedCodec<C> {
    /// Wraps `origin` in a salt prefix.
    ///
    /// Salt bytes come from the thread-local RNG, so a shared instance is
    /// safe for concurrent encodes without locking.
    pub fn new(origin: C) -> Self {
        Self { origin }
    }
}

impl<C: Codec> Codec for SaltedCodec<C> {
    fn encode(&self, identity: &Identity) -> Result<Vec<u8>> {
        let payload = self.origin.encode(identity)?;
        let mut rng = rand::thread_rng();
        let salt_len = rng.gen_range(1..=MAX_SALT_LEN);
        let mut salt = [0u8; MAX_SALT_LEN];
        rng.fill_bytes(&mut salt[..salt_len]);

        let mut out = Vec::with_capacity(1 + salt_len + payload.len());
        out.push(salt_len as u8);
        out.extend_from_slice(&salt[..salt_len]);
        out.extend_from_slice(&payload);
        Ok(out)
    }

    fn decode(&self, raw: &[u8]) -> Result<Identity> {
        let (prefix, rest) = raw.split_first().ok_or(DecodingError::Empty)?;
        let salt_len = usize::from(*prefix);
        if salt_len == 0 {
            return Err(DecodingError::malformed("salt length prefix is zero"));
        }
        if salt_len > rest.len() {
            return Err(DecodingError::truncated(salt_len, rest.len()));
        }
        self.origin.decode(&rest[salt_len..])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::plain::PlainCodec;

    #[test]
    fn roundtrips_through_plain() {
        let codec = SaltedCodec::new(PlainCodec::new());
        let identity = Identity::new("urn:test:3").with_property("name", "Jeff Lebowski");
        let bytes = codec.encode(&identity).unwrap();
        assert_eq!(codec.decode(&bytes).unwrap(), identity);
    }

    #[test]
    fn equal_identities_encode_differently() {
        let codec = SaltedCodec::new(PlainCodec::new());
        let identity = Identity::new("urn:test:3");
        // 1/2^40-ish odds of a spurious collision across ten draws.
        let tokens: Vec<Vec<u8>> = (0..10)
            .map(|_| codec.encode(&identity).unwrap())
            .collect();
        assert!(tokens.windows(2).any(|pair| pair[0] != pair[1]));
    }

    #[test]
    fn empty_buffer_fails() {
        let codec = SaltedCodec::new(PlainCodec::new());
        assert_eq!(codec.decode(b"").unwrap_err(), DecodingError::Empty);
    }

    #[test]
    fn declared_length_past_the_end_fails() {
        let codec = SaltedCodec::new(PlainCodec::new());
        let err = codec.decode(&[200, 1, 2, 3]).unwrap_err();
        assert_eq!(err, DecodingError::truncated(200, 3));
    }

    #[test]
    fn zero_length_prefix_fails() {
        let codec = SaltedCodec::new(PlainCodec::new());
        assert!(codec.decode(&[0, 1, 2, 3]).is_err());
    }

    #[test]
    fn salt_consuming_the_whole_buffer_leaves_an_empty_payload() {
        let codec = SaltedCodec::new(PlainCodec::new());
        // 3-byte salt, zero payload bytes: valid structure, empty identity.
        let decoded = codec.decode(&[3, 9, 9, 9]).unwrap();
        assert_eq!(decoded.urn(), "");
    }
}
