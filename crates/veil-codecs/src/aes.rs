//! AES-256-GCM stage
//!
//! Authenticated encryption around an inner codec. Unlike the XOR mask this
//! is a real confidentiality boundary: the payload is unreadable without the
//! key, and the GCM tag makes any modification detectable, so this stage
//! provides tamper evidence even without a separate signed stage.
//!
//! Wire form: `<nonce: 12 bytes><ciphertext + tag>`. The nonce is drawn
//! fresh from the thread-local RNG on every encode and never reused with
//! the same key in practice (96 random bits per token).

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Key, Nonce};
use rand::RngCore;

use veil_core::{Codec, DecodingError, Identity, Result};

const NONCE_LEN: usize = 12;
const TAG_LEN: usize = 16;

/// AES-256-GCM encryption around an inner codec.
#[derive(Clone)]
pub struct AesCodec<C> {
    origin: C,
    cipher: Aes256Gcm,
}

impl<C: Codec> AesCodec<C> {
    /// Wraps `origin` in AES-256-GCM under the given 32-byte key.
    pub fn new(origin: C, key: &[u8; 32]) -> Self {
        let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key));
        Self { origin, cipher }
    }
}

impl<C> std::fmt::Debug for AesCodec<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AesCodec")
            .field("cipher", &"Aes256Gcm")
            .finish_non_exhaustive()
    }
}

impl<C: Codec> Codec for AesCodec<C> {
    fn encode(&self, identity: &Identity) -> Result<Vec<u8>> {
        let payload = self.origin.encode(identity)?;
        let mut nonce = [0u8; NONCE_LEN];
        rand::thread_rng().fill_bytes(&mut nonce);

        let ciphertext = self
            .cipher
            .encrypt(Nonce::from_slice(&nonce), payload.as_ref())
            .map_err(|_| DecodingError::corrupt("AES-GCM encryption failed"))?;

        let mut out = Vec::with_capacity(NONCE_LEN + ciphertext.len());
        out.extend_from_slice(&nonce);
        out.extend_from_slice(&ciphertext);
        Ok(out)
    }

    fn decode(&self, raw: &[u8]) -> Result<Identity> {
        if raw.len() < NONCE_LEN + TAG_LEN {
            return Err(DecodingError::truncated(NONCE_LEN + TAG_LEN, raw.len()));
        }
        let (nonce, ciphertext) = raw.split_at(NONCE_LEN);
        let payload = self
            .cipher
            .decrypt(Nonce::from_slice(nonce), ciphertext)
            .map_err(|_| DecodingError::SignatureMismatch)?;
        self.origin.decode(&payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::plain::PlainCodec;

    const KEY: [u8; 32] = *b"0123456789abcdef0123456789abcdef";

    #[test]
    fn roundtrips_through_plain() {
        let codec = AesCodec::new(PlainCodec::new(), &KEY);
        let identity = Identity::new("urn:test:3").with_property("name", "Jeff Lebowski");
        let bytes = codec.encode(&identity).unwrap();
        assert_eq!(codec.decode(&bytes).unwrap(), identity);
    }

    #[test]
    fn equal_identities_encrypt_differently() {
        let codec = AesCodec::new(PlainCodec::new(), &KEY);
        let identity = Identity::new("urn:test:3");
        let a = codec.encode(&identity).unwrap();
        let b = codec.encode(&identity).unwrap();
        assert_ne!(a, b, "fresh nonce per encode");
    }

    #[test]
    fn flipping_any_bit_fails() {
        let codec = AesCodec::new(PlainCodec::new(), &KEY);
        let bytes = codec.encode(&Identity::new("urn:test:3")).unwrap();
        for index in 0..bytes.len() {
            let mut tampered = bytes.clone();
            tampered[index] ^= 0x01;
            assert_eq!(
                codec.decode(&tampered).unwrap_err(),
                DecodingError::SignatureMismatch,
                "bit flip at byte {index} went undetected"
            );
        }
    }

    #[test]
    fn wrong_key_fails() {
        let codec = AesCodec::new(PlainCodec::new(), &KEY);
        let bytes = codec.encode(&Identity::new("urn:test:3")).unwrap();
        let other = AesCodec::new(PlainCodec::new(), b"ffffffffffffffffffffffffffffffff");
        assert_eq!(
            other.decode(&bytes).unwrap_err(),
            DecodingError::SignatureMismatch
        );
    }

    #[test]
    fn input_shorter_than_nonce_and_tag_fails() {
        let codec = AesCodec::new(PlainCodec::new(), &KEY);
        assert!(matches!(
            codec.decode(&[0u8; 20]).unwrap_err(),
            DecodingError::Truncated { .. }
        ));
    }
}
