//! HMAC-signed stage
//!
//! Appends a keyed signature to the inner codec's bytes so any bit flip in
//! payload or signature is detected on decode. The signature is the
//! lowercase hex digest produced by [`HmacSigner`], appended as a
//! fixed-width ASCII suffix; the split point is computed from the signer's
//! digest width alone, so no delimiter byte is needed and payloads never
//! require escaping.

use subtle::ConstantTimeEq;

use veil_core::{Codec, DecodingError, Identity, Result};

use crate::hmac::HmacSigner;

/// Tamper-evident signature suffix around an inner codec.
#[derive(Debug, Clone)]
pub struct SignedCodec<C> {
    origin: C,
    signer: HmacSigner,
}

impl<C: Codec> SignedCodec<C> {
    /// Wraps `origin`, signing with the given signer.
    pub fn new(origin: C, signer: HmacSigner) -> Self {
        Self { origin, signer }
    }

    /// Convenience constructor building the signer in place.
    ///
    /// `bits` outside {256, 384, 512} is corrected to 256, matching
    /// [`HmacSigner::new`].
    pub fn with_key(origin: C, key: impl Into<Vec<u8>>, bits: u16) -> Self {
        Self::new(origin, HmacSigner::new(key, bits))
    }
}

impl<C: Codec> Codec for SignedCodec<C> {
    fn encode(&self, identity: &Identity) -> Result<Vec<u8>> {
        let mut payload = self.origin.encode(identity)?;
        let signature = self.signer.sign(&payload);
        payload.extend_from_slice(signature.as_bytes());
        Ok(payload)
    }

    fn decode(&self, raw: &[u8]) -> Result<Identity> {
        let signature_len = self.signer.signature_len();
        if raw.len() < signature_len {
            return Err(DecodingError::truncated(signature_len, raw.len()));
        }
        let (payload, provided) = raw.split_at(raw.len() - signature_len);
        let expected = self.signer.sign(payload);
        if !bool::from(expected.as_bytes().ct_eq(provided)) {
            return Err(DecodingError::SignatureMismatch);
        }
        self.origin.decode(payload)
    }
}
