//! XOR stage
//!
//! Masks the inner codec's bytes with a repeating key. XOR is self-inverse,
//! so encode and decode apply the same transform. This is obfuscation only:
//! it defeats casual inspection of cookie values, not an attacker. Chains
//! that need integrity use the signed stage; chains that need
//! confidentiality use the AES stage.

use veil_core::{Codec, Identity, Result};

/// Repeating-key XOR mask around an inner codec.
#[derive(Clone)]
pub struct XorCodec<C> {
    origin: C,
    key: Vec<u8>,
}

impl<C: Codec> XorCodec<C> {
    /// Wraps `origin` in an XOR mask.
    ///
    /// # Panics
    ///
    /// Panics if `key` is empty; a zero-length key would leave the transform
    /// undefined.
    pub fn new(origin: C, key: impl Into<Vec<u8>>) -> Self {
        let key = key.into();
        assert!(!key.is_empty(), "XOR key must not be empty");
        Self { origin, key }
    }

    fn mask(&self, data: &mut [u8]) {
        for (index, byte) in data.iter_mut().enumerate() {
            *byte ^= self.key[index % self.key.len()];
        }
    }
}

impl<C> std::fmt::Debug for XorCodec<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("XorCodec")
            .field("key", &"[redacted]")
            .finish_non_exhaustive()
    }
}

impl<C: Codec> Codec for XorCodec<C> {
    fn encode(&self, identity: &Identity) -> Result<Vec<u8>> {
        let mut payload = self.origin.encode(identity)?;
        self.mask(&mut payload);
        Ok(payload)
    }

    fn decode(&self, raw: &[u8]) -> Result<Identity> {
        let mut payload = raw.to_vec();
        self.mask(&mut payload);
        self.origin.decode(&payload)
    }
}
