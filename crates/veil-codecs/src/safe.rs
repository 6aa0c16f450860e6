//! Safe fallback stage
//!
//! The boundary between the codec chain and untrusted input. Decode
//! failures from any inner stage - malformed text, forged signatures,
//! truncated salt buffers - become the anonymous identity instead of an
//! error, so a request with a corrupt token behaves exactly like a request
//! with no token. Encode passes through untouched; this stage never hides
//! configuration mistakes on the write path.

use tracing::debug;

use veil_core::{Codec, Identity, Result};

/// Decode-failure fallback to the anonymous identity.
#[derive(Debug, Clone)]
pub struct SafeCodec<C> {
    origin: C,
}

impl<C: Codec> SafeCodec<C> {
    /// Wraps `origin` in the anonymous fallback.
    pub fn new(origin: C) -> Self {
        Self { origin }
    }
}

impl<C: Codec> Codec for SafeCodec<C> {
    fn encode(&self, identity: &Identity) -> Result<Vec<u8>> {
        self.origin.encode(identity)
    }

    fn decode(&self, raw: &[u8]) -> Result<Identity> {
        match self.origin.decode(raw) {
            Ok(identity) => Ok(identity),
            Err(error) => {
                debug!(%error, "discarding undecodable identity token");
                Ok(Identity::anonymous())
            }
        }
    }
}
