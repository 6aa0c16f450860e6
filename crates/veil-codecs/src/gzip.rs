//! Gzip stage
//!
//! Compresses the inner codec's bytes so large identities stay within
//! cookie size limits. Corrupt streams fail decoding.

use std::io::{Read, Write};

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;

use veil_core::{Codec, DecodingError, Identity, Result};

/// Gzip compression around an inner codec.
#[derive(Debug, Clone)]
pub struct GzipCodec<C> {
    origin: C,
}

impl<C: Codec> GzipCodec<C> {
    /// Wraps `origin` in gzip compression at the default level.
    pub fn new(origin: C) -> Self {
        Self { origin }
    }
}

impl<C: Codec> Codec for GzipCodec<C> {
    fn encode(&self, identity: &Identity) -> Result<Vec<u8>> {
        let payload = self.origin.encode(identity)?;
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder
            .write_all(&payload)
            .and_then(|()| encoder.finish())
            .map_err(|err| DecodingError::corrupt(format!("gzip compression failed: {err}")))
    }

    fn decode(&self, raw: &[u8]) -> Result<Identity> {
        let mut payload = Vec::new();
        GzDecoder::new(raw)
            .read_to_end(&mut payload)
            .map_err(|err| DecodingError::corrupt(format!("gzip stream is corrupt: {err}")))?;
        self.origin.decode(&payload)
    }
}
