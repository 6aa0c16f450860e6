//! Compact composition
//!
//! The default pipeline for "serialize an identity into a cookie-safe
//! string", assembled once from a shared secret:
//!
//! ```text
//! Base64( Gzip( Salted( Signed( Strict( Plain ), HMAC-SHA256 ) ) ) )
//! ```
//!
//! Reading encode inside-out: the identity becomes canonical text, its URN
//! is validated, an HMAC-SHA256 hex suffix is appended, a random salt
//! prefix makes equal identities produce distinct tokens, gzip keeps large
//! property maps within cookie size limits, and Base64 makes the result
//! text-safe. Decode runs the same stages in reverse.
//!
//! When the tokens being decoded come from an untrusted source - which for
//! cookies is always - use [`CompactCodec::safe`], which puts the anonymous
//! fallback at the outermost layer.

use veil_core::{Codec, Identity, Result};

use crate::base64::Base64Codec;
use crate::gzip::GzipCodec;
use crate::hmac::HmacSigner;
use crate::plain::PlainCodec;
use crate::safe::SafeCodec;
use crate::salted::SaltedCodec;
use crate::signed::SignedCodec;
use crate::strict::StrictCodec;

type Pipeline = Base64Codec<GzipCodec<SaltedCodec<SignedCodec<StrictCodec<PlainCodec>>>>>;

/// The fixed default pipeline for cookie-safe identity tokens.
#[derive(Debug, Clone)]
pub struct CompactCodec {
    pipeline: Pipeline,
}

impl CompactCodec {
    /// Builds the pipeline, signing with HMAC-SHA256 under `secret`.
    pub fn new(secret: impl Into<Vec<u8>>) -> Self {
        let signer = HmacSigner::new(secret, 256);
        let pipeline = Base64Codec::new(GzipCodec::new(SaltedCodec::new(SignedCodec::new(
            StrictCodec::new(PlainCodec::new()),
            signer,
        ))));
        Self { pipeline }
    }

    /// The pipeline wrapped for untrusted input: decode failures become the
    /// anonymous identity instead of errors.
    pub fn safe(secret: impl Into<Vec<u8>>) -> SafeCodec<CompactCodec> {
        SafeCodec::new(CompactCodec::new(secret))
    }
}

impl Codec for CompactCodec {
    fn encode(&self, identity: &Identity) -> Result<Vec<u8>> {
        self.pipeline.encode(identity)
    }

    fn decode(&self, raw: &[u8]) -> Result<Identity> {
        self.pipeline.decode(raw)
    }
}
