//! Strict URN validation stage
//!
//! Enforces a conservative URN grammar on both paths: before encoding (so a
//! malformed identity never becomes a token) and after decoding (so a
//! best-effort inner parse never leaks a garbage URN upward). The anonymous
//! identity is always valid and passes through decode unvalidated.
//!
//! Grammar: `urn` `:` namespace (`:` segment)+ where the namespace and every
//! segment are non-empty runs of ASCII letters, digits, and hyphens.

use veil_core::{Codec, DecodingError, Identity, Result};

/// URN grammar enforcement around an inner codec.
#[derive(Debug, Clone)]
pub struct StrictCodec<C> {
    origin: C,
}

impl<C: Codec> StrictCodec<C> {
    /// Wraps `origin` in URN validation.
    pub fn new(origin: C) -> Self {
        Self { origin }
    }
}

fn segment_ok(segment: &str) -> bool {
    !segment.is_empty()
        && segment
            .bytes()
            .all(|byte| byte.is_ascii_alphanumeric() || byte == b'-')
}

fn validate_urn(urn: &str) -> Result<()> {
    let rest = urn
        .strip_prefix("urn:")
        .ok_or_else(|| DecodingError::invalid_urn(urn))?;

    let mut segments = rest.split(':');
    // split always yields at least one item; the first is the namespace.
    let namespace = segments.next().unwrap_or_default();
    let mut saw_local = false;
    for segment in segments {
        saw_local = true;
        if !segment_ok(segment) {
            return Err(DecodingError::invalid_urn(urn));
        }
    }

    if segment_ok(namespace) && saw_local {
        Ok(())
    } else {
        Err(DecodingError::invalid_urn(urn))
    }
}

impl<C: Codec> Codec for StrictCodec<C> {
    fn encode(&self, identity: &Identity) -> Result<Vec<u8>> {
        validate_urn(identity.urn())?;
        self.origin.encode(identity)
    }

    fn decode(&self, raw: &[u8]) -> Result<Identity> {
        let identity = self.origin.decode(raw)?;
        if !identity.is_anonymous() {
            validate_urn(identity.urn())?;
        }
        Ok(identity)
    }
}
