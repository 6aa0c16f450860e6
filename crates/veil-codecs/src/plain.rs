//! Canonical text serialization
//!
//! The bottom of every chain: renders an identity as
//! `<enc-urn>[;<enc-key>=<enc-value>]*` using the form-urlencoding rules of
//! [`crate::urlenc`]. Properties appear in map order, so equal identities
//! always produce identical text.
//!
//! Decoding is forgiving about *content* (any URN text is accepted) but not
//! about *structure*: a property segment without `=` or a broken percent
//! escape is a [`DecodingError`], surfaced to whichever outer stage wants to
//! handle it.

use std::collections::BTreeMap;

use veil_core::{Codec, DecodingError, Identity, Result};

use crate::urlenc;

/// Serializes an identity as form-urlencoded text.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainCodec;

impl PlainCodec {
    /// Creates the plain serializer.
    pub fn new() -> Self {
        Self
    }
}

impl Codec for PlainCodec {
    fn encode(&self, identity: &Identity) -> Result<Vec<u8>> {
        let mut text = urlenc::encode(identity.urn());
        for (name, value) in identity.properties() {
            text.push(';');
            text.push_str(&urlenc::encode(name));
            text.push('=');
            text.push_str(&urlenc::encode(value));
        }
        Ok(text.into_bytes())
    }

    fn decode(&self, raw: &[u8]) -> Result<Identity> {
        let text = std::str::from_utf8(raw).map_err(|err| {
            DecodingError::malformed(format!("token is not valid UTF-8: {err}"))
        })?;

        let mut segments = text.split(';');
        let urn = urlenc::decode(segments.next().unwrap_or_default())?;

        let mut properties = BTreeMap::new();
        for segment in segments {
            let (name, value) = segment.split_once('=').ok_or_else(|| {
                DecodingError::malformed(format!("property segment {segment:?} has no '='"))
            })?;
            properties.insert(urlenc::decode(name)?, urlenc::decode(value)?);
        }

        Ok(Identity::with_properties(urn, properties))
    }
}
