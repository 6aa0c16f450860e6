//! The codec contract
//!
//! A [`Codec`] is a reversible transform between an [`Identity`] and a byte
//! sequence. Concrete codecs are decorators: each wraps exactly one inner
//! codec and adds one transform stage around it, so a full chain is just an
//! ownership chain of values with the serializer at the bottom.
//!
//! Codecs are pure: no I/O, no suspension points, no mutable state beyond
//! read-only configuration captured at construction. The `Send + Sync`
//! supertraits make that contract explicit - one shared instance may serve
//! concurrent `encode`/`decode` calls from many threads without locking.

use std::sync::Arc;

use crate::errors::Result;
use crate::identity::Identity;

/// A reversible transform between an identity and a byte sequence.
///
/// `decode` must fail on any input that is not a valid output of this
/// codec's own `encode` - including bytes produced with a different key or
/// salt. A decode that "succeeds" with garbage is acceptable only for
/// deliberately forgiving stages (the plain serializer), and callers needing
/// a hard guarantee wrap those in the strict and/or safe stages.
pub trait Codec: Send + Sync {
    /// Turns an identity into bytes.
    ///
    /// Total for representable identities, except where a stage imposes
    /// validation (the strict stage rejects malformed URNs up front).
    fn encode(&self, identity: &Identity) -> Result<Vec<u8>>;

    /// Recovers an identity from bytes produced by this codec's `encode`.
    fn decode(&self, raw: &[u8]) -> Result<Identity>;
}

impl<C: Codec + ?Sized> Codec for &C {
    fn encode(&self, identity: &Identity) -> Result<Vec<u8>> {
        (**self).encode(identity)
    }

    fn decode(&self, raw: &[u8]) -> Result<Identity> {
        (**self).decode(raw)
    }
}

impl<C: Codec + ?Sized> Codec for Box<C> {
    fn encode(&self, identity: &Identity) -> Result<Vec<u8>> {
        (**self).encode(identity)
    }

    fn decode(&self, raw: &[u8]) -> Result<Identity> {
        (**self).decode(raw)
    }
}

impl<C: Codec + ?Sized> Codec for Arc<C> {
    fn encode(&self, identity: &Identity) -> Result<Vec<u8>> {
        (**self).encode(identity)
    }

    fn decode(&self, raw: &[u8]) -> Result<Identity> {
        (**self).decode(raw)
    }
}
