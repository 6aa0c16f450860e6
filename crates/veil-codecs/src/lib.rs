//! Veil codecs: composable, reversible transform stages
//!
//! Turns an authenticated user's [`Identity`] into an opaque string suitable
//! for a cookie or query parameter, and back again. Each codec is a
//! decorator around one inner codec; chains are assembled by nesting
//! constructors, with [`PlainCodec`] at the bottom:
//!
//! ```
//! use veil_codecs::{Base64Codec, Codec, GzipCodec, Identity, PlainCodec, SaltedCodec};
//!
//! let codec = Base64Codec::new(GzipCodec::new(SaltedCodec::new(PlainCodec::new())));
//! let identity = Identity::new("urn:github:346236").with_property("name", "Jeff Lebowski");
//!
//! let token = codec.encode(&identity)?;
//! assert_eq!(codec.decode(&token)?, identity);
//! # Ok::<(), veil_codecs::DecodingError>(())
//! ```
//!
//! For the common case, [`CompactCodec`] is a ready-made pipeline, and
//! [`CompactCodec::safe`] is the form to decode untrusted cookie input with:
//! every decode failure becomes the anonymous identity, so a forged or
//! corrupted token behaves exactly like no token at all.
//!
//! All codecs are pure and stateless; one shared instance serves concurrent
//! callers without locking.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod aes;
pub mod base64;
pub mod compact;
pub mod gzip;
pub mod hex;
pub mod hmac;
pub mod plain;
pub mod safe;
pub mod salted;
pub mod signed;
pub mod strict;
mod urlenc;
pub mod xor;

pub use self::aes::AesCodec;
pub use self::base64::Base64Codec;
pub use self::compact::CompactCodec;
pub use self::gzip::GzipCodec;
pub use self::hex::HexCodec;
pub use self::hmac::HmacSigner;
pub use self::plain::PlainCodec;
pub use self::safe::SafeCodec;
pub use self::salted::SaltedCodec;
pub use self::signed::SignedCodec;
pub use self::strict::StrictCodec;
pub use self::xor::XorCodec;

// Re-export the core contract so downstream crates need only one import.
pub use veil_core::{Codec, DecodingError, Identity, Result, ANONYMOUS, ANONYMOUS_URN};
