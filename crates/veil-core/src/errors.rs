//! Decoding failures
//!
//! The chain has exactly one recoverable error kind: [`DecodingError`],
//! raised by any stage whose input is not a valid product of its own
//! encoding. Failures travel as `Err` values through every stage - no stage
//! may swallow one except `Safe`, which maps them to the anonymous identity.

use serde::{Deserialize, Serialize};

/// Result alias used throughout the codec chain.
pub type Result<T, E = DecodingError> = std::result::Result<T, E>;

/// A token could not be decoded.
///
/// Each variant names one failure class; the rendered message is the
/// human-readable diagnostic carried to logs by the `Safe` stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum DecodingError {
    /// Input contained bytes outside the Base64 alphabet.
    #[error("Illegal character in Base64 encoded data. {bytes:?}")]
    IllegalBase64 {
        /// The offending byte values, in input order.
        bytes: Vec<u8>,
    },

    /// Input was not valid hexadecimal text.
    #[error("Illegal hex encoded data: {message}")]
    IllegalHex {
        /// What the hex parser objected to.
        message: String,
    },

    /// A compressed stream could not be inflated.
    #[error("Corrupt data: {message}")]
    Corrupt {
        /// The underlying stream failure.
        message: String,
    },

    /// Decoding was asked to operate on an empty byte sequence.
    #[error("Empty input, nothing to decode")]
    Empty,

    /// A declared length points past the end of the available bytes.
    #[error("Declared length {declared} exceeds the {available} available bytes")]
    Truncated {
        /// How many bytes the prefix or configuration demanded.
        declared: usize,
        /// How many bytes were actually present.
        available: usize,
    },

    /// Signature or authentication-tag verification failed.
    #[error("Signature mismatch: token was tampered with or produced with a different key")]
    SignatureMismatch,

    /// A URN failed the strict grammar.
    #[error("Invalid URN: {urn:?}")]
    InvalidUrn {
        /// The rejected URN text.
        urn: String,
    },

    /// Token text was structurally malformed.
    #[error("Malformed token: {message}")]
    Malformed {
        /// What was wrong with the text.
        message: String,
    },
}

impl DecodingError {
    /// Input contained bytes outside the Base64 alphabet.
    pub fn illegal_base64(bytes: impl Into<Vec<u8>>) -> Self {
        Self::IllegalBase64 {
            bytes: bytes.into(),
        }
    }

    /// Input was not valid hexadecimal text.
    pub fn illegal_hex(message: impl Into<String>) -> Self {
        Self::IllegalHex {
            message: message.into(),
        }
    }

    /// A compressed stream could not be inflated.
    pub fn corrupt(message: impl Into<String>) -> Self {
        Self::Corrupt {
            message: message.into(),
        }
    }

    /// A declared length points past the end of the available bytes.
    pub fn truncated(declared: usize, available: usize) -> Self {
        Self::Truncated {
            declared,
            available,
        }
    }

    /// A URN failed the strict grammar.
    pub fn invalid_urn(urn: impl Into<String>) -> Self {
        Self::InvalidUrn { urn: urn.into() }
    }

    /// Token text was structurally malformed.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed {
            message: message.into(),
        }
    }
}
