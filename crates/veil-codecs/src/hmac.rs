//! Keyed-hash signing primitive
//!
//! [`HmacSigner`] computes HMAC-SHA2 digests rendered as lowercase hex. The
//! bit length is restricted to 256, 384, or 512; any other request is
//! silently corrected to 256 rather than rejected, so legacy callers with
//! odd configuration keep working. That permissiveness is deliberate and
//! load-bearing - equality of two signers compares the *corrected* length.

use hmac::{Hmac, Mac};
use sha2::{Sha256, Sha384, Sha512};

/// Supported digest widths, in bits.
const SUPPORTED_BITS: [u16; 3] = [256, 384, 512];
const DEFAULT_BITS: u16 = 256;

// HMAC accepts keys of any length, so new_from_slice cannot fail here.
macro_rules! hex_mac {
    ($digest:ty, $key:expr, $data:expr) => {{
        #[allow(clippy::expect_used)]
        let mut mac = Hmac::<$digest>::new_from_slice($key)
            .expect("HMAC accepts keys of any length");
        mac.update($data);
        hex::encode(mac.finalize().into_bytes())
    }};
}

/// HMAC-SHA{256,384,512} over a shared secret, rendered as lowercase hex.
#[derive(Clone, PartialEq, Eq)]
pub struct HmacSigner {
    key: Vec<u8>,
    bits: u16,
}

impl HmacSigner {
    /// Creates a signer for the given key and digest width.
    ///
    /// `bits` outside {256, 384, 512} is corrected to 256.
    pub fn new(key: impl Into<Vec<u8>>, bits: u16) -> Self {
        let bits = if SUPPORTED_BITS.contains(&bits) {
            bits
        } else {
            DEFAULT_BITS
        };
        Self {
            key: key.into(),
            bits,
        }
    }

    /// The effective digest width in bits, after correction.
    pub fn bits(&self) -> u16 {
        self.bits
    }

    /// Length of the hex-rendered signature in bytes.
    ///
    /// Each digest byte becomes two hex characters, so this is `bits / 4`.
    pub fn signature_len(&self) -> usize {
        usize::from(self.bits) / 4
    }

    /// Signs `data`, returning the lowercase hex digest.
    pub fn sign(&self, data: &[u8]) -> String {
        match self.bits {
            384 => hex_mac!(Sha384, &self.key, data),
            512 => hex_mac!(Sha512, &self.key, data),
            _ => hex_mac!(Sha256, &self.key, data),
        }
    }
}

impl std::fmt::Debug for HmacSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HmacSigner")
            .field("bits", &self.bits)
            .field("key", &"[redacted]")
            .finish()
    }
}
