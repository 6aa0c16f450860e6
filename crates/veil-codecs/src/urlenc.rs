//! Form-urlencoding of token text
//!
//! The canonical text form percent-encodes everything outside the unreserved
//! set `A-Za-z0-9 . - * _`, renders spaces as `+`, and uses uppercase hex
//! digits in escapes. The encoding operates on the UTF-8 bytes of the input,
//! so multi-byte characters become one escape per byte.

use veil_core::{DecodingError, Result};

const HEX_UPPER: &[u8; 16] = b"0123456789ABCDEF";

fn is_unreserved(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'.' | b'-' | b'*' | b'_')
}

/// Encodes a string into its form-urlencoded representation.
pub(crate) fn encode(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for &byte in text.as_bytes() {
        if is_unreserved(byte) {
            out.push(byte as char);
        } else if byte == b' ' {
            out.push('+');
        } else {
            out.push('%');
            out.push(HEX_UPPER[usize::from(byte >> 4)] as char);
            out.push(HEX_UPPER[usize::from(byte & 0x0F)] as char);
        }
    }
    out
}

/// Decodes a form-urlencoded string.
///
/// Fails on dangling or non-hex `%` escapes and on escape sequences that do
/// not decode to valid UTF-8.
pub(crate) fn decode(text: &str) -> Result<String> {
    let bytes = text.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut index = 0;
    while index < bytes.len() {
        match bytes[index] {
            b'+' => {
                out.push(b' ');
                index += 1;
            }
            b'%' => {
                let hi = bytes.get(index + 1).copied().and_then(hex_value);
                let lo = bytes.get(index + 2).copied().and_then(hex_value);
                match (hi, lo) {
                    (Some(hi), Some(lo)) => {
                        out.push((hi << 4) | lo);
                        index += 3;
                    }
                    _ => {
                        return Err(DecodingError::malformed(format!(
                            "invalid percent escape at byte {index} of {text:?}"
                        )));
                    }
                }
            }
            byte => {
                out.push(byte);
                index += 1;
            }
        }
    }
    String::from_utf8(out).map_err(|err| {
        DecodingError::malformed(format!("percent-decoded text is not valid UTF-8: {err}"))
    })
}

fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}
