// src/encoding.rs

//! Binary⇄hex conversion and the checksummed ASCII-safe serialization used
//! for keys and password-protected keys.
//!
//! The hex codec avoids table lookups and data-dependent branches on the
//! byte values it converts, so it is safe to run over key material.

use sha2::{Digest, Sha256};
use zeroize::Zeroizing;

use crate::consts::{CHECKSUM_BYTE_SIZE, HEADER_VERSION_SIZE};
use crate::error::SealcryptError;
use crate::utils::constant_time_eq;

/// Encode bytes as lowercase hex.
pub fn bin_to_hex(bytes: &[u8]) -> String {
    let mut hex = String::with_capacity(bytes.len() * 2);
    for &byte in bytes {
        hex.push(hex_char(i32::from(byte >> 4)));
        hex.push(hex_char(i32::from(byte & 0x0f)));
    }
    hex
}

/// Decode a hex string, accepting both cases.
///
/// Odd-length input and any byte outside `[0-9A-Fa-f]` are `BadFormat`.
pub fn hex_to_bin(hex: &[u8]) -> Result<Vec<u8>, SealcryptError> {
    if hex.len() % 2 != 0 {
        return Err(SealcryptError::BadFormat(
            "hex input has an odd number of digits".into(),
        ));
    }
    let mut bin = Vec::with_capacity(hex.len() / 2);
    for pair in hex.chunks_exact(2) {
        let (high, high_valid) = hex_nibble(pair[0]);
        let (low, low_valid) = hex_nibble(pair[1]);
        if high_valid & low_valid == 0 {
            return Err(SealcryptError::BadFormat("invalid hex character".into()));
        }
        bin.push(((high << 4) | low) as u8);
    }
    Ok(bin)
}

/// Maps 0-9 to '0'-'9' and 10-15 to 'a'-'f' with arithmetic only.
#[inline]
fn hex_char(nibble: i32) -> char {
    let c = 87 + nibble + (((nibble - 10) >> 8) & !38);
    (c as u8) as char
}

/// Decode one ASCII hex digit without a lookup table. Returns the nibble
/// value and a mask that is -1 for a valid digit, 0 otherwise.
#[inline]
fn hex_nibble(digit: u8) -> (i32, i32) {
    let c = i32::from(digit);
    let c_num = c ^ 48;
    let c_num_mask = (c_num - 10) >> 8;
    let c_alpha = (c & !32) - 55;
    let c_alpha_mask = ((c_alpha - 10) ^ (c_alpha - 16)) >> 8;
    (
        (c_num & c_num_mask) | (c_alpha & c_alpha_mask),
        c_num_mask | c_alpha_mask,
    )
}

/// Strip trailing `NUL`, tab, LF, CR, and space. End only; never the front
/// or middle. Tolerates editor-appended newlines on keys loaded from files.
pub fn trim_trailing_whitespace(bytes: &[u8]) -> &[u8] {
    let mut end = bytes.len();
    while end > 0 && matches!(bytes[end - 1], 0x00 | 0x09 | 0x0a | 0x0d | 0x20) {
        end -= 1;
    }
    &bytes[..end]
}

/// Serialize `header ‖ payload ‖ SHA256(header ‖ payload)` as lowercase hex.
pub fn encode_checksummed_ascii(
    header: &[u8; HEADER_VERSION_SIZE],
    payload: &[u8],
) -> String {
    let mut bytes =
        Vec::with_capacity(HEADER_VERSION_SIZE + payload.len() + CHECKSUM_BYTE_SIZE);
    bytes.extend_from_slice(header);
    bytes.extend_from_slice(payload);
    let checksum = Sha256::digest(&bytes);
    bytes.extend_from_slice(checksum.as_slice());
    bin_to_hex(&bytes)
}

/// Inverse of [`encode_checksummed_ascii`]: hex-decode, verify the checksum
/// and the expected header (both in constant time), return the payload.
///
/// Every failure is `BadFormat`. Trailing whitespace is trimmed first when
/// `trim_whitespace` is set, which is what the key loaders want.
pub fn decode_checksummed_ascii(
    expected_header: &[u8; HEADER_VERSION_SIZE],
    ascii: &[u8],
    trim_whitespace: bool,
) -> Result<Zeroizing<Vec<u8>>, SealcryptError> {
    let ascii = if trim_whitespace {
        trim_trailing_whitespace(ascii)
    } else {
        ascii
    };
    let bytes = Zeroizing::new(hex_to_bin(ascii)?);
    if bytes.len() < HEADER_VERSION_SIZE + CHECKSUM_BYTE_SIZE {
        return Err(SealcryptError::BadFormat(
            "input is too short to hold a header and checksum".into(),
        ));
    }
    let (preamble, stored_checksum) = bytes.split_at(bytes.len() - CHECKSUM_BYTE_SIZE);
    let computed_checksum = Sha256::digest(preamble);
    if !constant_time_eq(computed_checksum.as_slice(), stored_checksum) {
        return Err(SealcryptError::BadFormat("checksum mismatch".into()));
    }
    let (header, payload) = preamble.split_at(HEADER_VERSION_SIZE);
    if !constant_time_eq(header, expected_header) {
        return Err(SealcryptError::BadFormat("unexpected header".into()));
    }
    Ok(Zeroizing::new(payload.to_vec()))
}
