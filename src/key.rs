// src/key.rs

//! The 32-byte symmetric [`Key`] and its checksummed ASCII-safe form.

use crate::consts::{KEY_BYTE_SIZE, KEY_CURRENT_VERSION};
use crate::crypto::rng::fill_random;
use crate::encoding::{decode_checksummed_ascii, encode_checksummed_ascii};
use crate::error::SealcryptError;
use crate::sensitive::SecretBytes32;

/// An opaque 256-bit encryption secret.
///
/// Create one with [`Key::random`] or decode a stored one with
/// [`Key::load_from_ascii_safe_string`]. The raw bytes are zeroized when the
/// last clone is dropped.
#[derive(Clone)]
pub struct Key {
    bytes: SecretBytes32,
}

impl Key {
    /// Generate a fresh key from the OS CSPRNG.
    pub fn random() -> Result<Self, SealcryptError> {
        let mut bytes = [0u8; KEY_BYTE_SIZE];
        fill_random(&mut bytes)?;
        Ok(Self {
            bytes: SecretBytes32::new(bytes),
        })
    }

    pub(crate) fn from_raw_bytes(raw: &[u8]) -> Result<Self, SealcryptError> {
        SecretBytes32::from_slice(raw)
            .map(|bytes| Self { bytes })
            .ok_or_else(|| {
                SealcryptError::EnvironmentIsBroken(format!(
                    "raw key must be {KEY_BYTE_SIZE} bytes"
                ))
            })
    }

    pub fn raw_bytes(&self) -> &[u8; KEY_BYTE_SIZE] {
        self.bytes.as_bytes()
    }

    /// Serialize as a 136-character lowercase hex string: key header, raw
    /// bytes, SHA-256 checksum.
    pub fn save_to_ascii_safe_string(&self) -> String {
        encode_checksummed_ascii(&KEY_CURRENT_VERSION, self.raw_bytes())
    }

    /// Decode a string produced by [`Key::save_to_ascii_safe_string`].
    /// Trailing whitespace (as editors tend to append) is tolerated.
    pub fn load_from_ascii_safe_string(ascii: &str) -> Result<Self, SealcryptError> {
        let payload = decode_checksummed_ascii(&KEY_CURRENT_VERSION, ascii.as_bytes(), true)?;
        Self::from_raw_bytes(&payload)
    }
}

impl std::fmt::Debug for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // never print key material
        f.write_str("Key(..)")
    }
}
