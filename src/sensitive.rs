//! Wrappers for key material that is zeroized on drop.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::consts::KEY_BYTE_SIZE;

/// A 32-byte secret value wiped from memory when dropped.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretBytes32([u8; KEY_BYTE_SIZE]);

impl SecretBytes32 {
    pub fn new(bytes: [u8; KEY_BYTE_SIZE]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; KEY_BYTE_SIZE] {
        &self.0
    }

    pub fn from_slice(slice: &[u8]) -> Option<Self> {
        if slice.len() != KEY_BYTE_SIZE {
            return None;
        }
        let mut bytes = [0u8; KEY_BYTE_SIZE];
        bytes.copy_from_slice(slice);
        Some(Self(bytes))
    }
}

impl AsRef<[u8]> for SecretBytes32 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
