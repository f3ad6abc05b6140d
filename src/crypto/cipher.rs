// src/crypto/cipher.rs

//! AES-128 in counter mode over the full 16-byte big-endian counter.

use aes::Aes128;
use ctr::cipher::{KeyIvInit, StreamCipher};

use crate::consts::BLOCK_BYTE_SIZE;
use crate::error::SealcryptError;

pub type Aes128Ctr = ctr::Ctr128BE<Aes128>;

/// XOR the AES-128-CTR keystream for `key`/`iv` into `data` in place.
/// Encryption and decryption are the same operation.
pub fn apply_ctr_keystream(
    key: &[u8],
    iv: &[u8; BLOCK_BYTE_SIZE],
    data: &mut [u8],
) -> Result<(), SealcryptError> {
    let mut cipher = Aes128Ctr::new_from_slices(key, iv).map_err(|_| {
        SealcryptError::EnvironmentIsBroken("AES-128-CTR rejected the key or IV".into())
    })?;
    cipher.apply_keystream(data);
    Ok(())
}
