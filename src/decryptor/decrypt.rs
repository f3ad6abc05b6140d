// src/decryptor/decrypt.rs

//! Single-shot decryption of an in-memory byte string.

use hmac::Mac;

use crate::consts::{
    BLOCK_BYTE_SIZE, CURRENT_VERSION, HEADER_VERSION_SIZE, MAC_BYTE_SIZE,
    MINIMUM_CIPHERTEXT_SIZE, SALT_BYTE_SIZE,
};
use crate::crypto::cipher::apply_ctr_keystream;
use crate::crypto::hmac::new_hmac_sha256;
use crate::encoding::hex_to_bin;
use crate::error::SealcryptError;
use crate::key::Key;
use crate::secret::Secret;
use crate::utils::constant_time_eq;

/// Decrypt a ciphertext produced by [`encrypt`](crate::encrypt).
///
/// `raw_binary` must match the flag used at encryption time; a mismatch is
/// indistinguishable from a corrupted ciphertext. Every failure mode is
/// reported as `WrongKeyOrModifiedCiphertext`, except for I/O-free
/// environment breakage.
pub fn decrypt(
    ciphertext: &[u8],
    key: &Key,
    raw_binary: bool,
) -> Result<Vec<u8>, SealcryptError> {
    decrypt_internal(ciphertext, &Secret::Key(key), raw_binary)
}

/// Password variant of [`decrypt`].
pub fn decrypt_with_password(
    ciphertext: &[u8],
    password: &[u8],
    raw_binary: bool,
) -> Result<Vec<u8>, SealcryptError> {
    decrypt_internal(ciphertext, &Secret::Password(password), raw_binary)
}

pub(crate) fn decrypt_internal(
    ciphertext: &[u8],
    secret: &Secret<'_>,
    raw_binary: bool,
) -> Result<Vec<u8>, SealcryptError> {
    let decoded;
    let raw: &[u8] = if raw_binary {
        ciphertext
    } else {
        // hex-decoding failure means tampering or a raw/hex mix-up, not a
        // caller bug, so the precise encoding error is not surfaced
        decoded = hex_to_bin(ciphertext).map_err(SealcryptError::upgrade)?;
        &decoded
    };

    if raw.len() < MINIMUM_CIPHERTEXT_SIZE {
        return Err(SealcryptError::WrongKeyOrModifiedCiphertext);
    }

    let header = &raw[..HEADER_VERSION_SIZE];
    if !constant_time_eq(header, &CURRENT_VERSION) {
        return Err(SealcryptError::WrongKeyOrModifiedCiphertext);
    }

    let mut salt = [0u8; SALT_BYTE_SIZE];
    salt.copy_from_slice(&raw[HEADER_VERSION_SIZE..HEADER_VERSION_SIZE + SALT_BYTE_SIZE]);
    let iv_start = HEADER_VERSION_SIZE + SALT_BYTE_SIZE;
    let mut iv = [0u8; BLOCK_BYTE_SIZE];
    iv.copy_from_slice(&raw[iv_start..iv_start + BLOCK_BYTE_SIZE]);

    let (body, stored_mac) = raw.split_at(raw.len() - MAC_BYTE_SIZE);

    let keys = secret.derive_keys(&salt)?;

    let mut mac = new_hmac_sha256(keys.authentication_key())?;
    mac.update(body);
    if !constant_time_eq(mac.finalize().into_bytes().as_slice(), stored_mac) {
        return Err(SealcryptError::WrongKeyOrModifiedCiphertext);
    }

    let mut plaintext = body[iv_start + BLOCK_BYTE_SIZE..].to_vec();
    apply_ctr_keystream(keys.cipher_key(), &iv, &mut plaintext)?;
    Ok(plaintext)
}
