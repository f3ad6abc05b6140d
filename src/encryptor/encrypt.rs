// src/encryptor/encrypt.rs

//! Single-shot encryption of an in-memory byte string.

use hmac::Mac;

use crate::consts::{
    BLOCK_BYTE_SIZE, CURRENT_VERSION, MINIMUM_CIPHERTEXT_SIZE, SALT_BYTE_SIZE,
};
use crate::crypto::cipher::apply_ctr_keystream;
use crate::crypto::hmac::new_hmac_sha256;
use crate::crypto::rng::fill_random;
use crate::encoding::bin_to_hex;
use crate::error::SealcryptError;
use crate::key::Key;
use crate::secret::Secret;

/// Encrypt `plaintext` under a [`Key`].
///
/// Returns `version ‖ salt ‖ iv ‖ ciphertext ‖ mac` as raw bytes when
/// `raw_binary` is set, otherwise as lowercase hex (ASCII bytes). Salt and
/// IV are fresh per call, so encrypting the same input twice never yields
/// the same output.
pub fn encrypt(
    plaintext: &[u8],
    key: &Key,
    raw_binary: bool,
) -> Result<Vec<u8>, SealcryptError> {
    encrypt_internal(plaintext, &Secret::Key(key), raw_binary)
}

/// Encrypt `plaintext` under a password.
///
/// The password is stretched with PBKDF2, which makes this call slow on
/// purpose. For bulk use, prefer a random [`Key`] wrapped in a
/// [`PasswordProtectedKey`](crate::PasswordProtectedKey).
pub fn encrypt_with_password(
    plaintext: &[u8],
    password: &[u8],
    raw_binary: bool,
) -> Result<Vec<u8>, SealcryptError> {
    encrypt_internal(plaintext, &Secret::Password(password), raw_binary)
}

pub(crate) fn encrypt_internal(
    plaintext: &[u8],
    secret: &Secret<'_>,
    raw_binary: bool,
) -> Result<Vec<u8>, SealcryptError> {
    let mut salt = [0u8; SALT_BYTE_SIZE];
    fill_random(&mut salt)?;
    let mut iv = [0u8; BLOCK_BYTE_SIZE];
    fill_random(&mut iv)?;

    let keys = secret.derive_keys(&salt)?;

    let mut output = Vec::with_capacity(MINIMUM_CIPHERTEXT_SIZE + plaintext.len());
    output.extend_from_slice(&CURRENT_VERSION);
    output.extend_from_slice(&salt);
    output.extend_from_slice(&iv);
    let ciphertext_start = output.len();
    output.extend_from_slice(plaintext);
    apply_ctr_keystream(keys.cipher_key(), &iv, &mut output[ciphertext_start..])?;

    let mut mac = new_hmac_sha256(keys.authentication_key())?;
    mac.update(&output);
    output.extend_from_slice(mac.finalize().into_bytes().as_slice());

    if raw_binary {
        Ok(output)
    } else {
        Ok(bin_to_hex(&output).into_bytes())
    }
}
