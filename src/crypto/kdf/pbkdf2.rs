// src/crypto/kdf/pbkdf2.rs

use hmac::Hmac;
use pbkdf2::pbkdf2;
use sha2::Sha256;

use crate::error::SealcryptError;

/// Derive PBKDF2-HMAC-SHA256 directly into `output`.
pub fn derive_pbkdf2_sha256(
    ikm: &[u8],
    salt: &[u8],
    iterations: u32,
    output: &mut [u8],
) -> Result<(), SealcryptError> {
    pbkdf2::<Hmac<Sha256>>(ikm, salt, iterations, output)
        .map_err(|e| SealcryptError::EnvironmentIsBroken(format!("PBKDF2 failed: {e}")))
}
