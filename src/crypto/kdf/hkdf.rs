// src/crypto/kdf/hkdf.rs

use hkdf::Hkdf;
use sha2::Sha256;

use crate::error::SealcryptError;

/// HKDF-SHA256 extract-and-expand (RFC 5869) directly into `output`.
/// The output length is capped at 255 hash lengths by the primitive itself.
pub fn derive_hkdf_sha256(
    ikm: &[u8],
    salt: &[u8],
    info: &[u8],
    output: &mut [u8],
) -> Result<(), SealcryptError> {
    Hkdf::<Sha256>::new(Some(salt), ikm)
        .expand(info, output)
        .map_err(|_| SealcryptError::EnvironmentIsBroken("HKDF output length out of range".into()))
}
