// src/crypto/hmac.rs

//! HMAC-SHA256 primitive (re-exports from `hmac` + `sha2`).

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::error::SealcryptError;

pub type HmacSha256 = Hmac<Sha256>;

pub fn new_hmac_sha256(key: &[u8]) -> Result<HmacSha256, SealcryptError> {
    <HmacSha256 as Mac>::new_from_slice(key)
        .map_err(|_| SealcryptError::EnvironmentIsBroken("HMAC-SHA256 rejected the key".into()))
}
