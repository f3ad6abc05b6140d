// src/crypto/rng.rs

//! Secure randomness for salts, IVs, and fresh keys.
//!
//! Uses the operating system CSPRNG through the fallible `TryRngCore` API so
//! an unavailable RNG surfaces as an error instead of a panic.

use rand::rngs::OsRng;
use rand::TryRngCore;

use crate::error::SealcryptError;

pub fn fill_random(buffer: &mut [u8]) -> Result<(), SealcryptError> {
    OsRng
        .try_fill_bytes(buffer)
        .map_err(|e| SealcryptError::EnvironmentIsBroken(format!("CSPRNG unavailable: {e}")))
}
