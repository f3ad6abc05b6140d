//! tests/common.rs
//! Shared constants and helpers for the integration tests.

#![allow(dead_code)] // each test binary uses a subset

use sealcrypt_rs::Key;

/// Standard password used across test files.
pub const TEST_PASSWORD: &[u8] = b"password";

/// Plaintext with embedded NULs, mixed case, and spaces.
pub const TEST_DATA: &[u8] = b"EnCrYpT EvErYThInG\x00\x00";

pub fn test_key() -> Key {
    Key::random().expect("OS RNG available in tests")
}

/// Flip the lowest bit of one byte.
pub fn flip_byte(data: &mut [u8], index: usize) {
    data[index] ^= 0x01;
}
