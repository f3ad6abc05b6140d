// src/crypto/kdf/mod.rs

pub mod hkdf;
pub mod pbkdf2;
