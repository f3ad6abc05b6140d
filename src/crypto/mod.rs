// src/crypto/mod.rs

//! Low-level crypto primitives (cipher, MAC, KDF, RNG).
//!
//! Thin fallible wrappers over the RustCrypto crates; every failure maps to
//! `EnvironmentIsBroken` because these primitives only reject parameters the
//! rest of the crate guarantees by construction.

pub mod cipher;
pub mod hmac;
pub mod kdf;
pub mod rng;
