// src/decryptor/mod.rs

//! High-level decryption facade.
//!
//! Core API: `decrypt`/`decrypt_with_password` for in-memory byte strings,
//! `decrypt_file`/`decrypt_resource` (and password variants) for streams.
//! No plaintext is ever released before the MAC over the whole input has
//! verified.

pub(crate) mod decrypt;
pub(crate) mod stream;

pub use decrypt::{decrypt, decrypt_with_password};
pub use stream::{
    decrypt_file, decrypt_file_with_password, decrypt_resource, decrypt_resource_with_password,
};
