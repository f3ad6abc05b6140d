// src/encryptor/mod.rs

//! High-level encryption facade.
//!
//! Core API: `encrypt`/`encrypt_with_password` for in-memory byte strings,
//! `encrypt_file`/`encrypt_resource` (and password variants) for streams.

pub(crate) mod encrypt;
pub(crate) mod stream;

pub use encrypt::{encrypt, encrypt_with_password};
pub use stream::{
    encrypt_file, encrypt_file_with_password, encrypt_resource, encrypt_resource_with_password,
};
