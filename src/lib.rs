// src/lib.rs

//! Authenticated symmetric encryption for strings and files at rest.
//!
//! One versioned ciphertext format, two secret kinds (a raw 256-bit [`Key`]
//! or a user password), encrypt-then-MAC over AES-128-CTR, and a streaming
//! two-pass file protocol that verifies integrity before releasing any
//! plaintext.

#![forbid(unsafe_code)]

pub mod consts;
pub mod crypto;
pub mod decryptor;
pub mod encoding;
pub mod encryptor;
pub mod error;
pub mod key;
pub mod protected_key;
pub mod sensitive;
pub mod utils;

mod secret;

// High-level API; this is what nearly all users import.
pub use decryptor::{
    decrypt, decrypt_file, decrypt_file_with_password, decrypt_resource,
    decrypt_resource_with_password, decrypt_with_password,
};
pub use encryptor::{
    encrypt, encrypt_file, encrypt_file_with_password, encrypt_resource,
    encrypt_resource_with_password, encrypt_with_password,
};
pub use error::SealcryptError;
pub use key::Key;
pub use protected_key::PasswordProtectedKey;
