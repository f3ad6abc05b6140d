// src/protected_key.rs

//! A random [`Key`] wrapped in a password-derived ciphertext.
//!
//! The envelope lets an application keep one strong random key at rest
//! while the user only remembers a password, and lets the password change
//! without re-encrypting everything the key protects.

use sha2::{Digest, Sha256};
use zeroize::Zeroizing;

use crate::consts::{KEY_BYTE_SIZE, PASSWORD_KEY_CURRENT_VERSION};
use crate::decryptor::decrypt::decrypt_internal;
use crate::encoding::{decode_checksummed_ascii, encode_checksummed_ascii};
use crate::encryptor::encrypt::encrypt_internal;
use crate::error::SealcryptError;
use crate::key::Key;
use crate::secret::Secret;

/// A [`Key`] encrypted under a password.
#[derive(Clone)]
pub struct PasswordProtectedKey {
    /// Hex ciphertext of the inner key's ASCII-safe serialization.
    encrypted_key: String,
}

impl PasswordProtectedKey {
    /// Generate a fresh random key and wrap it under `password`.
    ///
    /// The key itself is only obtainable through [`unlock`](Self::unlock).
    pub fn create(password: &[u8]) -> Result<Self, SealcryptError> {
        let key = Key::random()?;
        Self::wrap(&key, password)
    }

    /// Recover the inner key. A wrong password surfaces as
    /// `WrongKeyOrModifiedCiphertext`, indistinguishable from a tampered
    /// envelope.
    pub fn unlock(&self, password: &[u8]) -> Result<Key, SealcryptError> {
        let prehash = password_prehash(password);
        let key_ascii = Zeroizing::new(decrypt_internal(
            self.encrypted_key.as_bytes(),
            &Secret::Password(prehash.as_slice()),
            false,
        )?);
        let key_ascii = std::str::from_utf8(&key_ascii)
            .map_err(|_| SealcryptError::WrongKeyOrModifiedCiphertext)?;
        // a decode failure here means an attacker minted a valid ciphertext
        // over garbage with our password; report it like any other tamper
        Key::load_from_ascii_safe_string(key_ascii).map_err(SealcryptError::upgrade)
    }

    /// Re-wrap the inner key under a new password, consuming the old
    /// envelope. The unlocked key never escapes this scope.
    pub fn change_password(
        self,
        current_password: &[u8],
        new_password: &[u8],
    ) -> Result<Self, SealcryptError> {
        let key = self.unlock(current_password)?;
        Self::wrap(&key, new_password)
    }

    /// Serialize as a checksummed lowercase-hex string.
    pub fn save_to_ascii_safe_string(&self) -> String {
        encode_checksummed_ascii(&PASSWORD_KEY_CURRENT_VERSION, self.encrypted_key.as_bytes())
    }

    /// Decode a string produced by [`save_to_ascii_safe_string`](Self::save_to_ascii_safe_string).
    pub fn load_from_ascii_safe_string(ascii: &str) -> Result<Self, SealcryptError> {
        let payload =
            decode_checksummed_ascii(&PASSWORD_KEY_CURRENT_VERSION, ascii.as_bytes(), true)?;
        let encrypted_key = String::from_utf8(payload.to_vec())
            .map_err(|_| SealcryptError::BadFormat("inner ciphertext is not ASCII hex".into()))?;
        Ok(Self { encrypted_key })
    }

    fn wrap(key: &Key, password: &[u8]) -> Result<Self, SealcryptError> {
        let prehash = password_prehash(password);
        let key_ascii = Zeroizing::new(key.save_to_ascii_safe_string());
        let encrypted = encrypt_internal(
            key_ascii.as_bytes(),
            &Secret::Password(prehash.as_slice()),
            false,
        )?;
        let encrypted_key = String::from_utf8(encrypted).map_err(|_| {
            SealcryptError::EnvironmentIsBroken("hex encoder produced non-ASCII output".into())
        })?;
        Ok(Self { encrypted_key })
    }
}

/// The password is hashed once before it reaches the password-based
/// encryption path (which hashes again). Domain-separates this envelope
/// from the caller's direct `encrypt_with_password` use of the same
/// password.
fn password_prehash(password: &[u8]) -> Zeroizing<[u8; KEY_BYTE_SIZE]> {
    let mut prehash = Zeroizing::new([0u8; KEY_BYTE_SIZE]);
    prehash.copy_from_slice(Sha256::digest(password).as_slice());
    prehash
}
