// src/secret.rs

//! The tagged secret (key or password) and the subkey derivation pipeline
//! every encrypt/decrypt runs through.

use sha2::{Digest, Sha256};
use zeroize::Zeroizing;

use crate::consts::{
    AUTHENTICATION_INFO_STRING, CIPHER_KEY_BYTE_SIZE, ENCRYPTION_INFO_STRING, KEY_BYTE_SIZE,
    PBKDF2_ITERATIONS, SALT_BYTE_SIZE,
};
use crate::crypto::kdf::hkdf::derive_hkdf_sha256;
use crate::crypto::kdf::pbkdf2::derive_pbkdf2_sha256;
use crate::error::SealcryptError;
use crate::key::Key;
use crate::sensitive::SecretBytes32;

/// What an operation encrypts or decrypts with. Borrowed so the public
/// entry points can fan out per secret kind without copying key material.
pub(crate) enum Secret<'a> {
    Key(&'a Key),
    Password(&'a [u8]),
}

/// The per-operation subkey pair. The authentication key feeds HMAC; AES-128
/// consumes the first 16 bytes of the encryption key.
pub(crate) struct DerivedKeys {
    authentication_key: SecretBytes32,
    encryption_key: SecretBytes32,
}

impl DerivedKeys {
    pub(crate) fn authentication_key(&self) -> &[u8] {
        self.authentication_key.as_ref()
    }

    pub(crate) fn cipher_key(&self) -> &[u8] {
        &self.encryption_key.as_bytes()[..CIPHER_KEY_BYTE_SIZE]
    }
}

impl Secret<'_> {
    /// Derive `(authentication_key, encryption_key)` from this secret and a
    /// fresh 32-byte salt.
    ///
    /// A password is pre-hashed with SHA-256 before PBKDF2: that normalizes
    /// variable-length passwords and domain-separates this use of the
    /// password from whatever else the caller runs with it. A raw key skips
    /// the stretch and feeds HKDF directly.
    pub(crate) fn derive_keys(
        &self,
        salt: &[u8; SALT_BYTE_SIZE],
    ) -> Result<DerivedKeys, SealcryptError> {
        let prekey: Zeroizing<[u8; KEY_BYTE_SIZE]> = match self {
            Secret::Key(key) => Zeroizing::new(*key.raw_bytes()),
            Secret::Password(password) => {
                let mut prehash = Zeroizing::new([0u8; KEY_BYTE_SIZE]);
                prehash.copy_from_slice(Sha256::digest(password).as_slice());
                let mut stretched = Zeroizing::new([0u8; KEY_BYTE_SIZE]);
                derive_pbkdf2_sha256(
                    prehash.as_slice(),
                    salt,
                    PBKDF2_ITERATIONS,
                    stretched.as_mut_slice(),
                )?;
                stretched
            }
        };

        let mut authentication_key = Zeroizing::new([0u8; KEY_BYTE_SIZE]);
        let mut encryption_key = Zeroizing::new([0u8; KEY_BYTE_SIZE]);
        derive_hkdf_sha256(
            prekey.as_slice(),
            salt,
            AUTHENTICATION_INFO_STRING,
            authentication_key.as_mut_slice(),
        )?;
        derive_hkdf_sha256(
            prekey.as_slice(),
            salt,
            ENCRYPTION_INFO_STRING,
            encryption_key.as_mut_slice(),
        )?;

        Ok(DerivedKeys {
            authentication_key: SecretBytes32::new(*authentication_key),
            encryption_key: SecretBytes32::new(*encryption_key),
        })
    }
}
