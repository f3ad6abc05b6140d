//! # Error Types
//!
//! This module defines the error type used throughout the library.
//! All operations return [`Result<T, SealcryptError>`](SealcryptError).

use thiserror::Error;

/// The error type for all encryption, decryption, and key-handling
/// operations.
///
/// Callers that only want to know "did it decrypt" need a single predicate:
/// every authentication failure, wrong secret, truncation, and malformed
/// ciphertext surfaces as [`WrongKeyOrModifiedCiphertext`].
///
/// [`WrongKeyOrModifiedCiphertext`]: SealcryptError::WrongKeyOrModifiedCiphertext
#[derive(Error, Debug)]
pub enum SealcryptError {
    /// I/O error from the underlying stream or file.
    ///
    /// Also covers input and output paths that alias the same file, and
    /// streams that hit EOF before the expected amount of data.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An encoded input is structurally invalid.
    ///
    /// Raised only by the encoding layer: odd-length or non-hex input, a
    /// wrong or missing header, a too-short serialization, or a checksum
    /// mismatch. The crypto layer upgrades this to
    /// [`WrongKeyOrModifiedCiphertext`](SealcryptError::WrongKeyOrModifiedCiphertext)
    /// before it reaches callers of `decrypt`.
    #[error("bad encoding: {0}")]
    BadFormat(String),

    /// Integrity verification failed, the secret is wrong, or the
    /// ciphertext is truncated, malformed, or in the wrong format variant
    /// (raw where hex was expected or vice versa).
    ///
    /// Deliberately carries no detail: which check failed must not be
    /// observable.
    #[error("wrong key or modified ciphertext")]
    WrongKeyOrModifiedCiphertext,

    /// The platform is unusable: the CSPRNG failed, a primitive rejected
    /// valid parameters, an internal length invariant broke, or the CTR
    /// counter space was exhausted. Not worth retrying.
    #[error("environment is broken: {0}")]
    EnvironmentIsBroken(String),
}

impl SealcryptError {
    /// Boundary between the encoding layer and the crypto layer: precise
    /// `BadFormat` errors become the single "did not decrypt" kind. All
    /// other errors pass through unchanged.
    pub(crate) fn upgrade(self) -> Self {
        match self {
            SealcryptError::BadFormat(_) => SealcryptError::WrongKeyOrModifiedCiphertext,
            other => other,
        }
    }
}
