// src/consts.rs

//! Format constants shared by every layer of the crate.

/// Version header of the ciphertext format produced by this crate.
pub const CURRENT_VERSION: [u8; 4] = [0xDE, 0xF5, 0x02, 0x00];

/// Version header of a key's checksummed ASCII-safe serialization.
pub const KEY_CURRENT_VERSION: [u8; 4] = [0xDE, 0xF0, 0x00, 0x00];

/// Version header of a password-protected key's ASCII-safe serialization.
pub const PASSWORD_KEY_CURRENT_VERSION: [u8; 4] = [0xDE, 0xF1, 0x00, 0x00];

/// All version headers are exactly this long, so no header can be a prefix
/// of another.
pub const HEADER_VERSION_SIZE: usize = 4;

pub const SALT_BYTE_SIZE: usize = 32;

/// AES block size; also the length of a CTR-mode IV.
pub const BLOCK_BYTE_SIZE: usize = 16;

pub const KEY_BYTE_SIZE: usize = 32;

/// Length of an HMAC-SHA256 tag.
pub const MAC_BYTE_SIZE: usize = 32;

/// Length of the SHA-256 checksum in ASCII-safe serializations. The full
/// digest is kept; truncating it would make byte-at-a-time oracle attacks
/// against key serializations easier than against ciphertexts.
pub const CHECKSUM_BYTE_SIZE: usize = 32;

/// Only the first 16 bytes of the derived 32-byte encryption key are
/// consumed by AES-128.
pub const CIPHER_KEY_BYTE_SIZE: usize = 16;

/// header + salt + IV + MAC; a ciphertext carrying an empty plaintext.
pub const MINIMUM_CIPHERTEXT_SIZE: usize =
    HEADER_VERSION_SIZE + SALT_BYTE_SIZE + BLOCK_BYTE_SIZE + MAC_BYTE_SIZE;

/// Streaming chunk size. Must be a multiple of [`BLOCK_BYTE_SIZE`] so the
/// CTR counter advances by a whole number of blocks per chunk.
pub const BUFFER_BYTE_SIZE: usize = 1_048_576;

pub const PBKDF2_ITERATIONS: u32 = 100_000;

/// HKDF info strings separating the authentication and encryption subkeys.
/// These are wire constants; changing them breaks every existing ciphertext.
pub const AUTHENTICATION_INFO_STRING: &[u8] = b"DefusePHP|V2|KeyForAuthentication";
pub const ENCRYPTION_INFO_STRING: &[u8] = b"DefusePHP|V2|KeyForEncryption";
