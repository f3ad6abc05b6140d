// src/encryptor/stream.rs

//! Streaming encryption for inputs larger than memory.
//!
//! Works through fixed-size chunks: each chunk is CTR-encrypted under the
//! running IV, written, and fed to the streaming HMAC; the IV advances by
//! one buffer's worth of blocks between chunks.

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

use hmac::Mac;
use zeroize::Zeroizing;

use crate::consts::{
    BLOCK_BYTE_SIZE, BUFFER_BYTE_SIZE, CURRENT_VERSION, SALT_BYTE_SIZE,
};
use crate::crypto::cipher::apply_ctr_keystream;
use crate::crypto::hmac::new_hmac_sha256;
use crate::crypto::rng::fill_random;
use crate::error::SealcryptError;
use crate::key::Key;
use crate::secret::Secret;
use crate::utils::{ensure_distinct_paths, increment_counter};

/// Encrypt the file at `input_path` into `output_path` under a [`Key`].
///
/// The two paths must not refer to the same file. A partial output file is
/// left behind on failure; callers are responsible for cleanup.
pub fn encrypt_file(
    input_path: &Path,
    output_path: &Path,
    key: &Key,
) -> Result<(), SealcryptError> {
    encrypt_file_internal(input_path, output_path, &Secret::Key(key))
}

/// Password variant of [`encrypt_file`].
pub fn encrypt_file_with_password(
    input_path: &Path,
    output_path: &Path,
    password: &[u8],
) -> Result<(), SealcryptError> {
    encrypt_file_internal(input_path, output_path, &Secret::Password(password))
}

/// Encrypt from any reader into any writer under a [`Key`]. The handles
/// must be distinct resources.
pub fn encrypt_resource<R: Read, W: Write>(
    input: &mut R,
    output: &mut W,
    key: &Key,
) -> Result<(), SealcryptError> {
    encrypt_resource_internal(input, output, &Secret::Key(key))
}

/// Password variant of [`encrypt_resource`].
pub fn encrypt_resource_with_password<R: Read, W: Write>(
    input: &mut R,
    output: &mut W,
    password: &[u8],
) -> Result<(), SealcryptError> {
    encrypt_resource_internal(input, output, &Secret::Password(password))
}

fn encrypt_file_internal(
    input_path: &Path,
    output_path: &Path,
    secret: &Secret<'_>,
) -> Result<(), SealcryptError> {
    ensure_distinct_paths(input_path, output_path)?;
    let mut input = File::open(input_path)?;
    let mut output = File::create(output_path)?;
    encrypt_resource_internal(&mut input, &mut output, secret)
}

pub(crate) fn encrypt_resource_internal<R: Read, W: Write>(
    input: &mut R,
    output: &mut W,
    secret: &Secret<'_>,
) -> Result<(), SealcryptError> {
    let mut salt = [0u8; SALT_BYTE_SIZE];
    fill_random(&mut salt)?;
    let mut iv = [0u8; BLOCK_BYTE_SIZE];
    fill_random(&mut iv)?;

    let keys = secret.derive_keys(&salt)?;

    output.write_all(&CURRENT_VERSION)?;
    output.write_all(&salt)?;
    output.write_all(&iv)?;

    let mut mac = new_hmac_sha256(keys.authentication_key())?;
    mac.update(&CURRENT_VERSION);
    mac.update(&salt);
    mac.update(&iv);

    // plaintext stages through this buffer before in-place encryption
    let mut buffer = Zeroizing::new(vec![0u8; BUFFER_BYTE_SIZE]);
    let mut chunk_iv = iv;

    loop {
        let read = read_full(input, &mut buffer)?;
        apply_ctr_keystream(keys.cipher_key(), &chunk_iv, &mut buffer[..read])?;
        output.write_all(&buffer[..read])?;
        mac.update(&buffer[..read]);
        if read < BUFFER_BYTE_SIZE {
            break;
        }
        increment_counter(&mut chunk_iv, (BUFFER_BYTE_SIZE / BLOCK_BYTE_SIZE) as u64)?;
    }

    output.write_all(mac.finalize().into_bytes().as_slice())?;
    Ok(())
}

/// Drive `read` until the buffer is full or the input is exhausted. A short
/// return therefore always means EOF.
fn read_full<R: Read>(input: &mut R, buffer: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buffer.len() {
        match input.read(&mut buffer[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
