// src/decryptor/stream.rs

//! Two-pass streaming decryption.
//!
//! Pass 1 authenticates the whole input against the trailing MAC without
//! producing any plaintext, snapshotting an incremental MAC at every chunk
//! boundary. Pass 2 re-reads the input, rechecks each chunk against its
//! snapshot, and only then decrypts and writes it. The snapshots pin the
//! exact bytes observed in pass 1, so mutating the file between the passes
//! is caught before the tampered chunk's plaintext leaves the library.

use std::collections::VecDeque;
use std::fs::File;
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;

use hmac::digest::Output;
use hmac::Mac;
use zeroize::Zeroizing;

use crate::consts::{
    BLOCK_BYTE_SIZE, BUFFER_BYTE_SIZE, CURRENT_VERSION, HEADER_VERSION_SIZE, MAC_BYTE_SIZE,
    MINIMUM_CIPHERTEXT_SIZE, SALT_BYTE_SIZE,
};
use crate::crypto::cipher::apply_ctr_keystream;
use crate::crypto::hmac::{new_hmac_sha256, HmacSha256};
use crate::error::SealcryptError;
use crate::key::Key;
use crate::secret::Secret;
use crate::utils::{check_counter_range, constant_time_eq, ensure_distinct_paths, increment_counter};

const CIPHERTEXT_START: u64 = (HEADER_VERSION_SIZE + SALT_BYTE_SIZE + BLOCK_BYTE_SIZE) as u64;

/// Decrypt the file at `input_path` into `output_path` under a [`Key`].
///
/// The input is fully authenticated before the first plaintext byte is
/// written. The two paths must not refer to the same file.
pub fn decrypt_file(
    input_path: &Path,
    output_path: &Path,
    key: &Key,
) -> Result<(), SealcryptError> {
    decrypt_file_internal(input_path, output_path, &Secret::Key(key))
}

/// Password variant of [`decrypt_file`].
pub fn decrypt_file_with_password(
    input_path: &Path,
    output_path: &Path,
    password: &[u8],
) -> Result<(), SealcryptError> {
    decrypt_file_internal(input_path, output_path, &Secret::Password(password))
}

/// Decrypt from a seekable reader into any writer under a [`Key`].
///
/// Seekability is required by the two-pass protocol; wrap non-seekable
/// sources in a temp file first.
pub fn decrypt_resource<R: Read + Seek, W: Write>(
    input: &mut R,
    output: &mut W,
    key: &Key,
) -> Result<(), SealcryptError> {
    decrypt_resource_internal(input, output, &Secret::Key(key))
}

/// Password variant of [`decrypt_resource`].
pub fn decrypt_resource_with_password<R: Read + Seek, W: Write>(
    input: &mut R,
    output: &mut W,
    password: &[u8],
) -> Result<(), SealcryptError> {
    decrypt_resource_internal(input, output, &Secret::Password(password))
}

fn decrypt_file_internal(
    input_path: &Path,
    output_path: &Path,
    secret: &Secret<'_>,
) -> Result<(), SealcryptError> {
    ensure_distinct_paths(input_path, output_path)?;
    let mut input = File::open(input_path)?;
    let mut output = File::create(output_path)?;
    decrypt_resource_internal(&mut input, &mut output, secret)
}

pub(crate) fn decrypt_resource_internal<R: Read + Seek, W: Write>(
    input: &mut R,
    output: &mut W,
    secret: &Secret<'_>,
) -> Result<(), SealcryptError> {
    let input_size = input.seek(SeekFrom::End(0))?;
    if input_size < MINIMUM_CIPHERTEXT_SIZE as u64 {
        return Err(SealcryptError::WrongKeyOrModifiedCiphertext);
    }

    input.seek(SeekFrom::Start(0))?;
    let mut header = [0u8; HEADER_VERSION_SIZE];
    input.read_exact(&mut header)?;
    let mut salt = [0u8; SALT_BYTE_SIZE];
    input.read_exact(&mut salt)?;
    let mut iv = [0u8; BLOCK_BYTE_SIZE];
    input.read_exact(&mut iv)?;

    if !constant_time_eq(&header, &CURRENT_VERSION) {
        return Err(SealcryptError::WrongKeyOrModifiedCiphertext);
    }

    // the seek lands on the first MAC byte, i.e. one past the ciphertext
    let ciphertext_end = input.seek(SeekFrom::End(-(MAC_BYTE_SIZE as i64)))?;
    let mut stored_mac = [0u8; MAC_BYTE_SIZE];
    input.read_exact(&mut stored_mac)?;

    let ciphertext_len = ciphertext_end - CIPHERTEXT_START;
    check_counter_range(&iv, ciphertext_len.div_ceil(BLOCK_BYTE_SIZE as u64))?;

    let keys = secret.derive_keys(&salt)?;

    let mut mac = new_hmac_sha256(keys.authentication_key())?;
    mac.update(&header);
    mac.update(&salt);
    mac.update(&iv);
    let mut mac_pass2 = mac.clone();

    // Pass 1: authenticate everything, snapshotting the running MAC at each
    // chunk boundary.
    let mut chunk_macs: VecDeque<Output<HmacSha256>> = VecDeque::new();
    let mut buffer = Zeroizing::new(vec![0u8; BUFFER_BYTE_SIZE]);

    input.seek(SeekFrom::Start(CIPHERTEXT_START))?;
    let mut position = CIPHERTEXT_START;
    while position < ciphertext_end {
        let chunk_len = chunk_length(position, ciphertext_end);
        input.read_exact(&mut buffer[..chunk_len])?;
        mac.update(&buffer[..chunk_len]);
        chunk_macs.push_back(mac.clone().finalize().into_bytes());
        position += chunk_len as u64;
    }

    if !constant_time_eq(mac.finalize().into_bytes().as_slice(), &stored_mac) {
        return Err(SealcryptError::WrongKeyOrModifiedCiphertext);
    }

    // Pass 2: re-read, recheck every chunk against its pass-1 snapshot,
    // then decrypt and write it.
    input.seek(SeekFrom::Start(CIPHERTEXT_START))?;
    let mut chunk_iv = iv;
    let mut position = CIPHERTEXT_START;
    while position < ciphertext_end {
        let chunk_len = chunk_length(position, ciphertext_end);
        input.read_exact(&mut buffer[..chunk_len])?;
        mac_pass2.update(&buffer[..chunk_len]);
        let running = mac_pass2.clone().finalize().into_bytes();
        let expected = chunk_macs
            .pop_front()
            .ok_or(SealcryptError::WrongKeyOrModifiedCiphertext)?;
        if !constant_time_eq(running.as_slice(), expected.as_slice()) {
            // the file changed between the passes
            return Err(SealcryptError::WrongKeyOrModifiedCiphertext);
        }
        apply_ctr_keystream(keys.cipher_key(), &chunk_iv, &mut buffer[..chunk_len])?;
        output.write_all(&buffer[..chunk_len])?;
        position += chunk_len as u64;
        if position < ciphertext_end {
            increment_counter(&mut chunk_iv, (BUFFER_BYTE_SIZE / BLOCK_BYTE_SIZE) as u64)?;
        }
    }

    Ok(())
}

#[inline]
fn chunk_length(position: u64, ciphertext_end: u64) -> usize {
    (ciphertext_end - position).min(BUFFER_BYTE_SIZE as u64) as usize
}
