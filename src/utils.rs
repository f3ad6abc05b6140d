// src/utils.rs

//! Small primitives the rest of the crate leans on: constant-time equality
//! and big-endian counter arithmetic on CTR-mode IVs.

use std::io;
use std::path::Path;

use subtle::ConstantTimeEq;

use crate::consts::BLOCK_BYTE_SIZE;
use crate::error::SealcryptError;

/// Compare two byte strings without early exit on content.
///
/// Returns true iff the lengths match and all bytes are equal. Lengths are
/// public; a length mismatch returns false immediately. Used for every MAC,
/// checksum, and header check in the crate.
#[inline]
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.ct_eq(b).into()
}

/// Add `inc` blocks to a 16-byte big-endian CTR counter in place.
///
/// Carry propagates from the least-significant byte upward. A carry out of
/// the most-significant byte means the counter space is exhausted; no
/// further block may be encrypted under this IV.
pub fn increment_counter(
    iv: &mut [u8; BLOCK_BYTE_SIZE],
    inc: u64,
) -> Result<(), SealcryptError> {
    let mut carry = u128::from(inc);
    for byte in iv.iter_mut().rev() {
        let sum = u128::from(*byte) + (carry & 0xff);
        *byte = (sum & 0xff) as u8;
        carry = (carry >> 8) + (sum >> 8);
    }
    if carry != 0 {
        return Err(SealcryptError::EnvironmentIsBroken(
            "CTR counter overflow".into(),
        ));
    }
    Ok(())
}

/// Reject up front a ciphertext whose block count would run the counter past
/// the end of its 128-bit range. Callable only where the total length is
/// known, i.e. the streaming decrypt path.
pub fn check_counter_range(
    iv: &[u8; BLOCK_BYTE_SIZE],
    blocks: u64,
) -> Result<(), SealcryptError> {
    let start = u128::from_be_bytes(*iv);
    let span = u128::from(blocks.saturating_sub(1));
    if start.checked_add(span).is_none() {
        return Err(SealcryptError::EnvironmentIsBroken(
            "input is too large for the CTR counter space under this IV".into(),
        ));
    }
    Ok(())
}

/// The streaming entry points refuse to run with input and output aliasing
/// the same file. Paths that cannot be canonicalized (e.g. an output that
/// does not exist yet) are trivially distinct.
pub(crate) fn ensure_distinct_paths(input: &Path, output: &Path) -> Result<(), SealcryptError> {
    if let (Ok(canonical_in), Ok(canonical_out)) = (input.canonicalize(), output.canonicalize()) {
        if canonical_in == canonical_out {
            return Err(SealcryptError::Io(io::Error::new(
                io::ErrorKind::InvalidInput,
                "input and output refer to the same file",
            )));
        }
    }
    Ok(())
}
