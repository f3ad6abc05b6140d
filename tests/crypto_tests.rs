//! tests/crypto_tests.rs
//! In-memory encrypt/decrypt: round-trips, freshness, and every way a
//! ciphertext can fail to authenticate.

mod common;

use common::{flip_byte, test_key, TEST_DATA, TEST_PASSWORD};
use sealcrypt_rs::consts::MINIMUM_CIPHERTEXT_SIZE;
use sealcrypt_rs::{
    decrypt, decrypt_with_password, encrypt, encrypt_with_password, Key, SealcryptError,
};

// ---------------------------------------------------------------------------
// 1. Round-trips
// ---------------------------------------------------------------------------

#[test]
fn roundtrip_key_raw_and_hex() {
    let key = test_key();
    let large_100kb = vec![0x41u8; 100_000];

    let cases: &[&[u8]] = &[b"", b"a", TEST_DATA, &large_100kb];
    for &plaintext in cases {
        for raw_binary in [true, false] {
            let ciphertext = encrypt(plaintext, &key, raw_binary).unwrap();
            let decrypted = decrypt(&ciphertext, &key, raw_binary).unwrap();
            assert_eq!(decrypted, plaintext, "raw_binary={raw_binary}");
        }
    }
}

#[test]
fn empty_plaintext_is_minimum_size() {
    let key = test_key();
    let ciphertext = encrypt(b"", &key, true).unwrap();
    assert_eq!(ciphertext.len(), MINIMUM_CIPHERTEXT_SIZE);
    assert_eq!(decrypt(&ciphertext, &key, true).unwrap(), b"");
}

#[test]
fn roundtrip_password_raw() {
    let ciphertext = encrypt_with_password(TEST_DATA, TEST_PASSWORD, true).unwrap();
    let decrypted = decrypt_with_password(&ciphertext, TEST_PASSWORD, true).unwrap();
    assert_eq!(decrypted, TEST_DATA);
}

#[test]
fn roundtrip_password_hex() {
    let ciphertext = encrypt_with_password(b"abcdef", TEST_PASSWORD, false).unwrap();
    assert!(ciphertext.iter().all(u8::is_ascii), "hex output is ASCII");
    assert!(
        !ciphertext.iter().any(u8::is_ascii_uppercase),
        "hex output is lowercase"
    );
    let decrypted = decrypt_with_password(&ciphertext, TEST_PASSWORD, false).unwrap();
    assert_eq!(decrypted, b"abcdef");
}

// ---------------------------------------------------------------------------
// 2. Freshness: same input, different output
// ---------------------------------------------------------------------------

#[test]
fn repeated_encryption_differs() {
    let key = test_key();
    let first = encrypt(b"same input", &key, true).unwrap();
    let second = encrypt(b"same input", &key, true).unwrap();
    assert_ne!(first, second, "salt and IV must be fresh per call");
    assert_eq!(decrypt(&first, &key, true).unwrap(), b"same input");
    assert_eq!(decrypt(&second, &key, true).unwrap(), b"same input");
}

// ---------------------------------------------------------------------------
// 3. Authentication failures
// ---------------------------------------------------------------------------

fn assert_rejected(result: Result<Vec<u8>, SealcryptError>) {
    assert!(matches!(
        result,
        Err(SealcryptError::WrongKeyOrModifiedCiphertext)
    ));
}

#[test]
fn bit_flips_are_rejected() {
    let ciphertext = encrypt_with_password(TEST_DATA, TEST_PASSWORD, true).unwrap();

    // header, salt, IV, ciphertext body, MAC
    let indices = [0, 4 + 1, 4 + 32 + 1, 4 + 32 + 16 + 1, ciphertext.len() - 1];
    for index in indices {
        let mut tampered = ciphertext.clone();
        flip_byte(&mut tampered, index);
        assert_rejected(decrypt_with_password(&tampered, TEST_PASSWORD, true));
    }
}

#[test]
fn every_byte_of_a_short_ciphertext_is_covered() {
    let key = test_key();
    let ciphertext = encrypt(b"ab", &key, true).unwrap();
    for index in 0..ciphertext.len() {
        let mut tampered = ciphertext.clone();
        flip_byte(&mut tampered, index);
        assert_rejected(decrypt(&tampered, &key, true));
    }
}

#[test]
fn appended_byte_is_rejected() {
    let mut ciphertext = encrypt_with_password(TEST_DATA, TEST_PASSWORD, true).unwrap();
    ciphertext.push(0x00);
    assert_rejected(decrypt_with_password(&ciphertext, TEST_PASSWORD, true));
}

#[test]
fn truncated_ciphertext_is_rejected() {
    let key = test_key();
    let ciphertext = encrypt(TEST_DATA, &key, true).unwrap();
    let truncated = &ciphertext[..ciphertext.len() - 1];
    assert_rejected(decrypt(truncated, &key, true));
}

#[test]
fn wrong_key_is_rejected() {
    let ciphertext = encrypt(TEST_DATA, &test_key(), true).unwrap();
    assert_rejected(decrypt(&ciphertext, &test_key(), true));
}

#[test]
fn wrong_password_is_rejected() {
    let ciphertext = encrypt_with_password(b"abcdef", TEST_PASSWORD, true).unwrap();
    assert_rejected(decrypt_with_password(&ciphertext, b"wrong_password", true));
}

#[test]
fn key_and_password_secrets_do_not_cross() {
    let key = Key::random().unwrap();
    let ciphertext = encrypt(TEST_DATA, &key, true).unwrap();
    assert_rejected(decrypt_with_password(
        &ciphertext,
        key.raw_bytes().as_slice(),
        true,
    ));
}

// ---------------------------------------------------------------------------
// 4. Format-variant mismatches
// ---------------------------------------------------------------------------

#[test]
fn raw_ciphertext_fed_to_hex_decrypt_is_rejected() {
    let ciphertext = encrypt_with_password(TEST_DATA, TEST_PASSWORD, true).unwrap();
    assert_rejected(decrypt_with_password(&ciphertext, TEST_PASSWORD, false));
}

#[test]
fn hex_ciphertext_fed_to_raw_decrypt_is_rejected() {
    let ciphertext = encrypt_with_password(TEST_DATA, TEST_PASSWORD, false).unwrap();
    assert_rejected(decrypt_with_password(&ciphertext, TEST_PASSWORD, true));
}

#[test]
fn non_hex_garbage_is_upgraded_to_wrong_key() {
    // the encoding layer's BadFormat must not leak out of decrypt
    let key = test_key();
    assert_rejected(decrypt(b"not hex at all!", &key, false));
}

// ---------------------------------------------------------------------------
// 5. Length floor
// ---------------------------------------------------------------------------

#[test]
fn inputs_below_the_minimum_size_are_rejected() {
    let key = test_key();
    assert_rejected(decrypt(b"", &key, true));
    assert_rejected(decrypt(&[0u8; MINIMUM_CIPHERTEXT_SIZE - 1], &key, true));

    let short_hex = "00".repeat(MINIMUM_CIPHERTEXT_SIZE - 1);
    assert_rejected(decrypt(short_hex.as_bytes(), &key, false));
}
