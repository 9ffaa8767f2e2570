// Copyright (c) 2026 The mktsec Authors
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Tests for HMAC-SHA512

use crate::consts::{BLOCK_LEN, HASH_LEN};
use crate::error::HmacError;
use crate::hmac::HmacSha512;
use crate::{hmac_sha512, hmac_sha512_tag, sha512, verify_hmac_sha512};

const FOX: &[u8] = b"The quick brown fox jumps over the lazy dog";

#[test]
fn test_hmac_known_answer_fox() {
    let tag = hmac_sha512_tag(b"key", FOX);
    assert_eq!(
        tag[..8],
        [0xb4, 0x2a, 0xf0, 0x90, 0x57, 0xba, 0xc1, 0xe2]
    );
    assert_eq!(tag[HASH_LEN - 4..], [0x2e, 0xbe, 0xeb, 0x3a]);
}

#[test]
fn test_hmac_buffer_too_small_leaves_buffer_untouched() {
    let mut out = [0xa5u8; 32];
    let result = hmac_sha512(b"key", FOX, &mut out);

    assert_eq!(
        result,
        Err(HmacError::BufferTooSmall {
            required: HASH_LEN,
            actual: 32
        })
    );
    assert_eq!(out, [0xa5u8; 32]);
}

#[test]
fn test_hmac_buffer_off_by_one() {
    let mut out = [0u8; HASH_LEN - 1];
    assert!(hmac_sha512(b"key", FOX, &mut out).is_err());

    let mut out: [u8; 0] = [];
    assert_eq!(
        hmac_sha512(b"key", FOX, &mut out),
        Err(HmacError::BufferTooSmall {
            required: HASH_LEN,
            actual: 0
        })
    );
}

#[test]
fn test_hmac_larger_buffer_tail_untouched() {
    let mut out = [0xeeu8; HASH_LEN + 16];
    hmac_sha512(b"key", FOX, &mut out).expect("Failed to hmac_sha512(..)");

    assert_eq!(out[..HASH_LEN], hmac_sha512_tag(b"key", FOX));
    assert_eq!(out[HASH_LEN..], [0xeeu8; 16]);
}

#[test]
fn test_hmac_error_message() {
    let err = HmacError::BufferTooSmall {
        required: 64,
        actual: 10,
    };
    assert_eq!(
        err.to_string(),
        "output buffer too small: need 64 bytes, got 10"
    );
}

#[test]
fn test_hmac_streaming_matches_one_shot() {
    let msg: Vec<u8> = (0..=255u8).cycle().take(1000).collect();
    let expected = hmac_sha512_tag(b"streaming key", &msg);

    for split in [0, 1, 63, 64, 127, 128, 129, 500, msg.len()] {
        let mut mac = HmacSha512::new(b"streaming key");
        mac.update(&msg[..split]);
        mac.update(&msg[split..]);

        let mut tag = [0u8; HASH_LEN];
        mac.finalize(&mut tag);
        assert_eq!(tag, expected, "split at {split}");
    }
}

#[test]
fn test_hmac_long_key_is_hashed_first() {
    let long_key = [0x42u8; BLOCK_LEN + 1];
    let mut digest = [0u8; HASH_LEN];
    sha512(&long_key, &mut digest);

    assert_eq!(
        hmac_sha512_tag(&long_key, FOX),
        hmac_sha512_tag(&digest, FOX)
    );
}

#[test]
fn test_hmac_block_sized_key_is_not_hashed() {
    let key = [0x42u8; BLOCK_LEN];
    let mut digest = [0u8; HASH_LEN];
    sha512(&key, &mut digest);

    assert_ne!(hmac_sha512_tag(&key, FOX), hmac_sha512_tag(&digest, FOX));
}

#[test]
fn test_hmac_trailing_zero_key_bytes_equivalent() {
    // Keys are zero-padded to the block, so trailing zeros do not change the tag
    assert_eq!(
        hmac_sha512_tag(b"key", FOX),
        hmac_sha512_tag(b"key\0\0\0", FOX)
    );
}

#[test]
fn test_hmac_key_sensitivity() {
    assert_ne!(hmac_sha512_tag(b"key", FOX), hmac_sha512_tag(b"kez", FOX));
    assert_ne!(hmac_sha512_tag(b"key", FOX), hmac_sha512_tag(b"key", b"The"));
}

#[test]
fn test_hmac_deterministic() {
    let a = hmac_sha512_tag(b"k", b"m");
    let b = hmac_sha512_tag(b"k", b"m");
    assert_eq!(a, b);
}

#[test]
fn test_verify_accepts_valid_tag() {
    let tag = hmac_sha512_tag(b"key", FOX);
    assert!(verify_hmac_sha512(b"key", FOX, &tag));
}

#[test]
fn test_verify_rejects_modified_tag() {
    let mut tag = hmac_sha512_tag(b"key", FOX);
    tag[HASH_LEN - 1] ^= 0x01;
    assert!(!verify_hmac_sha512(b"key", FOX, &tag));
}

#[test]
fn test_verify_rejects_wrong_length() {
    let tag = hmac_sha512_tag(b"key", FOX);
    assert!(!verify_hmac_sha512(b"key", FOX, &tag[..32]));
    assert!(!verify_hmac_sha512(b"key", FOX, &[]));

    let mut longer = tag.to_vec();
    longer.push(0);
    assert!(!verify_hmac_sha512(b"key", FOX, &longer));
}

#[test]
fn test_hmac_key_material_zeroized_after_new() {
    let mac = HmacSha512::new(b"secret key");
    assert!(mac.key_material_zeroized());

    let mac = HmacSha512::new(&[0x11u8; BLOCK_LEN * 2]);
    assert!(mac.key_material_zeroized());
}

#[test]
fn test_hmac_key_material_zeroized_after_update() {
    let mut mac = HmacSha512::new(b"secret key");
    mac.update(&[0x5au8; BLOCK_LEN * 3]);
    assert!(mac.key_material_zeroized());
}
