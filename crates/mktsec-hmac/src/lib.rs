// Copyright (c) 2026 The mktsec Authors
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! HMAC-SHA512 implementation with zeroizing internal state
//!
//! Implementation per RFC 2104 (HMAC) and RFC 6234 (SHA-512).
//! All intermediate values are zeroized.
//!
//! References:
//! - RFC 2104: HMAC: Keyed-Hashing for Message Authentication
//!   <https://datatracker.ietf.org/doc/html/rfc2104>
//! - RFC 4231: Identifiers and Test Vectors for HMAC-SHA-224, HMAC-SHA-256,
//!   HMAC-SHA-384, and HMAC-SHA-512
//!   <https://datatracker.ietf.org/doc/html/rfc4231>
//! - RFC 6234: US Secure Hash Algorithms (SHA and SHA-based HMAC and HKDF)
//!   <https://datatracker.ietf.org/doc/html/rfc6234>

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod consts;
mod error;
mod hmac;
mod sha512;
mod word;

use subtle::ConstantTimeEq;
use zeroize::Zeroize;

pub use consts::{BLOCK_LEN, HASH_LEN};
pub use error::HmacError;
pub use hmac::HmacSha512;
pub use sha512::Sha512;

/// SHA-512 digest of `data`.
pub fn sha512(data: &[u8], out: &mut [u8; HASH_LEN]) {
    let mut state = Sha512::new();
    state.update(data);
    state.finalize(out);
}

/// HMAC-SHA512 of `data` under `key`, written into the first 64 bytes of `out`.
///
/// Empty keys and messages are valid. Bytes of `out` past the tag are left
/// untouched.
///
/// # Errors
///
/// [`HmacError::BufferTooSmall`] when `out` holds fewer than [`HASH_LEN`]
/// bytes; `out` is not written in that case.
///
/// ```
/// use mktsec_hmac::{HmacError, hmac_sha512};
///
/// let mut out = [0u8; 64];
/// hmac_sha512(b"Jefe", b"what do ya want for nothing?", &mut out)
///     .expect("Failed to hmac_sha512(..)");
/// assert_eq!(out[..4], [0x16, 0x4b, 0x7a, 0x7b]);
///
/// let mut short = [0u8; 32];
/// assert_eq!(
///     hmac_sha512(b"Jefe", b"", &mut short),
///     Err(HmacError::BufferTooSmall { required: 64, actual: 32 })
/// );
/// ```
pub fn hmac_sha512(key: &[u8], data: &[u8], out: &mut [u8]) -> Result<(), HmacError> {
    let actual = out.len();
    let Some((tag, _)) = out.split_first_chunk_mut::<HASH_LEN>() else {
        return Err(HmacError::BufferTooSmall {
            required: HASH_LEN,
            actual,
        });
    };

    let mut mac = HmacSha512::new(key);
    mac.update(data);
    mac.finalize(tag);

    Ok(())
}

/// HMAC-SHA512 of `data` under `key` as a fixed-size tag.
pub fn hmac_sha512_tag(key: &[u8], data: &[u8]) -> [u8; HASH_LEN] {
    let mut tag = [0u8; HASH_LEN];
    let mut mac = HmacSha512::new(key);
    mac.update(data);
    mac.finalize(&mut tag);
    tag
}

/// Verifies an HMAC-SHA512 tag in constant time.
///
/// A `tag` of the wrong length never verifies.
pub fn verify_hmac_sha512(key: &[u8], data: &[u8], tag: &[u8]) -> bool {
    let mut expected = hmac_sha512_tag(key, data);
    let matches: bool = expected[..].ct_eq(tag).into();
    expected.zeroize();
    matches
}
