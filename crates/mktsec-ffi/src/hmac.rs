// Copyright (c) 2026 The mktsec Authors
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use mktsec_hmac::{hmac_sha512, verify_hmac_sha512};
use tracing::warn;

use crate::buffer;
use crate::error::BoundaryError;
use crate::status::{MKT_MISMATCH, MKT_OK};

/// Writes the 64-byte HMAC-SHA512 tag of `data` under `key` to `out`.
///
/// Returns [`MKT_OK`], `MKT_ERR_NULL_POINTER` when `out` is NULL or an input
/// pointer is NULL with a non-zero length, or `MKT_ERR_BUFFER_TOO_SMALL` when
/// `out_len < 64` (the buffer is left untouched).
///
/// # Safety
///
/// Each non-NULL pointer must be valid for its length; `out` must not overlap
/// the inputs.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn mkt_hmac_sha512(
    data_ptr: *const u8,
    data_len: usize,
    key_ptr: *const u8,
    key_len: usize,
    out_ptr: *mut u8,
    out_len: usize,
) -> i32 {
    // SAFETY: forwarded caller contract
    let result = unsafe { hmac_into(data_ptr, data_len, key_ptr, key_len, out_ptr, out_len) };

    match result {
        Ok(()) => MKT_OK,
        Err(err) => {
            warn!(error = %err, "mkt_hmac_sha512 rejected");
            err.status()
        }
    }
}

unsafe fn hmac_into(
    data_ptr: *const u8,
    data_len: usize,
    key_ptr: *const u8,
    key_len: usize,
    out_ptr: *mut u8,
    out_len: usize,
) -> Result<(), BoundaryError> {
    // SAFETY: forwarded caller contract
    let (data, key, out) = unsafe {
        (
            buffer::input("data", data_ptr, data_len)?,
            buffer::input("key", key_ptr, key_len)?,
            buffer::output("out", out_ptr, out_len)?,
        )
    };

    hmac_sha512(key, data, out)?;
    Ok(())
}

/// Checks `tag` against the HMAC-SHA512 of `data` under `key` in constant
/// time.
///
/// Returns [`MKT_OK`] on a match, [`MKT_MISMATCH`] otherwise (including a tag
/// that is not 64 bytes), or `MKT_ERR_NULL_POINTER`.
///
/// # Safety
///
/// Each non-NULL pointer must be valid for its length.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn mkt_hmac_sha512_verify(
    data_ptr: *const u8,
    data_len: usize,
    key_ptr: *const u8,
    key_len: usize,
    tag_ptr: *const u8,
    tag_len: usize,
) -> i32 {
    // SAFETY: forwarded caller contract
    let result = unsafe { verify_from(data_ptr, data_len, key_ptr, key_len, tag_ptr, tag_len) };

    match result {
        Ok(true) => MKT_OK,
        Ok(false) => MKT_MISMATCH,
        Err(err) => {
            warn!(error = %err, "mkt_hmac_sha512_verify rejected");
            err.status()
        }
    }
}

unsafe fn verify_from(
    data_ptr: *const u8,
    data_len: usize,
    key_ptr: *const u8,
    key_len: usize,
    tag_ptr: *const u8,
    tag_len: usize,
) -> Result<bool, BoundaryError> {
    // SAFETY: forwarded caller contract
    let (data, key, tag) = unsafe {
        (
            buffer::input("data", data_ptr, data_len)?,
            buffer::input("key", key_ptr, key_len)?,
            buffer::input("tag", tag_ptr, tag_len)?,
        )
    };

    Ok(verify_hmac_sha512(key, data, tag))
}
