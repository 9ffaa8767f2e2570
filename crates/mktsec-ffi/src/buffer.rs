// Copyright (c) 2026 The mktsec Authors
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Pointer/length pairs from C.
//!
//! A NULL input with length 0 is the empty slice. The output pointer is
//! always required.

use core::slice;

use crate::error::BoundaryError;

/// # Safety
///
/// Unless `len` is 0, `ptr` must be NULL or valid for reads of `len` bytes for
/// `'a`.
pub(crate) unsafe fn input<'a>(
    arg: &'static str,
    ptr: *const u8,
    len: usize,
) -> Result<&'a [u8], BoundaryError> {
    if len == 0 {
        return Ok(&[]);
    }
    if ptr.is_null() {
        return Err(BoundaryError::NullPointer { arg });
    }

    // SAFETY: non-NULL and valid for `len` bytes per the caller contract
    Ok(unsafe { slice::from_raw_parts(ptr, len) })
}

/// # Safety
///
/// `ptr` must be NULL or valid for writes of `len` bytes for `'a`, and must
/// not alias any input.
pub(crate) unsafe fn output<'a>(
    arg: &'static str,
    ptr: *mut u8,
    len: usize,
) -> Result<&'a mut [u8], BoundaryError> {
    if ptr.is_null() {
        return Err(BoundaryError::NullPointer { arg });
    }

    // SAFETY: non-NULL and valid for `len` bytes per the caller contract
    Ok(unsafe { slice::from_raw_parts_mut(ptr, len) })
}
