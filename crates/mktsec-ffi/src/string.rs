// Copyright (c) 2026 The mktsec Authors
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Owned fingerprint text handed across the C boundary.

use core::ffi::{CStr, c_char};
use core::mem;

use mktsec_fingerprint::Fingerprint;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// NUL-terminated fingerprint hex with a single owner.
///
/// [`into_raw`](Self::into_raw) moves ownership to C; the pointer comes back
/// exactly once through [`from_raw`](Self::from_raw), and dropping the value
/// wipes the text before the allocation is released.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct FingerprintString {
    bytes: Box<[u8]>,
}

impl FingerprintString {
    pub fn new(fingerprint: &Fingerprint) -> Self {
        let mut bytes = fingerprint.to_hex().into_bytes();
        bytes.push(0);

        Self {
            bytes: bytes.into_boxed_slice(),
        }
    }

    /// Hex text without the terminator.
    pub fn as_bytes(&self) -> &[u8] {
        self.bytes
            .split_last()
            .map(|(_, text)| text)
            .unwrap_or_default()
    }

    pub fn as_c_str(&self) -> &CStr {
        CStr::from_bytes_with_nul(&self.bytes).unwrap_or_default()
    }

    /// Releases ownership to the caller.
    pub fn into_raw(mut self) -> *mut c_char {
        let bytes = mem::take(&mut self.bytes);
        Box::into_raw(bytes).cast::<c_char>()
    }

    /// Reclaims a pointer produced by [`into_raw`](Self::into_raw).
    ///
    /// # Safety
    ///
    /// `ptr` must come from [`into_raw`](Self::into_raw), must not have been
    /// reclaimed before, and the text must not have been modified.
    pub unsafe fn from_raw(ptr: *mut c_char) -> Self {
        // SAFETY: the caller guarantees `ptr` is an unmodified, NUL-terminated
        // allocation from `into_raw`, so its length including the NUL is the
        // boxed slice length.
        let len = unsafe { CStr::from_ptr(ptr) }.to_bytes_with_nul().len();
        let raw = core::ptr::slice_from_raw_parts_mut(ptr.cast::<u8>(), len);

        Self {
            // SAFETY: `raw` describes exactly the slice leaked by `into_raw`.
            bytes: unsafe { Box::from_raw(raw) },
        }
    }
}

impl From<&Fingerprint> for FingerprintString {
    fn from(fingerprint: &Fingerprint) -> Self {
        Self::new(fingerprint)
    }
}
