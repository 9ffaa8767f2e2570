// Copyright (c) 2026 The mktsec Authors
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::ffi::{CStr, c_char};
use core::ptr;
use std::sync::OnceLock;

use mktsec_fingerprint::{FingerprintConfig, FingerprintGenerator};
use tracing::warn;

use crate::error::BoundaryError;
use crate::string::FingerprintString;

static GENERATOR: OnceLock<FingerprintGenerator> = OnceLock::new();

/// Process-wide generator behind the C entry points, configured on first use.
pub fn generator() -> &'static FingerprintGenerator {
    GENERATOR.get_or_init(|| FingerprintGenerator::new(boundary_config()))
}

#[cfg(feature = "env-config")]
fn boundary_config() -> FingerprintConfig {
    FingerprintConfig::from_env().unwrap_or_else(|err| {
        warn!(error = %err, "fingerprint configuration rejected, using defaults");
        FingerprintConfig::default()
    })
}

#[cfg(not(feature = "env-config"))]
fn boundary_config() -> FingerprintConfig {
    FingerprintConfig::default()
}

/// # Safety
///
/// `ptr` must be NULL or point to a NUL-terminated string valid for `'a`.
unsafe fn c_text<'a>(ptr: *const c_char) -> &'a [u8] {
    if ptr.is_null() {
        return &[];
    }

    // SAFETY: non-NULL and NUL-terminated per the caller contract
    unsafe { CStr::from_ptr(ptr) }.to_bytes()
}

/// Fingerprint of (os, device_info, env_data) as newly allocated hex text.
///
/// NULL inputs are treated as empty. Returns NULL when an input is not valid
/// UTF-8. A non-NULL result must be released exactly once with
/// [`free_fingerprint_string`]; releasing it twice or reading it after release
/// is undefined behavior.
///
/// # Safety
///
/// Each non-NULL argument must point to a NUL-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn generate_adaptive_fingerprint(
    os: *const c_char,
    device_info: *const c_char,
    env_data: *const c_char,
) -> *mut c_char {
    // SAFETY: forwarded caller contract
    let (os, device, env) = unsafe { (c_text(os), c_text(device_info), c_text(env_data)) };

    match generator().generate_from_bytes(os, device, env) {
        Ok(fingerprint) => FingerprintString::new(&fingerprint).into_raw(),
        Err(err) => {
            let err = BoundaryError::from(err);
            warn!(error = %err, status = err.status(), "generate_adaptive_fingerprint rejected");
            ptr::null_mut()
        }
    }
}

/// Releases a string returned by [`generate_adaptive_fingerprint`]. NULL is a
/// no-op.
///
/// # Safety
///
/// `ptr` must be NULL or a pointer from [`generate_adaptive_fingerprint`] that
/// has not been released yet.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn free_fingerprint_string(ptr: *mut c_char) {
    if ptr.is_null() {
        return;
    }

    // SAFETY: forwarded caller contract; the value zeroizes on drop
    drop(unsafe { FingerprintString::from_raw(ptr) });
}
