// Copyright (c) 2026 The mktsec Authors
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::ffi::{CStr, c_char};

use crate::consts::ABI_VERSION;

static VERSION: &CStr = match CStr::from_bytes_with_nul(
    concat!(env!("CARGO_PKG_VERSION"), "\0").as_bytes(),
) {
    Ok(version) => version,
    Err(_) => panic!("package version contains a NUL byte"),
};

/// Crate version as a C string.
pub fn version() -> &'static CStr {
    VERSION
}

/// Static, NUL-terminated version text. Never free it.
#[unsafe(no_mangle)]
pub extern "C" fn mkt_version_string() -> *const c_char {
    VERSION.as_ptr()
}

/// Static, NUL-terminated SemVer text. Never free it.
#[unsafe(no_mangle)]
pub extern "C" fn mkt_semver_string() -> *const c_char {
    VERSION.as_ptr()
}

#[unsafe(no_mangle)]
pub extern "C" fn mkt_abi_version() -> u32 {
    ABI_VERSION
}
