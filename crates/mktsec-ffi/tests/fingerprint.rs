// Copyright (c) 2026 The mktsec Authors
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::ffi::{CStr, c_char};
use core::ptr;
use std::ffi::CString;

use mktsec_ffi::{
    BoundaryError, FingerprintString, MKT_ERR_CONFIG, MKT_ERR_INVALID_ENCODING,
    free_fingerprint_string, generate_adaptive_fingerprint, generator,
};
use mktsec_fingerprint::{FINGERPRINT_HEX_LEN, FingerprintError, InputField};

/// Calls the C entry point and copies the result out before releasing it.
fn fingerprint(os: Option<&[u8]>, device: Option<&[u8]>, env: Option<&[u8]>) -> Option<String> {
    let os = os.map(|s| CString::new(s).expect("Failed to CString::new(..)"));
    let device = device.map(|s| CString::new(s).expect("Failed to CString::new(..)"));
    let env = env.map(|s| CString::new(s).expect("Failed to CString::new(..)"));

    let as_ptr = |s: &Option<CString>| s.as_ref().map_or(ptr::null(), |s| s.as_ptr());

    let raw = unsafe { generate_adaptive_fingerprint(as_ptr(&os), as_ptr(&device), as_ptr(&env)) };
    if raw.is_null() {
        return None;
    }

    let text = unsafe { CStr::from_ptr(raw) }
        .to_str()
        .expect("Failed to to_str()")
        .to_owned();
    unsafe { free_fingerprint_string(raw) };

    Some(text)
}

fn text(os: &str, device: &str, env: &str) -> String {
    fingerprint(Some(os.as_bytes()), Some(device.as_bytes()), Some(env.as_bytes()))
        .expect("Failed to generate_adaptive_fingerprint(..)")
}

#[test]
fn test_ffi_fingerprint_session_stability() {
    let a = text("linux", "device=phoneA;session=1001", "region=KSA");
    let b = text("linux", "device=phoneA;session=1002", "region=KSA");
    let c = text("linux", "device=phoneB;session=1001", "region=KSA");

    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_ffi_fingerprint_matches_generator() {
    let expected = generator().generate("linux", "device=phoneA", "region=KSA");
    assert_eq!(text("linux", "device=phoneA", "region=KSA"), expected.to_hex());
}

#[test]
fn test_ffi_fingerprint_empty_inputs() {
    let fp = text("", "", "");

    assert_eq!(fp.len(), FINGERPRINT_HEX_LEN);
    assert!(fp.bytes().all(|b| b.is_ascii_hexdigit() && !b.is_ascii_uppercase()));
}

#[test]
fn test_ffi_fingerprint_null_is_empty() {
    assert_eq!(fingerprint(None, None, None), Some(text("", "", "")));
    assert_eq!(
        fingerprint(Some(b"linux".as_slice()), None, Some(b"region=KSA".as_slice())),
        Some(text("linux", "", "region=KSA"))
    );
}

#[test]
fn test_ffi_fingerprint_invalid_utf8_is_null() {
    let invalid: &[u8] = &[0x6c, 0xc3, 0x28];

    assert_eq!(fingerprint(Some(invalid), Some(b"".as_slice()), Some(b"".as_slice())), None);
    assert_eq!(fingerprint(Some(b"".as_slice()), Some(invalid), Some(b"".as_slice())), None);
    assert_eq!(fingerprint(Some(b"".as_slice()), Some(b"".as_slice()), Some(invalid)), None);
}

#[test]
fn test_ffi_fingerprint_single_release() {
    let raw = unsafe { generate_adaptive_fingerprint(ptr::null(), ptr::null(), ptr::null()) };
    assert!(!raw.is_null());

    // Released exactly once; a second release would be undefined behavior
    unsafe { free_fingerprint_string(raw) };
}

#[test]
fn test_ffi_free_null_is_noop() {
    unsafe { free_fingerprint_string(ptr::null_mut::<c_char>()) };
}

#[test]
fn test_fingerprint_string_round_trip_through_raw() {
    let fp = generator().generate("linux", "", "");
    let owned = FingerprintString::new(&fp);

    assert_eq!(owned.as_bytes(), fp.to_hex().as_bytes());
    assert_eq!(owned.as_c_str().to_bytes(), fp.to_hex().as_bytes());

    let raw = owned.into_raw();
    let reclaimed = unsafe { FingerprintString::from_raw(raw) };
    assert_eq!(reclaimed.as_bytes(), fp.to_hex().as_bytes());
}

#[test]
fn test_boundary_error_status() {
    let err = BoundaryError::from(FingerprintError::InvalidEncoding {
        field: InputField::Env,
    });
    assert_eq!(err.status(), MKT_ERR_INVALID_ENCODING);
    assert_eq!(err.to_string(), "`env` is not valid UTF-8");

    assert_eq!(BoundaryError::from(FingerprintError::InvalidKey).status(), MKT_ERR_CONFIG);
}
