// Copyright (c) 2026 The mktsec Authors
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::ffi::CStr;
use std::ffi::CString;
use std::thread;

use mktsec_ffi::{MKT_OK, free_fingerprint_string, generate_adaptive_fingerprint, mkt_hmac_sha512};
use mktsec_hmac::hmac_sha512_tag;

const THREADS: usize = 8;
const ROUNDS: usize = 50;

#[test]
fn test_concurrent_fingerprints_are_independent() {
    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            thread::spawn(move || {
                let os = CString::new("linux").expect("Failed to CString::new(..)");
                let device = CString::new(format!("device=phone{}", t % 2))
                    .expect("Failed to CString::new(..)");
                let env = CString::new("region=KSA").expect("Failed to CString::new(..)");

                let mut seen = Vec::with_capacity(ROUNDS);
                for _ in 0..ROUNDS {
                    let raw = unsafe {
                        generate_adaptive_fingerprint(os.as_ptr(), device.as_ptr(), env.as_ptr())
                    };
                    assert!(!raw.is_null());

                    let text = unsafe { CStr::from_ptr(raw) }.to_bytes().to_vec();
                    unsafe { free_fingerprint_string(raw) };
                    seen.push(text);
                }

                seen.dedup();
                assert_eq!(seen.len(), 1);
                (t % 2, seen.remove(0))
            })
        })
        .collect();

    let results: Vec<(usize, Vec<u8>)> = handles
        .into_iter()
        .map(|h| h.join().expect("Failed to join(..)"))
        .collect();

    for (group, fp) in &results {
        for (other_group, other) in &results {
            assert_eq!(group == other_group, fp == other);
        }
    }
}

#[test]
fn test_concurrent_hmac_disjoint_buffers() {
    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            thread::spawn(move || {
                let key = [t as u8; 32];
                let data = vec![t as u8; 1000 + t];
                let expected = hmac_sha512_tag(&key, &data);

                for _ in 0..ROUNDS {
                    let mut out = [0u8; 64];
                    let status = unsafe {
                        mkt_hmac_sha512(
                            data.as_ptr(),
                            data.len(),
                            key.as_ptr(),
                            key.len(),
                            out.as_mut_ptr(),
                            out.len(),
                        )
                    };
                    assert_eq!(status, MKT_OK);
                    assert_eq!(out, expected);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("Failed to join(..)");
    }
}
