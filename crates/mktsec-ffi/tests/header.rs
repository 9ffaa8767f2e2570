// Copyright (c) 2026 The mktsec Authors
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! The C header stays in sync with the exported surface.

use mktsec_ffi::{
    MKT_ERR_BUFFER_TOO_SMALL, MKT_ERR_CONFIG, MKT_ERR_INVALID_ENCODING, MKT_ERR_NULL_POINTER,
    MKT_MISMATCH, MKT_OK,
};

const HEADER: &str = include_str!("../include/mktsec.h");

#[test]
fn test_header_declares_all_symbols() {
    for symbol in [
        "char *generate_adaptive_fingerprint(",
        "void free_fingerprint_string(char *ptr);",
        "const char *mkt_version_string(void);",
        "const char *mkt_semver_string(void);",
        "uint32_t mkt_abi_version(void);",
        "int32_t mkt_hmac_sha512(",
        "int32_t mkt_hmac_sha512_verify(",
    ] {
        assert!(HEADER.contains(symbol), "missing declaration: {symbol}");
    }
}

#[test]
fn test_header_constants_match() {
    let define = |name: &str, value: i32| {
        let rendered = if value < 0 {
            format!("#define {name} ({value})")
        } else {
            format!("#define {name} {value}")
        };
        assert!(HEADER.contains(&rendered), "missing `{rendered}`");
    };

    define("MKT_OK", MKT_OK);
    define("MKT_MISMATCH", MKT_MISMATCH);
    define("MKT_ERR_NULL_POINTER", MKT_ERR_NULL_POINTER);
    define("MKT_ERR_BUFFER_TOO_SMALL", MKT_ERR_BUFFER_TOO_SMALL);
    define("MKT_ERR_INVALID_ENCODING", MKT_ERR_INVALID_ENCODING);
    define("MKT_ERR_CONFIG", MKT_ERR_CONFIG);

    assert!(HEADER.contains("#define EPS_F32 1.0e-6"));
    assert!(HEADER.contains("#define EPS_F64 1.0e-12"));
}

#[test]
fn test_header_license_banner() {
    let banner: Vec<&str> = HEADER.lines().take(2).collect();
    assert_eq!(
        banner,
        [
            "/* Copyright (c) 2026 The mktsec Authors */",
            "/* SPDX-License-Identifier: GPL-3.0-only */",
        ]
    );
}
