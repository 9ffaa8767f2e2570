// Copyright (c) 2026 The mktsec Authors
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! C ABI for the mktsec HMAC-SHA512 engine and adaptive fingerprints.
//!
//! Declarations live in `include/mktsec.h`. All entry points report failure
//! through status codes or NULL; none of them panics on caller input.
//!
//! ## Ownership
//!
//! - Fingerprint strings are owned by the caller after return and go back
//!   through [`free_fingerprint_string`] exactly once.
//! - Version strings are static and never freed.
//! - Input buffers are borrowed for the duration of the call only.
//!
//! ## Configuration
//!
//! With the `env-config` feature (default) the fingerprint key and time bucket
//! are read once from `MKTSEC_FINGERPRINT_KEY` and `MKTSEC_TIME_BUCKET_SECS`.
//! Invalid values are logged and the built-in defaults are used.

mod buffer;
mod consts;
mod error;
mod fingerprint;
mod hmac;
mod status;
mod string;
mod version;

pub use consts::{ABI_VERSION, EPS_F32, EPS_F64};
pub use error::BoundaryError;
pub use fingerprint::{free_fingerprint_string, generate_adaptive_fingerprint, generator};
pub use hmac::{mkt_hmac_sha512, mkt_hmac_sha512_verify};
pub use status::{
    MKT_ERR_BUFFER_TOO_SMALL, MKT_ERR_CONFIG, MKT_ERR_INVALID_ENCODING, MKT_ERR_NULL_POINTER,
    MKT_MISMATCH, MKT_OK,
};
pub use string::FingerprintString;
pub use version::{mkt_abi_version, mkt_semver_string, mkt_version_string, version};
