// Copyright (c) 2026 The mktsec Authors
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// HMAC error
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HmacError {
    /// Output buffer cannot hold a full tag
    #[error("output buffer too small: need {required} bytes, got {actual}")]
    BufferTooSmall {
        /// Bytes required (always [`HASH_LEN`](crate::HASH_LEN))
        required: usize,
        /// Capacity supplied by the caller
        actual: usize,
    },
}
