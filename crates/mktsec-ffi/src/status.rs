// Copyright (c) 2026 The mktsec Authors
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Status codes returned across the C boundary.

/// Success.
pub const MKT_OK: i32 = 0;
/// Verification ran and the tag did not match.
pub const MKT_MISMATCH: i32 = 1;
/// A required pointer was NULL.
pub const MKT_ERR_NULL_POINTER: i32 = -1;
/// Output capacity below the fixed result size.
pub const MKT_ERR_BUFFER_TOO_SMALL: i32 = -2;
/// Text input is not valid UTF-8.
pub const MKT_ERR_INVALID_ENCODING: i32 = -3;
/// Invalid fingerprint configuration.
pub const MKT_ERR_CONFIG: i32 = -4;
