// Copyright (c) 2026 The mktsec Authors
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// SHA-512 output size in bytes
pub const HASH_LEN: usize = 64;

/// SHA-512 block size in bytes
pub const BLOCK_LEN: usize = 128;

/// HMAC inner pad byte per RFC 2104
pub(crate) const IPAD: u8 = 0x36;

/// HMAC outer pad byte per RFC 2104
pub(crate) const OPAD: u8 = 0x5c;
