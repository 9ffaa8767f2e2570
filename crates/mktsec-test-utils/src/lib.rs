// Copyright (c) 2026 The mktsec Authors
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for mktsec crates.
//!
//! ## License
//!
//! GPL-3.0-only

mod bits;
mod hex;

pub use bits::{bit_distance, flip_bit};
pub use hex::{bytes_to_hex, hex_to_bytes};
