// Copyright (c) 2026 The mktsec Authors
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Single-precision tolerance for callers' approximate comparisons.
pub const EPS_F32: f32 = 1.0e-6;

/// Double-precision tolerance for callers' approximate comparisons.
pub const EPS_F64: f64 = 1.0e-12;

/// Binary interface revision, bumped on any breaking change to `mktsec.h`.
pub const ABI_VERSION: u32 = 1;
