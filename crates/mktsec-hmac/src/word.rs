// Copyright (c) 2026 The mktsec Authors
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Word64 - 64-bit word wrapper, zeroized on drop.
//!
//! All operations are in-place to avoid stack temporaries.
//! SHA-512 functions use internal temporaries that are zeroized before return.

use zeroize::Zeroize;

/// 64-bit word wrapper with guaranteed zeroization.
///
/// - `#[repr(transparent)]` ensures same layout as u64
/// - Drop zeroizes
/// - All operations are `_assign` variants for in-place mutation
#[derive(Default)]
#[repr(transparent)]
pub(crate) struct Word64(u64);

impl Word64 {
    /// Create new Word64 with given value
    #[inline(always)]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Create zero Word64
    #[inline(always)]
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Copy value from another Word64
    #[inline(always)]
    pub fn copy_from(&mut self, src: &Word64) {
        self.0 = src.0;
    }

    /// Fill word with big-endian bytes, zeroizing source bytes
    #[inline(always)]
    pub fn fill_with_be_bytes(&mut self, bytes: &mut [u8; 8]) {
        self.0 = 0;
        for byte in bytes.iter_mut() {
            self.0 = (self.0 << 8) | u64::from(*byte);
            *byte = 0;
        }
    }

    /// Export word as big-endian bytes, zeroizing self
    #[inline(always)]
    pub fn export_as_be_bytes(&mut self, bytes: &mut [u8; 8]) {
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = (self.0 >> (56 - 8 * i)) as u8;
        }
        self.0.zeroize();
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // Arithmetic operations (in-place)
    // ═══════════════════════════════════════════════════════════════════════════

    /// self += rhs (wrapping)
    #[inline(always)]
    pub fn wrapping_add_assign(&mut self, rhs: &Word64) {
        self.0 = self.0.wrapping_add(rhs.0);
    }

    /// self += rhs (wrapping, raw value)
    #[inline(always)]
    pub fn wrapping_add_assign_val(&mut self, rhs: u64) {
        self.0 = self.0.wrapping_add(rhs);
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // Bitwise operations (in-place)
    // ═══════════════════════════════════════════════════════════════════════════

    /// self ^= rhs
    #[inline(always)]
    pub fn xor_assign(&mut self, rhs: &Word64) {
        self.0 ^= rhs.0;
    }

    /// self &= rhs
    #[inline(always)]
    pub fn and_assign(&mut self, rhs: &Word64) {
        self.0 &= rhs.0;
    }

    /// self = !self
    #[inline(always)]
    pub fn not_assign(&mut self) {
        self.0 = !self.0;
    }

    /// self = self.rotate_right(n)
    #[inline(always)]
    pub fn rotate_right_assign(&mut self, n: u32) {
        self.0 = self.0.rotate_right(n);
    }

    /// self = self >> n
    #[inline(always)]
    pub fn shift_right_assign(&mut self, n: u32) {
        self.0 >>= n;
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // SHA-512 functions per RFC 6234 Section 5.2
    // Internal temporaries are zeroized before return.
    // ═══════════════════════════════════════════════════════════════════════════

    /// Ch(x,y,z) = (x ∧ y) ⊕ (¬x ∧ z)
    #[inline(always)]
    pub fn set_ch(out: &mut Word64, x: &Word64, y: &Word64, z: &Word64) {
        let mut x_and_y = Word64::zero();
        x_and_y.copy_from(x);
        x_and_y.and_assign(y);

        let mut not_x_and_z = Word64::zero();
        not_x_and_z.copy_from(x);
        not_x_and_z.not_assign();
        not_x_and_z.and_assign(z);

        out.zeroize();
        out.xor_assign(&x_and_y);
        out.xor_assign(&not_x_and_z);

        x_and_y.zeroize();
        not_x_and_z.zeroize();
    }

    /// Maj(x,y,z) = (x ∧ y) ⊕ (x ∧ z) ⊕ (y ∧ z)
    ///
    /// Computed as (x & y) ^ (z & (x ^ y))
    #[inline(always)]
    pub fn set_maj(out: &mut Word64, x: &Word64, y: &Word64, z: &Word64) {
        let mut xy = Word64::zero();
        xy.copy_from(x);
        xy.and_assign(y);

        let mut z_and_x_xor_y = Word64::zero();
        z_and_x_xor_y.copy_from(x);
        z_and_x_xor_y.xor_assign(y);
        z_and_x_xor_y.and_assign(z);

        out.zeroize();
        out.xor_assign(&xy);
        out.xor_assign(&z_and_x_xor_y);

        xy.zeroize();
        z_and_x_xor_y.zeroize();
    }

    /// Σ0(x) = ROTR^28(x) ⊕ ROTR^34(x) ⊕ ROTR^39(x)
    #[inline(always)]
    pub fn set_bsig0(out: &mut Word64, x: &Word64) {
        Self::set_rotations(out, x, [28, 34, 39]);
    }

    /// Σ1(x) = ROTR^14(x) ⊕ ROTR^18(x) ⊕ ROTR^41(x)
    #[inline(always)]
    pub fn set_bsig1(out: &mut Word64, x: &Word64) {
        Self::set_rotations(out, x, [14, 18, 41]);
    }

    /// σ0(x) = ROTR^1(x) ⊕ ROTR^8(x) ⊕ SHR^7(x)
    #[inline(always)]
    pub fn set_ssig0(out: &mut Word64, x: &Word64) {
        Self::set_rotations_shift(out, x, [1, 8], 7);
    }

    /// σ1(x) = ROTR^19(x) ⊕ ROTR^61(x) ⊕ SHR^6(x)
    #[inline(always)]
    pub fn set_ssig1(out: &mut Word64, x: &Word64) {
        Self::set_rotations_shift(out, x, [19, 61], 6);
    }

    #[inline(always)]
    fn set_rotations(out: &mut Word64, x: &Word64, rotations: [u32; 3]) {
        let mut v = Word64::zero();
        out.zeroize();

        for n in rotations {
            v.copy_from(x);
            v.rotate_right_assign(n);
            out.xor_assign(&v);
        }

        v.zeroize();
    }

    #[inline(always)]
    fn set_rotations_shift(out: &mut Word64, x: &Word64, rotations: [u32; 2], shift: u32) {
        let mut v = Word64::zero();
        out.zeroize();

        for n in rotations {
            v.copy_from(x);
            v.rotate_right_assign(n);
            out.xor_assign(&v);
        }

        v.copy_from(x);
        v.shift_right_assign(shift);
        out.xor_assign(&v);

        v.zeroize();
    }

    /// Get inner u64 value for testing/assertions only
    #[cfg(test)]
    #[inline(always)]
    pub(crate) fn as_u64(&self) -> u64 {
        self.0
    }

    #[cfg(test)]
    #[inline(always)]
    pub(crate) fn is_zeroized(&self) -> bool {
        self.0 == 0
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Zeroization
// ═══════════════════════════════════════════════════════════════════════════════

impl Zeroize for Word64 {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

impl Drop for Word64 {
    fn drop(&mut self) {
        self.zeroize();
    }
}
