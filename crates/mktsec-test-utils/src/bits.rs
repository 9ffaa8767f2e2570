// Copyright (c) 2026 The mktsec Authors
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Number of differing bits between two equal-length byte slices.
///
/// # Panics
///
/// Panics if the slices differ in length.
///
/// ```
/// use mktsec_test_utils::bit_distance;
///
/// assert_eq!(bit_distance(&[0b1010, 0xff], &[0b0011, 0xff]), 2);
/// ```
pub fn bit_distance(a: &[u8], b: &[u8]) -> u32 {
    assert_eq!(a.len(), b.len(), "bit_distance needs equal lengths");

    a.iter().zip(b).map(|(x, y)| (x ^ y).count_ones()).sum()
}

/// Returns a copy of `data` with bit `bit` flipped (bit 0 is the LSB of byte 0).
///
/// # Panics
///
/// Panics if `bit` is out of range.
///
/// ```
/// use mktsec_test_utils::flip_bit;
///
/// assert_eq!(flip_bit(&[0x00, 0x00], 9), vec![0x00, 0x02]);
/// ```
pub fn flip_bit(data: &[u8], bit: usize) -> Vec<u8> {
    let mut flipped = data.to_vec();
    flipped[bit / 8] ^= 1 << (bit % 8);
    flipped
}
