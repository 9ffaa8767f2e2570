// Copyright (c) 2026 The mktsec Authors
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#[cfg(test)]
mod bits_tests {
    use mktsec_test_utils::{bit_distance, flip_bit};

    #[test]
    fn test_identical_slices() {
        assert_eq!(bit_distance(&[0xab; 16], &[0xab; 16]), 0);
    }

    #[test]
    fn test_inverted_slices() {
        assert_eq!(bit_distance(&[0x00; 8], &[0xff; 8]), 64);
    }

    #[test]
    fn test_flip_bit_changes_exactly_one_bit() {
        let data = [0x5au8; 4];
        for bit in 0..32 {
            assert_eq!(bit_distance(&data, &flip_bit(&data, bit)), 1);
        }
    }

    #[test]
    fn test_flip_bit_twice_restores() {
        let data = [1u8, 2, 3];
        assert_eq!(flip_bit(&flip_bit(&data, 17), 17), data.to_vec());
    }

    #[test]
    #[should_panic]
    fn test_different_lengths() {
        bit_distance(&[0u8; 2], &[0u8; 3]);
    }

    #[test]
    #[should_panic]
    fn test_flip_out_of_range() {
        flip_bit(&[0u8; 1], 8);
    }
}
