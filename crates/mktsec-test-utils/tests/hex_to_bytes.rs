// Copyright (c) 2026 The mktsec Authors
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#[cfg(test)]
mod hex_to_bytes_tests {
    use mktsec_test_utils::{bytes_to_hex, hex_to_bytes};

    #[test]
    fn test_basic_hex() {
        assert_eq!(hex_to_bytes("deadbeef"), vec![0xde, 0xad, 0xbe, 0xef]);
    }

    #[test]
    fn test_uppercase() {
        assert_eq!(hex_to_bytes("ABCDEF"), vec![0xab, 0xcd, 0xef]);
    }

    #[test]
    fn test_wrapped_vector() {
        assert_eq!(hex_to_bytes("0001\n  0203"), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(hex_to_bytes(""), Vec::<u8>::new());
    }

    #[test]
    #[should_panic]
    fn test_invalid_hex_char() {
        hex_to_bytes("gg");
    }

    #[test]
    #[should_panic]
    fn test_odd_length() {
        hex_to_bytes("abc");
    }

    #[test]
    fn test_bytes_to_hex_lowercase() {
        assert_eq!(bytes_to_hex(&[0xAB, 0xCD, 0xEF, 0x01]), "abcdef01");
        assert_eq!(bytes_to_hex(&[]), "");
    }

    #[test]
    fn test_bytes_to_hex_inverts_hex_to_bytes() {
        let vector = "0b0b0b0b 0b0b0b0b\n 4869205468657265";
        assert_eq!(bytes_to_hex(&hex_to_bytes(vector)), "0b0b0b0b0b0b0b0b4869205468657265");
    }
}
