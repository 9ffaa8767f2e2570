// Copyright (c) 2026 The mktsec Authors
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Parses a hexadecimal string into bytes.
///
/// Whitespace is ignored so long test vectors can be wrapped.
///
/// # Panics
///
/// Panics if the string contains invalid hex characters or has odd length.
///
/// # Example
///
/// ```
/// use mktsec_test_utils::hex_to_bytes;
///
/// assert_eq!(hex_to_bytes("dead beef"), vec![0xde, 0xad, 0xbe, 0xef]);
/// ```
pub fn hex_to_bytes(text: &str) -> Vec<u8> {
    let digits: String = text.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    ::hex::decode(digits).expect("invalid hex string")
}

/// Lowercase hex of `bytes`, for assertion messages.
///
/// ```
/// use mktsec_test_utils::bytes_to_hex;
///
/// assert_eq!(bytes_to_hex(&[0xde, 0xad, 0x0f]), "dead0f");
/// ```
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    ::hex::encode(bytes)
}
