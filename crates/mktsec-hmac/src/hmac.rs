// Copyright (c) 2026 The mktsec Authors
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! HMAC-SHA512 implementation per RFC 2104

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::consts::{BLOCK_LEN, HASH_LEN, IPAD, OPAD};
use crate::sha512::Sha512;

/// Streaming HMAC-SHA512 state with all intermediate buffers.
///
/// Key material (pads, normalized key) and the inner digest are zeroized as
/// soon as they are consumed and again on drop.
///
/// The pads are derived from the full zero-padded key block, so the work done
/// never depends on key bytes; only the public key length selects whether the
/// key is hashed first.
///
/// ```
/// use mktsec_hmac::{HASH_LEN, HmacSha512, hmac_sha512_tag};
///
/// let mut mac = HmacSha512::new(b"key");
/// mac.update(b"The quick brown fox ");
/// mac.update(b"jumps over the lazy dog");
///
/// let mut tag = [0u8; HASH_LEN];
/// mac.finalize(&mut tag);
///
/// assert_eq!(
///     tag,
///     hmac_sha512_tag(b"key", b"The quick brown fox jumps over the lazy dog")
/// );
/// ```
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct HmacSha512 {
    /// K ⊕ ipad (0x36 repeated)
    k_ipad: [u8; BLOCK_LEN],
    /// K ⊕ opad (0x5c repeated)
    k_opad: [u8; BLOCK_LEN],
    /// Normalized key K': hashed when longer than a block, zero-padded
    key_block: [u8; BLOCK_LEN],
    /// SHA-512 state for inner hash computation
    sha_inner: Sha512,
    /// SHA-512 state for outer hash computation
    sha_outer: Sha512,
    /// Inner hash result: SHA512(K ⊕ ipad || message)
    inner_hash: [u8; HASH_LEN],
}

impl HmacSha512 {
    /// Create a keyed HMAC-SHA512 state. Any key length is accepted.
    pub fn new(key: &[u8]) -> Self {
        let mut state = Self {
            k_ipad: [0u8; BLOCK_LEN],
            k_opad: [0u8; BLOCK_LEN],
            key_block: [0u8; BLOCK_LEN],
            sha_inner: Sha512::new(),
            sha_outer: Sha512::new(),
            inner_hash: [0u8; HASH_LEN],
        };
        state.init(key);
        state
    }

    fn init(&mut self, key: &[u8]) {
        // Prevent stale-bytes window
        self.key_block.zeroize();

        if key.len() > BLOCK_LEN {
            // K' = SHA512(K), zero-padded
            self.sha_inner.update(key);
            self.sha_inner.finalize_reset(&mut self.inner_hash);
            self.key_block[..HASH_LEN].copy_from_slice(&self.inner_hash);
            self.inner_hash.zeroize();
        } else {
            self.key_block[..key.len()].copy_from_slice(key);
        }

        for ((ipad, opad), k) in self
            .k_ipad
            .iter_mut()
            .zip(self.k_opad.iter_mut())
            .zip(self.key_block.iter())
        {
            *ipad = k ^ IPAD;
            *opad = k ^ OPAD;
        }
        self.key_block.zeroize();

        // Inner hash starts with K ⊕ ipad
        self.sha_inner.update(&self.k_ipad);
        self.k_ipad.zeroize();
    }

    /// Absorb message bytes
    pub fn update(&mut self, data: &[u8]) {
        self.sha_inner.update(data);
    }

    /// Write the 64-byte tag, consuming the state
    pub fn finalize(mut self, out: &mut [u8; HASH_LEN]) {
        // Inner hash: SHA512(k_ipad || data)
        self.sha_inner.finalize_reset(&mut self.inner_hash);

        // Outer hash: SHA512(k_opad || inner_hash) -> out
        self.sha_outer.update(&self.k_opad);
        self.sha_outer.update(&self.inner_hash);
        self.sha_outer.finalize_reset(out);

        self.k_opad.zeroize();
        self.inner_hash.zeroize();
    }

    /// True when key-derived buffers are wiped (test only)
    #[cfg(test)]
    pub(crate) fn key_material_zeroized(&self) -> bool {
        self.k_ipad.iter().all(|b| *b == 0)
            && self.key_block.iter().all(|b| *b == 0)
            && self.inner_hash.iter().all(|b| *b == 0)
    }
}
