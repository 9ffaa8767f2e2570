// Copyright (c) 2026 The mktsec Authors
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Canonical message encoding.
//!
//! ```text
//! DOMAIN_TAG
//! for each section (os, device, env):
//!     section:u8  count:u64be
//!     for each field:
//!         key_len:u64be key  class:u8  value_len:u64be value
//! environment:u8
//! ```
//!
//! Every variable-length item is length-prefixed, so no two distinct inputs
//! share an encoding.

use mktsec_hmac::HmacSha512;

use crate::classify::ClassifiedField;
use crate::environment::EnvironmentClass;

pub(crate) const DOMAIN_TAG: &[u8] = b"mktsec/fingerprint/v1";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub(crate) enum Section {
    Os = 0x01,
    Device = 0x02,
    Env = 0x03,
}

/// Anything the canonical message can be streamed into.
pub(crate) trait CanonicalSink {
    fn absorb(&mut self, bytes: &[u8]);
}

impl CanonicalSink for HmacSha512 {
    fn absorb(&mut self, bytes: &[u8]) {
        self.update(bytes);
    }
}

impl CanonicalSink for Vec<u8> {
    fn absorb(&mut self, bytes: &[u8]) {
        self.extend_from_slice(bytes);
    }
}

fn absorb_len<S: CanonicalSink>(sink: &mut S, len: usize) {
    sink.absorb(&(len as u64).to_be_bytes());
}

fn absorb_prefixed<S: CanonicalSink>(sink: &mut S, bytes: &[u8]) {
    absorb_len(sink, bytes.len());
    sink.absorb(bytes);
}

pub(crate) fn encode<S: CanonicalSink>(
    sink: &mut S,
    sections: &[(Section, &[ClassifiedField])],
    environment: EnvironmentClass,
) {
    sink.absorb(DOMAIN_TAG);

    for (section, fields) in sections {
        sink.absorb(&[*section as u8]);
        absorb_len(sink, fields.len());

        for field in *fields {
            absorb_prefixed(sink, field.key.as_bytes());
            sink.absorb(&[field.tag]);
            absorb_prefixed(sink, field.value.as_bytes());
        }
    }

    sink.absorb(&[environment.tag()]);
}
