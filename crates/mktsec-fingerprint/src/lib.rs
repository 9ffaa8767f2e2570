// Copyright (c) 2026 The mktsec Authors
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Adaptive device/environment fingerprints.
//!
//! Three free-form inputs (OS identifier, device info, environment data) are
//! normalized, split into stable and volatile fields, encoded unambiguously and
//! keyed with HMAC-SHA512. Ephemeral identifiers are excluded and drifting
//! values (timestamps, counters, battery level) are bucketed, so repeated
//! sessions of the same device map to the same fingerprint.

#[cfg(test)]
mod tests;

mod canonical;
mod classify;
mod config;
mod environment;
mod error;
mod generator;
mod normalize;

pub use classify::{FieldClass, UNKNOWN_BUCKET, quantize};
pub use config::{
    COUNTER_KEYS, DEFAULT_APP_KEY, DEFAULT_BATTERY_WIDTH, DEFAULT_COUNTER_WIDTH,
    DEFAULT_EXCLUDED_KEYS, DEFAULT_TIME_BUCKET_SECS, ENV_FINGERPRINT_KEY, ENV_TIME_BUCKET_SECS,
    FingerprintConfig, FingerprintKey, TIME_KEYS,
};
pub use environment::EnvironmentClass;
pub use error::{FingerprintError, InputField};
pub use generator::{FINGERPRINT_HEX_LEN, Fingerprint, FingerprintGenerator};
pub use normalize::{Field, normalize_input};
