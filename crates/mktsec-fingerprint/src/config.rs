// Copyright (c) 2026 The mktsec Authors
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Fingerprint configuration: application key and field rules.

use std::collections::{BTreeMap, BTreeSet};
use std::env::{self, VarError};
use std::fmt;
use std::num::NonZeroU64;

use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::classify::FieldClass;
use crate::error::FingerprintError;
use crate::normalize::normalize_text;

/// Hex-encoded application key.
pub const ENV_FINGERPRINT_KEY: &str = "MKTSEC_FINGERPRINT_KEY";
/// Bucket width, in seconds, for time-like fields.
pub const ENV_TIME_BUCKET_SECS: &str = "MKTSEC_TIME_BUCKET_SECS";

/// Built-in application key, used when none is configured.
pub const DEFAULT_APP_KEY: &[u8] = b"mktsec/fingerprint/app-key/v1";

/// Ephemeral identifiers, dropped before hashing.
pub const DEFAULT_EXCLUDED_KEYS: [&str; 13] = [
    "session",
    "session_id",
    "sid",
    "nonce",
    "request_id",
    "req_id",
    "trace_id",
    "token",
    "csrf",
    "ephemeral_id",
    "tab_id",
    "pid",
    "run_id",
];

/// Time-like fields, bucketed by [`DEFAULT_TIME_BUCKET_SECS`].
pub const TIME_KEYS: [&str; 7] = [
    "ts",
    "timestamp",
    "time",
    "last_seen",
    "login_time",
    "boot_time",
    "uptime",
];

/// Monotonic counters, bucketed by [`DEFAULT_COUNTER_WIDTH`].
pub const COUNTER_KEYS: [&str; 3] = ["counter", "seq", "sequence"];

pub const DEFAULT_TIME_BUCKET_SECS: NonZeroU64 = width(86_400);
pub const DEFAULT_COUNTER_WIDTH: NonZeroU64 = width(1_000);
pub const DEFAULT_BATTERY_WIDTH: NonZeroU64 = width(25);

const fn width(value: u64) -> NonZeroU64 {
    match NonZeroU64::new(value) {
        Some(w) => w,
        None => panic!("quantization width must be non-zero"),
    }
}

/// Application key for the fingerprint digest.
///
/// Zeroized on drop. `Debug` never prints the key bytes.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct FingerprintKey(Vec<u8>);

impl FingerprintKey {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// Parses a hex-encoded key. Surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// [`FingerprintError::InvalidKey`] on malformed hex or an empty key.
    pub fn from_hex(text: &str) -> Result<Self, FingerprintError> {
        let bytes = hex::decode(text.trim()).map_err(|_| FingerprintError::InvalidKey)?;
        if bytes.is_empty() {
            return Err(FingerprintError::InvalidKey);
        }

        Ok(Self(bytes))
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for FingerprintKey {
    fn default() -> Self {
        Self::new(DEFAULT_APP_KEY)
    }
}

impl fmt::Debug for FingerprintKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED FingerprintKey]")
    }
}

/// Key and field rules used by [`FingerprintGenerator`](crate::FingerprintGenerator).
///
/// ```
/// use std::num::NonZeroU64;
/// use mktsec_fingerprint::{FieldClass, FingerprintConfig, FingerprintKey};
///
/// let hour = NonZeroU64::new(3_600).expect("non-zero");
/// let config = FingerprintConfig::default()
///     .with_key(FingerprintKey::new(*b"application key"))
///     .exclude("build_id")
///     .quantize("ts", hour);
///
/// assert_eq!(config.classify("build_id"), FieldClass::Excluded);
/// assert_eq!(config.classify("ts"), FieldClass::Quantized { width: hour });
/// assert_eq!(config.classify("os_family"), FieldClass::Stable);
/// ```
#[derive(Clone, Debug)]
pub struct FingerprintConfig {
    key: FingerprintKey,
    excluded: BTreeSet<String>,
    quantized: BTreeMap<String, NonZeroU64>,
}

impl Default for FingerprintConfig {
    fn default() -> Self {
        let mut quantized = BTreeMap::new();
        for key in TIME_KEYS {
            quantized.insert(key.to_owned(), DEFAULT_TIME_BUCKET_SECS);
        }
        for key in COUNTER_KEYS {
            quantized.insert(key.to_owned(), DEFAULT_COUNTER_WIDTH);
        }
        quantized.insert("battery".to_owned(), DEFAULT_BATTERY_WIDTH);

        Self {
            key: FingerprintKey::default(),
            excluded: DEFAULT_EXCLUDED_KEYS.iter().map(|k| (*k).to_owned()).collect(),
            quantized,
        }
    }
}

impl FingerprintConfig {
    /// Default rules, with the key and time bucket overridable from the
    /// process environment.
    ///
    /// # Errors
    ///
    /// [`FingerprintError::InvalidConfig`] when a variable is set but
    /// malformed. Unset variables keep the defaults.
    pub fn from_env() -> Result<Self, FingerprintError> {
        let mut config = Self::default();

        if let Some(raw) = read_var(ENV_FINGERPRINT_KEY)? {
            let raw = Zeroizing::new(raw);
            let key = FingerprintKey::from_hex(&raw).map_err(|_| FingerprintError::InvalidConfig {
                var: ENV_FINGERPRINT_KEY,
                reason: "expected non-empty hex",
            })?;
            config = config.with_key(key);
        }

        if let Some(raw) = read_var(ENV_TIME_BUCKET_SECS)? {
            let width = raw
                .trim()
                .parse::<NonZeroU64>()
                .map_err(|_| FingerprintError::InvalidConfig {
                    var: ENV_TIME_BUCKET_SECS,
                    reason: "expected a positive integer",
                })?;
            for key in TIME_KEYS {
                config = config.quantize(key, width);
            }
        }

        Ok(config)
    }

    pub fn with_key(mut self, key: FingerprintKey) -> Self {
        self.key = key;
        self
    }

    /// Drops `key` before hashing. Overrides any quantization rule.
    pub fn exclude(mut self, key: &str) -> Self {
        let key = rule_key(key);
        self.quantized.remove(&key);
        self.excluded.insert(key);
        self
    }

    /// Buckets numeric values of `key` by `width`. Overrides any exclusion.
    pub fn quantize(mut self, key: &str, width: NonZeroU64) -> Self {
        let key = rule_key(key);
        self.excluded.remove(&key);
        self.quantized.insert(key, width);
        self
    }

    pub fn key(&self) -> &FingerprintKey {
        &self.key
    }

    /// Class of a normalized field key.
    pub fn classify(&self, key: &str) -> FieldClass {
        if self.excluded.contains(key) {
            FieldClass::Excluded
        } else if let Some(width) = self.quantized.get(key) {
            FieldClass::Quantized { width: *width }
        } else {
            FieldClass::Stable
        }
    }
}

// Rule keys are matched against normalized field keys
fn rule_key(key: &str) -> String {
    normalize_text(key)
}

fn read_var(var: &'static str) -> Result<Option<String>, FingerprintError> {
    match env::var(var) {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => Err(FingerprintError::InvalidConfig {
            var,
            reason: "not valid unicode",
        }),
    }
}
