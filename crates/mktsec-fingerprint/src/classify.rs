// Copyright (c) 2026 The mktsec Authors
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Stable/volatile partition and quantization.

use std::num::NonZeroU64;

use crate::config::FingerprintConfig;
use crate::normalize::Field;

/// Bucket for a quantized field whose value is not numeric.
pub const UNKNOWN_BUCKET: &str = "~";

/// How a field contributes to the fingerprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldClass {
    /// Hashed as-is.
    Stable,
    /// Numeric value replaced by `floor(value / width)` before hashing.
    Quantized { width: NonZeroU64 },
    /// Dropped before hashing.
    Excluded,
}

impl FieldClass {
    /// Class byte in the canonical message.
    pub(crate) const fn tag(self) -> u8 {
        match self {
            Self::Excluded => 0x00,
            Self::Stable => 0x01,
            Self::Quantized { .. } => 0x02,
        }
    }
}

/// A field ready for encoding: excluded fields never reach this stage.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct ClassifiedField {
    pub key: String,
    pub value: String,
    pub tag: u8,
}

/// Outcome of partitioning one input.
#[derive(Debug, Default)]
pub(crate) struct Partition {
    pub fields: Vec<ClassifiedField>,
    pub quantized: usize,
    pub excluded: usize,
}

pub(crate) fn partition(fields: Vec<Field>, config: &FingerprintConfig) -> Partition {
    let mut out = Partition::default();

    for field in fields {
        let class = config.classify(&field.key);
        let value = match class {
            FieldClass::Excluded => {
                out.excluded += 1;
                continue;
            }
            FieldClass::Quantized { width } => {
                out.quantized += 1;
                quantize(&field.value, width)
            }
            FieldClass::Stable => field.value,
        };

        out.fields.push(ClassifiedField {
            key: field.key,
            value,
            tag: class.tag(),
        });
    }

    // Buckets may reorder values that were sorted by their raw text
    out.fields.sort_unstable();
    out
}

/// Maps a numeric value to its bucket index; anything else maps to
/// [`UNKNOWN_BUCKET`].
///
/// ```
/// use std::num::NonZeroU64;
/// use mktsec_fingerprint::quantize;
///
/// let day = NonZeroU64::new(86_400).expect("non-zero");
/// assert_eq!(quantize("1700000000", day), "19675");
/// assert_eq!(quantize("1700003600", day), "19675");
/// assert_eq!(quantize("yesterday", day), "~");
/// ```
pub fn quantize(value: &str, width: NonZeroU64) -> String {
    if let Ok(v) = value.parse::<u64>() {
        return (v / width.get()).to_string();
    }

    if let Ok(v) = value.parse::<i64>() {
        return i128::from(v).div_euclid(i128::from(width.get())).to_string();
    }

    match value.parse::<f64>() {
        Ok(v) if v.is_finite() => {
            // Saturating cast; out-of-range magnitudes collapse to the extremes
            let bucket = (v / width.get() as f64).floor() as i128;
            bucket.to_string()
        }
        _ => UNKNOWN_BUCKET.to_owned(),
    }
}
