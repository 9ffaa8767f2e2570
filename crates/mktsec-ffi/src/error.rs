// Copyright (c) 2026 The mktsec Authors
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use mktsec_fingerprint::{FingerprintError, InputField};
use mktsec_hmac::HmacError;
use thiserror::Error;

use crate::status::{
    MKT_ERR_BUFFER_TOO_SMALL, MKT_ERR_CONFIG, MKT_ERR_INVALID_ENCODING, MKT_ERR_NULL_POINTER,
};

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryError {
    #[error("`{arg}` is NULL")]
    NullPointer { arg: &'static str },

    #[error("output buffer too small: need {required} bytes, got {actual}")]
    BufferTooSmall { required: usize, actual: usize },

    #[error("`{field}` is not valid UTF-8")]
    InvalidEncoding { field: InputField },

    #[error(transparent)]
    Config(FingerprintError),
}

impl BoundaryError {
    /// Status code reported to C callers.
    pub const fn status(self) -> i32 {
        match self {
            Self::NullPointer { .. } => MKT_ERR_NULL_POINTER,
            Self::BufferTooSmall { .. } => MKT_ERR_BUFFER_TOO_SMALL,
            Self::InvalidEncoding { .. } => MKT_ERR_INVALID_ENCODING,
            Self::Config(_) => MKT_ERR_CONFIG,
        }
    }
}

impl From<HmacError> for BoundaryError {
    fn from(err: HmacError) -> Self {
        match err {
            HmacError::BufferTooSmall { required, actual } => {
                Self::BufferTooSmall { required, actual }
            }
        }
    }
}

impl From<FingerprintError> for BoundaryError {
    fn from(err: FingerprintError) -> Self {
        match err {
            FingerprintError::InvalidEncoding { field } => Self::InvalidEncoding { field },
            other => Self::Config(other),
        }
    }
}
