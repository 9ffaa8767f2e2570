// Copyright (c) 2026 The mktsec Authors
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;

use thiserror::Error;

/// One of the three fingerprint inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputField {
    /// Operating system identifier
    Os,
    /// Device information
    Device,
    /// Environment data
    Env,
}

impl InputField {
    /// Stable lowercase name, used in errors and logs.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Os => "os",
            Self::Device => "device",
            Self::Env => "env",
        }
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FingerprintError {
    #[error("fingerprint input `{field}` is not valid UTF-8")]
    InvalidEncoding { field: InputField },

    #[error("fingerprint key must be non-empty hex")]
    InvalidKey,

    #[error("invalid configuration in {var}: {reason}")]
    InvalidConfig {
        var: &'static str,
        reason: &'static str,
    },
}
