// Copyright (c) 2026 The mktsec Authors
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;

use crate::classify::ClassifiedField;

const MOBILE_MARKERS: [&str; 3] = ["mobile", "android", "ios"];
const IOT_MARKERS: [&str; 2] = ["iot", "embedded"];
const SERVER_MARKERS: [&str; 2] = ["server", "datacenter"];

/// Broad class of the environment a fingerprint was taken in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnvironmentClass {
    Desktop,
    Mobile,
    Iot,
    Server,
}

impl EnvironmentClass {
    /// Detects the class from environment text.
    ///
    /// Markers are matched as whole alphanumeric tokens, case-insensitively,
    /// in the order mobile, IoT, server. Anything else is a desktop.
    ///
    /// ```
    /// use mktsec_fingerprint::EnvironmentClass;
    ///
    /// assert_eq!(EnvironmentClass::detect("platform=Android;region=KSA"), EnvironmentClass::Mobile);
    /// assert_eq!(EnvironmentClass::detect("embedded sensor"), EnvironmentClass::Iot);
    /// assert_eq!(EnvironmentClass::detect("region=KSA"), EnvironmentClass::Desktop);
    /// ```
    pub fn detect(env: &str) -> Self {
        let lowered = env.to_lowercase();
        Self::from_markers(|markers| has_token(&lowered, markers))
    }

    /// Detects the class from the fields left after exclusion and
    /// quantization, so dropped fields never select a class.
    pub(crate) fn detect_fields(fields: &[ClassifiedField]) -> Self {
        Self::from_markers(|markers| {
            fields
                .iter()
                .any(|field| has_token(&field.key, markers) || has_token(&field.value, markers))
        })
    }

    fn from_markers(has_marker: impl Fn(&[&str]) -> bool) -> Self {
        if has_marker(MOBILE_MARKERS.as_slice()) {
            Self::Mobile
        } else if has_marker(IOT_MARKERS.as_slice()) {
            Self::Iot
        } else if has_marker(SERVER_MARKERS.as_slice()) {
            Self::Server
        } else {
            Self::Desktop
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Desktop => "desktop",
            Self::Mobile => "mobile",
            Self::Iot => "iot",
            Self::Server => "server",
        }
    }

    /// Class byte in the canonical message.
    pub(crate) const fn tag(self) -> u8 {
        match self {
            Self::Desktop => 0x01,
            Self::Mobile => 0x02,
            Self::Iot => 0x03,
            Self::Server => 0x04,
        }
    }
}

fn has_token(text: &str, markers: &[&str]) -> bool {
    text.split(|c: char| !c.is_alphanumeric())
        .any(|token| markers.contains(&token))
}

impl fmt::Display for EnvironmentClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
