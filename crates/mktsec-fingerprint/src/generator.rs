// Copyright (c) 2026 The mktsec Authors
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;

use mktsec_hmac::{HASH_LEN, HmacSha512};
use subtle::ConstantTimeEq;
use tracing::{debug, trace};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::canonical::{self, Section};
use crate::classify::{Partition, partition};
use crate::config::FingerprintConfig;
use crate::environment::EnvironmentClass;
use crate::error::{FingerprintError, InputField};
use crate::normalize::normalize_input;

/// Length of a hex-encoded fingerprint.
pub const FINGERPRINT_HEX_LEN: usize = HASH_LEN * 2;

/// Keyed device/environment fingerprint.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Fingerprint {
    digest: [u8; HASH_LEN],
    #[zeroize(skip)]
    environment: EnvironmentClass,
}

impl Fingerprint {
    pub fn as_bytes(&self) -> &[u8; HASH_LEN] {
        &self.digest
    }

    pub fn environment(&self) -> EnvironmentClass {
        self.environment
    }

    /// Lowercase hex, [`FINGERPRINT_HEX_LEN`] characters.
    pub fn to_hex(&self) -> String {
        hex::encode(self.digest)
    }

    /// Constant-time comparison of the digests.
    pub fn matches(&self, other: &Fingerprint) -> bool {
        self.digest[..].ct_eq(&other.digest[..]).into()
    }
}

impl PartialEq for Fingerprint {
    fn eq(&self, other: &Self) -> bool {
        self.matches(other)
    }
}

impl Eq for Fingerprint {}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fingerprint")
            .field("digest", &self.to_hex())
            .field("environment", &self.environment)
            .finish()
    }
}

/// Derives fingerprints from (os, device, env) text under one configuration.
///
/// Ephemeral fields are dropped and volatile ones are bucketed, so small
/// legitimate drift keeps the same fingerprint:
///
/// ```
/// use mktsec_fingerprint::FingerprintGenerator;
///
/// let generator = FingerprintGenerator::default();
///
/// let a = generator.generate("linux", "device=phoneA;session=1001", "region=KSA");
/// let b = generator.generate("linux", "device=phoneA;session=1002", "region=KSA");
/// let c = generator.generate("linux", "device=phoneB;session=1001", "region=KSA");
///
/// assert_eq!(a, b);
/// assert_ne!(a, c);
/// assert_eq!(a.to_hex().len(), 128);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FingerprintGenerator {
    config: FingerprintConfig,
}

impl FingerprintGenerator {
    pub fn new(config: FingerprintConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FingerprintConfig {
        &self.config
    }

    /// Fingerprint of three text inputs. Empty inputs are valid.
    pub fn generate(&self, os: &str, device: &str, env: &str) -> Fingerprint {
        let os = self.prepare(InputField::Os, os);
        let device = self.prepare(InputField::Device, device);
        let env = self.prepare(InputField::Env, env);
        let environment = EnvironmentClass::detect_fields(&env.fields);

        let mut mac = HmacSha512::new(self.config.key().as_bytes());
        canonical::encode(
            &mut mac,
            &[
                (Section::Os, os.fields.as_slice()),
                (Section::Device, device.fields.as_slice()),
                (Section::Env, env.fields.as_slice()),
            ],
            environment,
        );

        let mut digest = [0u8; HASH_LEN];
        mac.finalize(&mut digest);

        debug!(
            environment = %environment,
            fields = os.fields.len() + device.fields.len() + env.fields.len(),
            "fingerprint generated"
        );

        Fingerprint {
            digest,
            environment,
        }
    }

    /// Like [`generate`](Self::generate), for raw bytes.
    ///
    /// # Errors
    ///
    /// [`FingerprintError::InvalidEncoding`] naming the first input that is not
    /// valid UTF-8.
    pub fn generate_from_bytes(
        &self,
        os: &[u8],
        device: &[u8],
        env: &[u8],
    ) -> Result<Fingerprint, FingerprintError> {
        let os = decode(InputField::Os, os)?;
        let device = decode(InputField::Device, device)?;
        let env = decode(InputField::Env, env)?;

        Ok(self.generate(os, device, env))
    }

    fn prepare(&self, field: InputField, input: &str) -> Partition {
        let parsed = partition(normalize_input(input), &self.config);
        trace!(
            input = %field,
            kept = parsed.fields.len(),
            quantized = parsed.quantized,
            excluded = parsed.excluded,
            "input partitioned"
        );
        parsed
    }
}

fn decode(field: InputField, bytes: &[u8]) -> Result<&str, FingerprintError> {
    core::str::from_utf8(bytes).map_err(|_| FingerprintError::InvalidEncoding { field })
}
