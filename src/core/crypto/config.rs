/*!
Run-time mechanism configuration.

A `MechanismConfig` names the KEM, the signature scheme and the random source
an application wants. Names are checked against registries in `validate`,
which reports the same `NotSupported`/`NotEnabled` distinction as handle
construction.
*/

#[cfg(feature = "serde-support")]
use serde::{Deserialize, Serialize};

use crate::core::constants::{defaults, names};
use crate::core::crypto::handles::{KeyEncapsulation, Signature};
use crate::core::crypto::registry::{KemRegistry, SigRegistry};
use crate::core::error::Result;
use crate::core::random::{self, RandomAlgorithm};

/// Algorithm selection for an application
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
pub struct MechanismConfig {
    /// KEM algorithm name
    pub kem: String,
    /// Signature algorithm name
    pub signature: String,
    /// Random source installed by `apply_random`
    pub random: RandomAlgorithm,
}

impl Default for MechanismConfig {
    fn default() -> Self {
        Self {
            kem: defaults::KEM.to_string(),
            signature: defaults::SIGNATURE.to_string(),
            random: RandomAlgorithm::System,
        }
    }
}

impl MechanismConfig {
    /// Create a new configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new configuration with specific settings
    pub fn with_algorithms(kem: &str, signature: &str, random: RandomAlgorithm) -> Self {
        Self {
            kem: kem.to_string(),
            signature: signature.to_string(),
            random,
        }
    }

    /// NIST level 1/2 parameter sets, for resource-constrained environments
    pub fn lightweight() -> Self {
        Self::with_algorithms(names::KYBER_512, names::DILITHIUM_2, RandomAlgorithm::System)
    }

    /// NIST level 5 parameter sets
    pub fn high_security() -> Self {
        Self::with_algorithms(names::KYBER_1024, names::DILITHIUM_5, RandomAlgorithm::System)
    }

    /// Check both names against the given registries
    pub fn validate(&self, kems: &KemRegistry, sigs: &SigRegistry) -> Result<()> {
        kems.validate(&self.kem)?;
        sigs.validate(&self.signature)
    }

    /// Install the configured random source process-wide
    pub fn apply_random(&self) {
        random::switch_algorithm(self.random);
    }

    /// Open a KEM handle for the configured algorithm
    pub fn open_kem(&self, kems: &KemRegistry) -> Result<KeyEncapsulation> {
        KeyEncapsulation::from_registry(kems, &self.kem, None)
    }

    /// Open a signature handle for the configured algorithm
    pub fn open_signature(&self, sigs: &SigRegistry) -> Result<Signature> {
        Signature::from_registry(sigs, &self.signature, None)
    }
}
