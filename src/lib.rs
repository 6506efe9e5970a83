/*!
# PQC Mechanisms

Post-quantum key encapsulation and signature handles over a native
cryptographic library.

## Overview

- Registries that discover which algorithms the native library knows
  (*supported*) and which of those it can instantiate in this build
  (*enabled*), computed once per process
- `KeyEncapsulation` and `Signature` handles that own one native context each
- Secret keys scrubbed on every path that discards them
- A switchable random-byte source with a NIST-KAT deterministic mode
- CRYSTALS-Kyber, ML-KEM, CRYSTALS-Dilithium and ML-DSA from PQClean, gated by
  cargo features

```no_run
use pqc_mechanisms::KeyEncapsulation;

let mut client = KeyEncapsulation::new("Kyber768")?;
let server = KeyEncapsulation::new("Kyber768")?;

let public_key = client.generate_keypair()?;
let (ciphertext, shared_secret_server) = server.encapsulate(&public_key)?;
let shared_secret_client = client.decapsulate(&ciphertext)?;
assert_eq!(shared_secret_client, shared_secret_server);
# Ok::<(), pqc_mechanisms::Error>(())
```
*/

// Core components
pub mod core;

// Re-export commonly used types for convenience
pub use self::core::error::{Error, Result};
pub use self::core::constants::{VERSION, names};
pub use self::core::crypto::{
    KeyEncapsulation, Signature, MechanismConfig, KemDetails, SignatureDetails,
    AlgorithmRegistry, KemRegistry, SigRegistry, kems, sigs, kem_library_version, sig_library_version,
    supported_kems, enabled_kems, is_kem_supported, is_kem_enabled, kem_name, max_number_kems,
    supported_sigs, enabled_sigs, is_sig_supported, is_sig_enabled, sig_name, max_number_sigs,
};
pub use self::core::memory::SecretBytes;
pub use self::core::random::RandomAlgorithm;
pub use self::core::util::{HexChop, hex_chop};

// Re-export the native library boundary for custom libraries
pub mod native {
    pub use crate::core::crypto::traits::{
        AlgorithmTable, KemContext, KemLibrary, NativeFailure, NativeResult, SigContext, SigLibrary,
    };
    pub use crate::core::crypto::algorithms::{PqcleanKems, PqcleanSigs};
}

// Re-export the random-byte source
pub mod random {
    pub use crate::core::random::{
        RandomAlgorithm, active_algorithm, custom_algorithm, nist_kat_init_256bit, randombytes,
        randombytes_into, switch_algorithm, switch_algorithm_by_name,
    };
}

/// Version of this crate
pub fn library_version() -> &'static str {
    VERSION
}

/// Versions of the bundled native KEM and signature libraries
pub fn native_versions() -> (&'static str, &'static str) {
    (kem_library_version(), sig_library_version())
}
