/*!
Constants for the mechanism handles.

This module contains the crate version, the algorithm identifiers of the
bundled native library, and the sizes fixed by the NIST-KAT random source.
*/

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Entropy input length for the NIST-KAT DRBG
pub const NIST_KAT_SEED_BYTES: usize = 48;

/// Algorithm identifiers, as enumerated by the bundled native library
pub mod names {
    /// CRYSTALS-Kyber, round 3
    pub const KYBER_512: &str = "Kyber512";
    pub const KYBER_768: &str = "Kyber768";
    pub const KYBER_1024: &str = "Kyber1024";

    /// FIPS 203
    pub const ML_KEM_512: &str = "ML-KEM-512";
    pub const ML_KEM_768: &str = "ML-KEM-768";
    pub const ML_KEM_1024: &str = "ML-KEM-1024";

    /// CRYSTALS-Dilithium, round 3
    pub const DILITHIUM_2: &str = "Dilithium2";
    pub const DILITHIUM_3: &str = "Dilithium3";
    pub const DILITHIUM_5: &str = "Dilithium5";

    /// FIPS 204
    pub const ML_DSA_44: &str = "ML-DSA-44";
    pub const ML_DSA_65: &str = "ML-DSA-65";
    pub const ML_DSA_87: &str = "ML-DSA-87";

    /// KEM table, in enumeration order
    pub const KEMS: [&str; 6] = [KYBER_512, KYBER_768, KYBER_1024, ML_KEM_512, ML_KEM_768, ML_KEM_1024];

    /// Signature table, in enumeration order
    pub const SIGS: [&str; 6] = [DILITHIUM_2, DILITHIUM_3, DILITHIUM_5, ML_DSA_44, ML_DSA_65, ML_DSA_87];
}

/// Versions of the bundled native implementations
pub mod native {
    pub const KEM_LIBRARY: &str = "PQClean (pqcrypto-kyber 0.8, pqcrypto-mlkem 0.1)";
    pub const SIG_LIBRARY: &str = "PQClean (pqcrypto-dilithium 0.5, pqcrypto-mldsa 0.1)";
}

/// Defaults used by `MechanismConfig`
pub mod defaults {
    use super::names;

    pub const KEM: &str = names::KYBER_768;
    pub const SIGNATURE: &str = names::DILITHIUM_3;
}
