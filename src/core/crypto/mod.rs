/*!
Mechanism components.

This module provides the native library boundary, the bundled PQClean
library, the supported/enabled registries, and the KEM and signature
handles built on top of them.
*/

// Native library boundary
pub mod traits;

// Algorithm metadata
pub mod types;

// Bundled native library
pub mod algorithms;

// Registry for algorithm discovery
pub mod registry;

// KEM and signature handles
pub mod handles;

// Config
pub mod config;

// Re-export frequently used types
pub use config::MechanismConfig;
pub use handles::{KeyEncapsulation, Signature};
pub use registry::{
    AlgorithmRegistry, KemRegistry, SigRegistry, kems, sigs, kem_library_version, sig_library_version,
    supported_kems, enabled_kems, is_kem_supported, is_kem_enabled, kem_name, max_number_kems,
    supported_sigs, enabled_sigs, is_sig_supported, is_sig_enabled, sig_name, max_number_sigs,
};
pub use types::{KemDetails, SignatureDetails};
