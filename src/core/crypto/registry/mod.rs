/*!
Registry of supported and enabled algorithms.

One registry exists per mechanism family. It discovers the algorithm names
known to a native library ("supported") and the subset that can actually be
instantiated ("enabled"), computing each list exactly once.
*/

pub mod manager;

// Re-export registry manager types and functions
pub use manager::{
    AlgorithmRegistry,
    Family,
    KemFamily,
    KemRegistry,
    SigFamily,
    SigRegistry,
    kems,
    sigs,
    kem_library_version,
    sig_library_version,
    supported_kems,
    enabled_kems,
    is_kem_supported,
    is_kem_enabled,
    kem_name,
    max_number_kems,
    supported_sigs,
    enabled_sigs,
    is_sig_supported,
    is_sig_enabled,
    sig_name,
    max_number_sigs,
};
