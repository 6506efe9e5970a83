/*!
Algorithm metadata snapshots.

A native context exposes fixed metadata (name, version, claimed security
level, security property and every buffer length). Handles copy it out once
at construction; the snapshot is immutable afterwards and handed out by
value.
*/

use std::fmt;

#[cfg(feature = "serde-support")]
use serde::{Deserialize, Serialize};

/// KEM algorithm details
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
pub struct KemDetails {
    /// Canonical algorithm name
    pub name: String,
    /// Implementation version
    pub version: String,
    /// Claimed NIST security level (1-5)
    pub claimed_nist_level: u8,
    /// Whether the scheme claims IND-CCA security
    pub is_ind_cca: bool,
    pub length_public_key: usize,
    pub length_secret_key: usize,
    pub length_ciphertext: usize,
    pub length_shared_secret: usize,
}

/// Signature algorithm details
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
pub struct SignatureDetails {
    /// Canonical algorithm name
    pub name: String,
    /// Implementation version
    pub version: String,
    /// Claimed NIST security level (1-5)
    pub claimed_nist_level: u8,
    /// Whether the scheme claims EUF-CMA security
    pub is_euf_cma: bool,
    /// Whether non-empty context strings are accepted
    pub sig_with_ctx_support: bool,
    pub length_public_key: usize,
    pub length_secret_key: usize,
    /// Upper bound on the signature length; some schemes produce shorter
    /// signatures.
    pub max_length_signature: usize,
}

impl fmt::Display for KemDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Version: {}", self.version)?;
        writeln!(f, "Claimed NIST level: {}", self.claimed_nist_level)?;
        writeln!(f, "Is IND_CCA: {}", self.is_ind_cca)?;
        writeln!(f, "Length public key (bytes): {}", self.length_public_key)?;
        writeln!(f, "Length secret key (bytes): {}", self.length_secret_key)?;
        writeln!(f, "Length ciphertext (bytes): {}", self.length_ciphertext)?;
        write!(f, "Length shared secret (bytes): {}", self.length_shared_secret)
    }
}

impl fmt::Display for SignatureDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Version: {}", self.version)?;
        writeln!(f, "Claimed NIST level: {}", self.claimed_nist_level)?;
        writeln!(f, "Is EUF_CMA: {}", self.is_euf_cma)?;
        writeln!(f, "Supports context string: {}", self.sig_with_ctx_support)?;
        writeln!(f, "Length public key (bytes): {}", self.length_public_key)?;
        writeln!(f, "Length secret key (bytes): {}", self.length_secret_key)?;
        write!(f, "Maximum length signature (bytes): {}", self.max_length_signature)
    }
}
