/*!
Key encapsulation handle.
*/

use std::fmt;
use std::sync::Arc;

use zeroize::Zeroizing;

use crate::core::crypto::handles::{accept_secret_key, check_length, require_secret_key};
use crate::core::crypto::registry::{KemRegistry, kems};
use crate::core::crypto::traits::{KemContext, KemLibrary};
use crate::core::crypto::types::KemDetails;
use crate::core::error::{Error, Result};
use crate::core::memory::SecretBytes;

/// A key encapsulation mechanism bound to one algorithm
pub struct KeyEncapsulation {
    name: String,
    library: Arc<dyn KemLibrary>,
    ctx: Box<dyn KemContext>,
    secret_key: SecretBytes,
    details: KemDetails,
}

impl KeyEncapsulation {
    /// Open `name` through the process-wide KEM registry
    pub fn new(name: &str) -> Result<Self> {
        Self::from_registry(kems(), name, None)
    }

    /// Open `name` and adopt an existing secret key
    pub fn with_secret_key(name: &str, secret_key: Vec<u8>) -> Result<Self> {
        Self::from_registry(kems(), name, Some(secret_key))
    }

    /// Open `name` through `registry`.
    ///
    /// Fails with `NotSupported` or `NotEnabled` when the name does not pass
    /// registry validation, and with `InvalidArgument` when a non-empty
    /// secret key does not match the algorithm's secret key length.
    pub fn from_registry(registry: &KemRegistry, name: &str, secret_key: Option<Vec<u8>>) -> Result<Self> {
        // Owned as secret material before anything can fail
        let secret_key = secret_key.map(SecretBytes::from_vec);
        let ctx = registry.open(name)?;
        let details = ctx.details();
        let secret_key = accept_secret_key(name, secret_key, details.length_secret_key, |b| {
            ctx.secure_erase(b)
        })?;

        log::debug!("Opened KEM handle for {} ({})", name, details.version);

        Ok(Self {
            name: name.to_string(),
            library: Arc::clone(registry.library()),
            ctx,
            secret_key,
            details,
        })
    }

    /// Algorithm name this handle was opened with
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Snapshot of the algorithm metadata
    pub fn details(&self) -> KemDetails {
        self.details.clone()
    }

    /// Whether the handle currently holds a secret key
    pub fn has_secret_key(&self) -> bool {
        !self.secret_key.is_empty()
    }

    /// Generate a fresh keypair, keep the secret key and return the public key.
    ///
    /// Any previous secret key is scrubbed once the new one is in hand. When
    /// the native call fails, the partially written buffer is scrubbed and
    /// the previous secret key is kept.
    pub fn generate_keypair(&mut self) -> Result<Vec<u8>> {
        let mut public_key = vec![0u8; self.details.length_public_key];
        let mut secret_key = SecretBytes::zeroed(self.details.length_secret_key);
        let ctx = &self.ctx;

        if ctx.keypair(&mut public_key, secret_key.as_mut_slice()).is_err() {
            secret_key.scrub_with(|b| ctx.secure_erase(b));
            log::warn!("Native keypair generation failed for {}", self.name);
            return Err(Error::KeypairGeneration);
        }

        self.secret_key.replace_with(secret_key, |b| ctx.secure_erase(b));
        Ok(public_key)
    }

    /// Copy of the current secret key, empty when none is held.
    ///
    /// The copy zeroizes itself when dropped.
    pub fn export_secret_key(&self) -> Zeroizing<Vec<u8>> {
        self.secret_key.to_zeroizing()
    }

    /// Encapsulate a fresh shared secret against `public_key`.
    ///
    /// Returns `(ciphertext, shared_secret)`.
    pub fn encapsulate(&self, public_key: &[u8]) -> Result<(Vec<u8>, Zeroizing<Vec<u8>>)> {
        check_length("public key", public_key, self.details.length_public_key)?;

        let mut ciphertext = vec![0u8; self.details.length_ciphertext];
        let mut shared_secret = Zeroizing::new(vec![0u8; self.details.length_shared_secret]);

        self.ctx
            .encapsulate(&mut ciphertext, &mut shared_secret, public_key)
            .map_err(|_| {
                log::warn!("Native encapsulation failed for {}", self.name);
                Error::Encapsulation
            })?;

        Ok((ciphertext, shared_secret))
    }

    /// Recover the shared secret from `ciphertext` with the held secret key.
    ///
    /// A successful return is no proof the ciphertext was intact: implicit
    /// rejection KEMs answer a corrupted ciphertext with an unrelated secret.
    pub fn decapsulate(&self, ciphertext: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
        check_length("ciphertext", ciphertext, self.details.length_ciphertext)?;
        let secret_key = require_secret_key(&self.name, &self.secret_key, self.details.length_secret_key)?;

        let mut shared_secret = Zeroizing::new(vec![0u8; self.details.length_shared_secret]);
        self.ctx
            .decapsulate(&mut shared_secret, ciphertext, secret_key)
            .map_err(|_| {
                log::warn!("Native decapsulation failed for {}", self.name);
                Error::Decapsulation
            })?;

        Ok(shared_secret)
    }

    /// Deep copy: a new native context is opened for the same algorithm and
    /// the secret key is copied. No native state is shared with `self`.
    pub fn try_clone(&self) -> Result<Self> {
        let ctx = self
            .library
            .new_context(&self.name)
            .ok_or_else(|| Error::NotEnabled(self.name.clone()))?;

        Ok(Self {
            name: self.name.clone(),
            library: Arc::clone(&self.library),
            ctx,
            secret_key: self.secret_key.clone(),
            details: self.details.clone(),
        })
    }
}

impl Drop for KeyEncapsulation {
    fn drop(&mut self) {
        let ctx = &self.ctx;
        self.secret_key.scrub_with(|b| ctx.secure_erase(b));
    }
}

impl fmt::Display for KeyEncapsulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Key encapsulation mechanism: {}", self.details.name)
    }
}

impl fmt::Debug for KeyEncapsulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyEncapsulation")
            .field("name", &self.name)
            .field("secret_key", &self.secret_key)
            .finish_non_exhaustive()
    }
}
