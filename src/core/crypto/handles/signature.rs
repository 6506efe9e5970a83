/*!
Signature handle.

Verification reports a cryptographic rejection as `Ok(false)`. Errors are
reserved for inputs whose length cannot be right for the bound algorithm.
*/

use std::fmt;
use std::sync::Arc;

use zeroize::Zeroizing;

use crate::core::crypto::handles::{accept_secret_key, check_length, require_secret_key};
use crate::core::crypto::registry::{SigRegistry, sigs};
use crate::core::crypto::traits::{NativeResult, SigContext, SigLibrary};
use crate::core::crypto::types::SignatureDetails;
use crate::core::error::{Error, Result};
use crate::core::memory::SecretBytes;

/// A signature mechanism bound to one algorithm
pub struct Signature {
    name: String,
    library: Arc<dyn SigLibrary>,
    ctx: Box<dyn SigContext>,
    secret_key: SecretBytes,
    details: SignatureDetails,
}

impl Signature {
    /// Open `name` through the process-wide signature registry
    pub fn new(name: &str) -> Result<Self> {
        Self::from_registry(sigs(), name, None)
    }

    /// Open `name` and adopt an existing secret key
    pub fn with_secret_key(name: &str, secret_key: Vec<u8>) -> Result<Self> {
        Self::from_registry(sigs(), name, Some(secret_key))
    }

    /// Open `name` through `registry`, see `KeyEncapsulation::from_registry`
    pub fn from_registry(registry: &SigRegistry, name: &str, secret_key: Option<Vec<u8>>) -> Result<Self> {
        // Owned as secret material before anything can fail
        let secret_key = secret_key.map(SecretBytes::from_vec);
        let ctx = registry.open(name)?;
        let details = ctx.details();
        let secret_key = accept_secret_key(name, secret_key, details.length_secret_key, |b| {
            ctx.secure_erase(b)
        })?;

        log::debug!("Opened signature handle for {} ({})", name, details.version);

        Ok(Self {
            name: name.to_string(),
            library: Arc::clone(registry.library()),
            ctx,
            secret_key,
            details,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Snapshot of the algorithm metadata
    pub fn details(&self) -> SignatureDetails {
        self.details.clone()
    }

    pub fn has_secret_key(&self) -> bool {
        !self.secret_key.is_empty()
    }

    /// Generate a fresh keypair, keep the secret key and return the public key
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

    /// Copy of the current secret key, empty when none is held
    pub fn export_secret_key(&self) -> Zeroizing<Vec<u8>> {
        self.secret_key.to_zeroizing()
    }

    /// Sign `message` with the held secret key.
    ///
    /// The returned signature is trimmed to the length the native library
    /// reports, which may be shorter than `max_length_signature`.
    pub fn sign(&self, message: &[u8]) -> Result<Vec<u8>> {
        self.sign_with(message, |ctx, signature, secret_key| ctx.sign(signature, message, secret_key))
    }

    /// Sign `message` under a context string. An empty context is the same
    /// as `sign`; a non-empty one needs `details().sig_with_ctx_support`.
    pub fn sign_with_ctx_str(&self, message: &[u8], context: &[u8]) -> Result<Vec<u8>> {
        if context.is_empty() {
            return self.sign(message);
        }
        self.sign_with(message, |ctx, signature, secret_key| {
            ctx.sign_with_ctx(signature, message, context, secret_key)
        })
    }

    /// Check `signature` over `message` against `public_key`.
    ///
    /// `Ok(false)` means the native library rejected the signature.
    pub fn verify(&self, message: &[u8], signature: &[u8], public_key: &[u8]) -> Result<bool> {
        self.check_verify_inputs(signature, public_key)?;
        Ok(self.ctx.verify(message, signature, public_key).is_ok())
    }

    /// Verify under a context string. A scheme without context support
    /// rejects every non-empty context, so the answer is `Ok(false)`.
    pub fn verify_with_ctx_str(
        &self,
        message: &[u8],
        signature: &[u8],
        context: &[u8],
        public_key: &[u8],
    ) -> Result<bool> {
        if context.is_empty() {
            return self.verify(message, signature, public_key);
        }
        self.check_verify_inputs(signature, public_key)?;
        Ok(self
            .ctx
            .verify_with_ctx(message, signature, context, public_key)
            .is_ok())
    }

    /// Deep copy with a freshly opened native context
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

    fn sign_with<F>(&self, message: &[u8], sign: F) -> Result<Vec<u8>>
    where
        F: FnOnce(&dyn SigContext, &mut [u8], &[u8]) -> NativeResult<usize>,
    {
        let secret_key = require_secret_key(&self.name, &self.secret_key, self.details.length_secret_key)?;
        let max_len = self.details.max_length_signature;
        let mut signature = vec![0u8; max_len];

        let written = match sign(self.ctx.as_ref(), &mut signature, secret_key) {
            Ok(written) if written <= max_len => written,
            _ => {
                log::warn!(
                    "Native signing failed for {} ({}-byte message)",
                    self.name,
                    message.len()
                );
                return Err(Error::Signing);
            }
        };

        signature.truncate(written);
        Ok(signature)
    }

    fn check_verify_inputs(&self, signature: &[u8], public_key: &[u8]) -> Result<()> {
        check_length("public key", public_key, self.details.length_public_key)?;
        if signature.len() > self.details.max_length_signature {
            return crate::invalid_argument_err!(
                "signature must be at most {} bytes, got {}",
                self.details.max_length_signature,
                signature.len()
            );
        }
        Ok(())
    }
}

impl Drop for Signature {
    fn drop(&mut self) {
        let ctx = &self.ctx;
        self.secret_key.scrub_with(|b| ctx.secure_erase(b));
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signature mechanism: {}", self.details.name)
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signature")
            .field("name", &self.name)
            .field("secret_key", &self.secret_key)
            .finish_non_exhaustive()
    }
}
