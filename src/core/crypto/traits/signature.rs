/*!
Traits for signature mechanisms.
*/

use zeroize::Zeroize;

use crate::core::crypto::traits::native::{AlgorithmTable, NativeFailure, NativeResult};
use crate::core::crypto::types::SignatureDetails;

/// A native library providing signature contexts
pub trait SigLibrary: AlgorithmTable {
    /// Allocate a context for `name`; `None` when the algorithm cannot be
    /// instantiated in this build or on this platform
    fn new_context(&self, name: &str) -> Option<Box<dyn SigContext>>;
}

/// An opened native signature context
pub trait SigContext: Send {
    /// Fixed metadata of the algorithm this context was opened for
    fn details(&self) -> SignatureDetails;

    /// Generate a keypair into `public_key` and `secret_key`
    fn keypair(&self, public_key: &mut [u8], secret_key: &mut [u8]) -> NativeResult;

    /// Sign `message` into `signature`, returning the number of bytes written
    fn sign(&self, signature: &mut [u8], message: &[u8], secret_key: &[u8]) -> NativeResult<usize>;

    /// Check `signature` over `message` against `public_key`
    fn verify(&self, message: &[u8], signature: &[u8], public_key: &[u8]) -> NativeResult;

    /// Sign with a context string. Only the empty context is accepted unless
    /// the scheme supports context strings.
    fn sign_with_ctx(
        &self,
        signature: &mut [u8],
        message: &[u8],
        context: &[u8],
        secret_key: &[u8],
    ) -> NativeResult<usize> {
        if context.is_empty() {
            self.sign(signature, message, secret_key)
        } else {
            Err(NativeFailure)
        }
    }

    /// Verify with a context string, see `sign_with_ctx`
    fn verify_with_ctx(
        &self,
        message: &[u8],
        signature: &[u8],
        context: &[u8],
        public_key: &[u8],
    ) -> NativeResult {
        if context.is_empty() {
            self.verify(message, signature, public_key)
        } else {
            Err(NativeFailure)
        }
    }

    /// Overwrite `buffer` with zeros in a way the optimizer cannot elide
    fn secure_erase(&self, buffer: &mut [u8]) {
        buffer.zeroize();
    }
}
