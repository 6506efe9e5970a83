/*!
Traits for key encapsulation mechanisms.
*/

use zeroize::Zeroize;

use crate::core::crypto::traits::native::{AlgorithmTable, NativeResult};
use crate::core::crypto::types::KemDetails;

/// A native library providing KEM contexts
pub trait KemLibrary: AlgorithmTable {
    /// Allocate a context for `name`; `None` when the algorithm cannot be
    /// instantiated in this build or on this platform
    fn new_context(&self, name: &str) -> Option<Box<dyn KemContext>>;
}

/// An opened native KEM context
///
/// Output buffers are allocated by the caller with the lengths reported by
/// `details()`.
pub trait KemContext: Send {
    /// Fixed metadata of the algorithm this context was opened for
    fn details(&self) -> KemDetails;

    /// Generate a keypair into `public_key` and `secret_key`
    fn keypair(&self, public_key: &mut [u8], secret_key: &mut [u8]) -> NativeResult;

    /// Encapsulate a fresh shared secret against `public_key`
    fn encapsulate(
        &self,
        ciphertext: &mut [u8],
        shared_secret: &mut [u8],
        public_key: &[u8],
    ) -> NativeResult;

    /// Recover the shared secret from `ciphertext` with `secret_key`
    fn decapsulate(&self, shared_secret: &mut [u8], ciphertext: &[u8], secret_key: &[u8]) -> NativeResult;

    /// Overwrite `buffer` with zeros in a way the optimizer cannot elide
    fn secure_erase(&self, buffer: &mut [u8]) {
        buffer.zeroize();
    }
}
