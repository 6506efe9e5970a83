/*!
Bundled native library.

The PQClean C implementations shipped in the `pqcrypto-*` crates serve as
the native library behind the default registries. Every identifier in the
static tables is supported; an identifier is enabled only when its cargo
feature is compiled in, otherwise `new_context` returns `None` for it.
*/

use crate::core::crypto::traits::{NativeFailure, NativeResult};

// Key encapsulation mechanisms
pub mod kem;

// Signature mechanisms
pub mod signatures;

pub use kem::PqcleanKems;
pub use signatures::PqcleanSigs;

/// Copy `bytes` into a caller-allocated buffer of exactly the same length.
pub(crate) fn copy_exact(out: &mut [u8], bytes: &[u8]) -> NativeResult {
    if out.len() != bytes.len() {
        return Err(NativeFailure);
    }
    out.copy_from_slice(bytes);
    Ok(())
}
