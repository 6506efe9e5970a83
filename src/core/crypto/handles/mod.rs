/*!
Mechanism handles.

A handle owns exactly one native context and, optionally, a secret key.
Construction validates the algorithm name against a registry, so a handle
that exists is always in the ready state; dropping it scrubs the secret key
through the context's erase primitive and then releases the context.

Handles are `Send` but not `Sync`: each logical actor owns its own handle,
and distinct handles never share native state.
*/

pub mod key_encapsulation;
pub mod signature;

pub use key_encapsulation::KeyEncapsulation;
pub use signature::Signature;

use crate::core::error::{Error, Result};
use crate::core::memory::SecretBytes;

/// Adopt a caller-supplied secret key after checking its length.
///
/// An empty buffer means "no secret key". A buffer of the wrong length is
/// scrubbed with `erase` before the error is returned.
pub(crate) fn accept_secret_key<F>(
    name: &str,
    secret_key: Option<SecretBytes>,
    expected: usize,
    erase: F,
) -> Result<SecretBytes>
where
    F: FnOnce(&mut [u8]),
{
    let Some(mut secret) = secret_key else {
        return Ok(SecretBytes::new());
    };

    if secret.is_empty() || secret.len() == expected {
        return Ok(secret);
    }

    let got = secret.len();
    secret.scrub_with(erase);
    log::debug!("Rejected {}-byte secret key for {}", got, name);
    Err(Error::InvalidArgument(format!(
        "secret key for {} must be {} bytes, got {}",
        name, expected, got
    )))
}

/// Borrow the secret key when it has the size the algorithm requires.
pub(crate) fn require_secret_key<'a>(
    name: &str,
    secret_key: &'a SecretBytes,
    expected: usize,
) -> Result<&'a [u8]> {
    if secret_key.is_empty() {
        return crate::invalid_state_err!(
            "{} handle has no secret key; generate a keypair or supply one",
            name
        );
    }
    if secret_key.len() != expected {
        return crate::invalid_state_err!(
            "{} secret key must be {} bytes, holds {}",
            name,
            expected,
            secret_key.len()
        );
    }
    Ok(secret_key.as_slice())
}

/// Fail with `InvalidArgument` unless `buffer` is exactly `expected` bytes.
pub(crate) fn check_length(what: &str, buffer: &[u8], expected: usize) -> Result<()> {
    if buffer.len() != expected {
        return crate::invalid_argument_err!(
            "{} must be {} bytes, got {}",
            what,
            expected,
            buffer.len()
        );
    }
    Ok(())
}
