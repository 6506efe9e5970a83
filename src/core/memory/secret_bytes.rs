/*!
Zero-on-release byte buffer for secret key material.

`SecretBytes` is overwritten with zeros on every path that discards its
contents: explicit scrubbing, replacement by a new key, and drop. Moving a
`SecretBytes` moves only the owning pointer, so the secret bytes are never
duplicated on the heap by an ownership transfer.
*/

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// An owned secret buffer that is scrubbed before its storage is released.
#[derive(Clone, Default, Zeroize, ZeroizeOnDrop)]
pub struct SecretBytes {
    bytes: Vec<u8>,
}

impl SecretBytes {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a zero-filled buffer of `len` bytes, ready to be written by a
    /// native primitive.
    pub fn zeroed(len: usize) -> Self {
        Self { bytes: vec![0u8; len] }
    }

    /// Take ownership of `bytes` as secret material.
    pub fn from_vec(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Scrub the buffer and leave it empty.
    ///
    /// `erase` is the native library's secure-erase primitive; it runs over
    /// the live bytes first, after which the whole allocation (including
    /// spare capacity) is zeroed and the length reset to zero.
    pub fn scrub_with<F>(&mut self, erase: F)
    where
        F: FnOnce(&mut [u8]),
    {
        if !self.bytes.is_empty() {
            erase(&mut self.bytes);
        }
        self.bytes.zeroize();
    }

    /// Scrub the current contents, then adopt the contents of `other`.
    pub fn replace_with<F>(&mut self, mut other: SecretBytes, erase: F)
    where
        F: FnOnce(&mut [u8]),
    {
        self.scrub_with(erase);
        self.bytes = std::mem::take(&mut other.bytes);
    }

    /// Copy the contents into a buffer that zeroizes itself on drop.
    pub fn to_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.bytes.clone())
    }
}

impl fmt::Debug for SecretBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretBytes([REDACTED; {}])", self.bytes.len())
    }
}
