/*!
Memory handling for secret key material.

Secret keys held by mechanism handles live in `SecretBytes`, which is
overwritten with zeros before its storage is released or reused.
*/

pub mod secret_bytes;

pub use secret_bytes::SecretBytes;
