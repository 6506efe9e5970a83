//! Core components for the mechanism handles.
//!
//! This module contains the fundamental building blocks: the registries and
//! handles, secret-key memory handling, the random-byte source and error
//! handling.

// Export mechanism functionality
pub mod crypto;

// Export memory handling for secret keys
pub mod memory;

// Random-byte source
pub mod random;

// Display helpers
pub mod util;

// Constants
pub mod constants;

// Error handling
pub mod error;

// Re-exports for convenience
pub use self::error::{Error, Result};
pub use self::constants::VERSION;
