/*!
Core types for mechanism handles.

This module provides the algorithm metadata snapshots captured from a
native context when a handle is constructed.
*/

pub mod details;

// Re-export core types for easier access
pub use details::{KemDetails, SignatureDetails};
