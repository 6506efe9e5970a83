/*!
Traits shared by every mechanism family.
*/

use std::fmt;

/// Failure status reported by a native primitive.
///
/// Carries no detail on purpose: native libraries report a bare status
/// code, and the handle layer maps it to the operation-specific error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NativeFailure;

impl fmt::Display for NativeFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("native primitive reported failure")
    }
}

impl std::error::Error for NativeFailure {}

/// Status of a native primitive call
pub type NativeResult<T = ()> = std::result::Result<T, NativeFailure>;

/// Static algorithm enumeration of a native library
pub trait AlgorithmTable: Send + Sync {
    /// Number of algorithm slots in the table; fixed for the process
    fn alg_count(&self) -> usize;

    /// Identifier stored at `index`, or `None` past the end of the table
    fn alg_identifier(&self, index: usize) -> Option<&str>;

    /// Version of the native library behind this table
    fn version(&self) -> &str;
}
