/*!
Error handling for the mechanism handles and registries.

Every failure a caller may need to branch on has its own variant: an
algorithm that never existed is distinct from one that exists but is
unavailable in this build, and caller mistakes (bad lengths, missing
secret key) are distinct from failures reported by the native library.
*/

use thiserror::Error;

/// Result type for mechanism operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for mechanism operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The algorithm name is absent from the native library's algorithm table
    #[error("\"{0}\" is not supported by the native library")]
    NotSupported(String),

    /// The algorithm is known to the native library but cannot be instantiated here
    #[error("\"{0}\" is not enabled in this build")]
    NotEnabled(String),

    /// Algorithm index past the end of the algorithm table
    #[error("algorithm index {index} out of range (table holds {count} entries)")]
    IndexOutOfRange {
        index: usize,
        count: usize,
    },

    /// Caller-supplied buffer has the wrong length for the bound algorithm
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Operation needs a secret key that is absent or has the wrong size
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// Native keypair generation reported failure
    #[error("can not generate keypair")]
    KeypairGeneration,

    /// Native encapsulation reported failure
    #[error("can not encapsulate secret")]
    Encapsulation,

    /// Native decapsulation reported failure
    #[error("can not decapsulate secret")]
    Decapsulation,

    /// Native signing reported failure
    #[error("can not sign message")]
    Signing,
}

/// Create an invalid argument error
#[macro_export]
macro_rules! invalid_argument_err {
    ($msg:expr) => {
        Err($crate::core::error::Error::InvalidArgument($msg.to_string()))
    };
    ($fmt:expr, $($arg:tt)*) => {
        Err($crate::core::error::Error::InvalidArgument(format!($fmt, $($arg)*)))
    };
}

/// Create an invalid state error
#[macro_export]
macro_rules! invalid_state_err {
    ($msg:expr) => {
        Err($crate::core::error::Error::InvalidState($msg.to_string()))
    };
    ($fmt:expr, $($arg:tt)*) => {
        Err($crate::core::error::Error::InvalidState(format!($fmt, $($arg)*)))
    };
}
