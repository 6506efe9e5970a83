/*!
Native library boundary.

These traits describe the minimal contract the handles and registries need
from a native post-quantum library: static algorithm enumeration, context
allocation (with `None` meaning "cannot instantiate here"), the keypair and
mechanism primitives, and a non-elidable erase primitive. Freeing a context
is dropping its box.
*/

pub mod kem;
pub mod native;
pub mod signature;

// Re-export core traits for easier access
pub use kem::{KemContext, KemLibrary};
pub use native::{AlgorithmTable, NativeFailure, NativeResult};
pub use signature::{SigContext, SigLibrary};
