/*!
KEM table of the bundled native library.
*/

mod pqclean;

use crate::core::constants::{names, native};
use crate::core::crypto::traits::{AlgorithmTable, KemContext, KemLibrary};

/// KEM algorithms provided by the PQClean implementations
#[derive(Debug, Default, Clone, Copy)]
pub struct PqcleanKems;

impl AlgorithmTable for PqcleanKems {
    fn alg_count(&self) -> usize {
        names::KEMS.len()
    }

    fn alg_identifier(&self, index: usize) -> Option<&str> {
        names::KEMS.get(index).copied()
    }

    fn version(&self) -> &str {
        native::KEM_LIBRARY
    }
}

impl KemLibrary for PqcleanKems {
    fn new_context(&self, name: &str) -> Option<Box<dyn KemContext>> {
        match name {
            #[cfg(feature = "kyber512")]
            names::KYBER_512 => Some(Box::new(pqclean::Kyber512)),
            names::KYBER_768 => Some(Box::new(pqclean::Kyber768)),
            #[cfg(feature = "kyber1024")]
            names::KYBER_1024 => Some(Box::new(pqclean::Kyber1024)),
            #[cfg(feature = "ml-kem")]
            names::ML_KEM_512 => Some(Box::new(pqclean::MlKem512)),
            #[cfg(feature = "ml-kem")]
            names::ML_KEM_768 => Some(Box::new(pqclean::MlKem768)),
            #[cfg(feature = "ml-kem")]
            names::ML_KEM_1024 => Some(Box::new(pqclean::MlKem1024)),
            _ => None,
        }
    }
}
