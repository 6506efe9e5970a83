/*!
Signature table of the bundled native library.
*/

mod pqclean;

use crate::core::constants::{names, native};
use crate::core::crypto::traits::{AlgorithmTable, SigContext, SigLibrary};

/// Signature algorithms provided by the PQClean implementations
#[derive(Debug, Default, Clone, Copy)]
pub struct PqcleanSigs;

impl AlgorithmTable for PqcleanSigs {
    fn alg_count(&self) -> usize {
        names::SIGS.len()
    }

    fn alg_identifier(&self, index: usize) -> Option<&str> {
        names::SIGS.get(index).copied()
    }

    fn version(&self) -> &str {
        native::SIG_LIBRARY
    }
}

impl SigLibrary for PqcleanSigs {
    fn new_context(&self, name: &str) -> Option<Box<dyn SigContext>> {
        match name {
            #[cfg(feature = "dilithium2")]
            names::DILITHIUM_2 => Some(Box::new(pqclean::Dilithium2)),
            names::DILITHIUM_3 => Some(Box::new(pqclean::Dilithium3)),
            #[cfg(feature = "dilithium5")]
            names::DILITHIUM_5 => Some(Box::new(pqclean::Dilithium5)),
            #[cfg(feature = "ml-dsa")]
            names::ML_DSA_44 => Some(Box::new(pqclean::MlDsa44)),
            #[cfg(feature = "ml-dsa")]
            names::ML_DSA_65 => Some(Box::new(pqclean::MlDsa65)),
            #[cfg(feature = "ml-dsa")]
            names::ML_DSA_87 => Some(Box::new(pqclean::MlDsa87)),
            _ => None,
        }
    }
}
