/*!
PQClean signature contexts.

Dilithium round 3 only signs with the empty context string. ML-DSA takes a
context string of at most 255 bytes, as FIPS 204 requires.
*/

use pqcrypto_traits::sign::{DetachedSignature as _, PublicKey as _, SecretKey as _};

use crate::core::crypto::algorithms::copy_exact;
use crate::core::crypto::traits::{NativeFailure, NativeResult, SigContext};
use crate::core::crypto::types::SignatureDetails;

const DILITHIUM_VERSION: &str = "round3 (PQClean clean)";
#[cfg(feature = "ml-dsa")]
const ML_DSA_VERSION: &str = "FIPS 204 (PQClean clean)";

/// Largest context string accepted by ML-DSA
#[cfg(feature = "ml-dsa")]
const MAX_CONTEXT_LEN: usize = 255;

/// Write a produced signature to the front of `out` and return its length.
fn write_signature(out: &mut [u8], signature: &[u8]) -> NativeResult<usize> {
    let len = signature.len();
    if len > out.len() {
        return Err(NativeFailure);
    }
    out[..len].copy_from_slice(signature);
    Ok(len)
}

macro_rules! pqclean_sig_common {
    ($krate:ident :: $scheme:ident, $name:expr, $version:expr, $level:expr, $ctx_support:expr) => {
        fn details(&self) -> SignatureDetails {
            SignatureDetails {
                name: $name.to_string(),
                version: $version.to_string(),
                claimed_nist_level: $level,
                is_euf_cma: true,
                sig_with_ctx_support: $ctx_support,
                length_public_key: $krate::$scheme::public_key_bytes(),
                length_secret_key: $krate::$scheme::secret_key_bytes(),
                max_length_signature: $krate::$scheme::signature_bytes(),
            }
        }

        fn keypair(&self, public_key: &mut [u8], secret_key: &mut [u8]) -> NativeResult {
            let (pk, sk) = $krate::$scheme::keypair();
            copy_exact(public_key, pk.as_bytes())?;
            copy_exact(secret_key, sk.as_bytes())
        }

        fn sign(&self, signature: &mut [u8], message: &[u8], secret_key: &[u8]) -> NativeResult<usize> {
            let sk = $krate::$scheme::SecretKey::from_bytes(secret_key).map_err(|_| NativeFailure)?;
            let sig = $krate::$scheme::detached_sign(message, &sk);
            write_signature(signature, sig.as_bytes())
        }

        fn verify(&self, message: &[u8], signature: &[u8], public_key: &[u8]) -> NativeResult {
            let pk = $krate::$scheme::PublicKey::from_bytes(public_key).map_err(|_| NativeFailure)?;
            let sig = $krate::$scheme::DetachedSignature::from_bytes(signature).map_err(|_| NativeFailure)?;
            $krate::$scheme::verify_detached_signature(&sig, message, &pk).map_err(|_| NativeFailure)
        }
    };
}

macro_rules! pqclean_dilithium {
    ($context:ident, $krate:ident :: $scheme:ident, $name:expr, $level:expr) => {
        pub(super) struct $context;

        impl SigContext for $context {
            pqclean_sig_common!($krate::$scheme, $name, DILITHIUM_VERSION, $level, false);
        }
    };
}

#[cfg(feature = "ml-dsa")]
macro_rules! pqclean_ml_dsa {
    ($context:ident, $krate:ident :: $scheme:ident, $name:expr, $level:expr) => {
        pub(super) struct $context;

        impl SigContext for $context {
            pqclean_sig_common!($krate::$scheme, $name, ML_DSA_VERSION, $level, true);

            fn sign_with_ctx(
                &self,
                signature: &mut [u8],
                message: &[u8],
                context: &[u8],
                secret_key: &[u8],
            ) -> NativeResult<usize> {
                if context.len() > MAX_CONTEXT_LEN {
                    return Err(NativeFailure);
                }
                let sk = $krate::$scheme::SecretKey::from_bytes(secret_key).map_err(|_| NativeFailure)?;
                let sig = $krate::$scheme::detached_sign_ctx(message, context, &sk);
                write_signature(signature, sig.as_bytes())
            }

            fn verify_with_ctx(
                &self,
                message: &[u8],
                signature: &[u8],
                context: &[u8],
                public_key: &[u8],
            ) -> NativeResult {
                if context.len() > MAX_CONTEXT_LEN {
                    return Err(NativeFailure);
                }
                let pk = $krate::$scheme::PublicKey::from_bytes(public_key).map_err(|_| NativeFailure)?;
                let sig = $krate::$scheme::DetachedSignature::from_bytes(signature).map_err(|_| NativeFailure)?;
                $krate::$scheme::verify_detached_signature_ctx(&sig, message, context, &pk)
                    .map_err(|_| NativeFailure)
            }
        }
    };
}

#[cfg(feature = "dilithium2")]
pqclean_dilithium!(Dilithium2, pqcrypto_dilithium::dilithium2, "Dilithium2", 2);
pqclean_dilithium!(Dilithium3, pqcrypto_dilithium::dilithium3, "Dilithium3", 3);
#[cfg(feature = "dilithium5")]
pqclean_dilithium!(Dilithium5, pqcrypto_dilithium::dilithium5, "Dilithium5", 5);

#[cfg(feature = "ml-dsa")]
pqclean_ml_dsa!(MlDsa44, pqcrypto_mldsa::mldsa44, "ML-DSA-44", 2);
#[cfg(feature = "ml-dsa")]
pqclean_ml_dsa!(MlDsa65, pqcrypto_mldsa::mldsa65, "ML-DSA-65", 3);
#[cfg(feature = "ml-dsa")]
pqclean_ml_dsa!(MlDsa87, pqcrypto_mldsa::mldsa87, "ML-DSA-87", 5);
