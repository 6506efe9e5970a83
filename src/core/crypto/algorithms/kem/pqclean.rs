/*!
PQClean KEM contexts.

The contexts are stateless: each one only knows which parameter set it was
opened for. Key and ciphertext parsing failures are reported as native
failures.
*/

use pqcrypto_traits::kem::{
    Ciphertext as _,
    PublicKey as _,
    SecretKey as _,
    SharedSecret as _,
};

use crate::core::crypto::algorithms::copy_exact;
use crate::core::crypto::traits::{KemContext, NativeFailure, NativeResult};
use crate::core::crypto::types::KemDetails;

const KYBER_VERSION: &str = "round3 (PQClean clean)";
#[cfg(feature = "ml-kem")]
const ML_KEM_VERSION: &str = "FIPS 203 (PQClean clean)";

macro_rules! pqclean_kem {
    ($context:ident, $krate:ident :: $scheme:ident, $name:expr, $version:expr, $level:expr) => {
        pub(super) struct $context;

        impl KemContext for $context {
            fn details(&self) -> KemDetails {
                KemDetails {
                    name: $name.to_string(),
                    version: $version.to_string(),
                    claimed_nist_level: $level,
                    is_ind_cca: true,
                    length_public_key: $krate::$scheme::public_key_bytes(),
                    length_secret_key: $krate::$scheme::secret_key_bytes(),
                    length_ciphertext: $krate::$scheme::ciphertext_bytes(),
                    length_shared_secret: $krate::$scheme::shared_secret_bytes(),
                }
            }

            fn keypair(&self, public_key: &mut [u8], secret_key: &mut [u8]) -> NativeResult {
                let (pk, sk) = $krate::$scheme::keypair();
                copy_exact(public_key, pk.as_bytes())?;
                copy_exact(secret_key, sk.as_bytes())
            }

            fn encapsulate(
                &self,
                ciphertext: &mut [u8],
                shared_secret: &mut [u8],
                public_key: &[u8],
            ) -> NativeResult {
                let pk = $krate::$scheme::PublicKey::from_bytes(public_key)
                    .map_err(|_| NativeFailure)?;
                let (ss, ct) = $krate::$scheme::encapsulate(&pk);
                copy_exact(ciphertext, ct.as_bytes())?;
                copy_exact(shared_secret, ss.as_bytes())
            }

            fn decapsulate(
                &self,
                shared_secret: &mut [u8],
                ciphertext: &[u8],
                secret_key: &[u8],
            ) -> NativeResult {
                let ct = $krate::$scheme::Ciphertext::from_bytes(ciphertext)
                    .map_err(|_| NativeFailure)?;
                let sk = $krate::$scheme::SecretKey::from_bytes(secret_key)
                    .map_err(|_| NativeFailure)?;
                let ss = $krate::$scheme::decapsulate(&ct, &sk);
                copy_exact(shared_secret, ss.as_bytes())
            }
        }
    };
}

#[cfg(feature = "kyber512")]
pqclean_kem!(Kyber512, pqcrypto_kyber::kyber512, "Kyber512", KYBER_VERSION, 1);
pqclean_kem!(Kyber768, pqcrypto_kyber::kyber768, "Kyber768", KYBER_VERSION, 3);
#[cfg(feature = "kyber1024")]
pqclean_kem!(Kyber1024, pqcrypto_kyber::kyber1024, "Kyber1024", KYBER_VERSION, 5);

#[cfg(feature = "ml-kem")]
pqclean_kem!(MlKem512, pqcrypto_mlkem::mlkem512, "ML-KEM-512", ML_KEM_VERSION, 1);
#[cfg(feature = "ml-kem")]
pqclean_kem!(MlKem768, pqcrypto_mlkem::mlkem768, "ML-KEM-768", ML_KEM_VERSION, 3);
#[cfg(feature = "ml-kem")]
pqclean_kem!(MlKem1024, pqcrypto_mlkem::mlkem1024, "ML-KEM-1024", ML_KEM_VERSION, 5);
