/*!
Registry manager for mechanism families.

`AlgorithmRegistry` is an explicitly constructed object over a native
library. Its two listings are initialized at most once through
`once_cell::sync::OnceCell`: concurrent first callers block until the single
computation finishes and never observe a partially filled list.

For callers that do not inject their own library, `kems()` and `sigs()`
return process-wide registries over the bundled PQClean library.
*/

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use once_cell::sync::{Lazy, OnceCell};

use crate::core::crypto::algorithms::{PqcleanKems, PqcleanSigs};
use crate::core::crypto::traits::{AlgorithmTable, KemContext, KemLibrary, SigContext, SigLibrary};
use crate::core::error::{Error, Result};

/// A mechanism family: ties a native library trait to the context it opens
pub trait Family: 'static {
    /// Native library serving this family
    type Library: ?Sized + AlgorithmTable;

    /// Context opened by the library
    type Context: ?Sized;

    /// Short label used in log output
    const LABEL: &'static str;

    /// Allocate a native context for `name`
    fn instantiate(library: &Self::Library, name: &str) -> Option<Box<Self::Context>>;
}

/// Key encapsulation family
#[derive(Debug)]
pub enum KemFamily {}

impl Family for KemFamily {
    type Library = dyn KemLibrary;
    type Context = dyn KemContext;

    const LABEL: &'static str = "KEM";

    fn instantiate(library: &Self::Library, name: &str) -> Option<Box<Self::Context>> {
        library.new_context(name)
    }
}

/// Signature family
#[derive(Debug)]
pub enum SigFamily {}

impl Family for SigFamily {
    type Library = dyn SigLibrary;
    type Context = dyn SigContext;

    const LABEL: &'static str = "signature";

    fn instantiate(library: &Self::Library, name: &str) -> Option<Box<Self::Context>> {
        library.new_context(name)
    }
}

/// Registry of KEM algorithms
pub type KemRegistry = AlgorithmRegistry<KemFamily>;

/// Registry of signature algorithms
pub type SigRegistry = AlgorithmRegistry<SigFamily>;

/// Supported/enabled algorithm lists for one mechanism family
pub struct AlgorithmRegistry<F: Family> {
    /// Native library the lists are discovered from
    library: Arc<F::Library>,

    /// Every identifier in the library's table, in enumeration order
    supported: OnceCell<Vec<String>>,

    /// Identifiers that passed a trial instantiation, in enumeration order
    enabled: OnceCell<Vec<String>>,

    _family: PhantomData<fn() -> F>,
}

impl<F: Family> AlgorithmRegistry<F> {
    /// Create a registry over `library`. Nothing is discovered until a
    /// listing is first requested.
    pub fn new(library: Arc<F::Library>) -> Self {
        Self {
            library,
            supported: OnceCell::new(),
            enabled: OnceCell::new(),
            _family: PhantomData,
        }
    }

    /// The native library this registry was built over
    pub fn library(&self) -> &Arc<F::Library> {
        &self.library
    }

    /// Version string reported by the native library
    pub fn library_version(&self) -> &str {
        self.library.version()
    }

    /// Number of algorithm slots known to the native library
    pub fn count(&self) -> usize {
        self.library.alg_count()
    }

    /// Algorithm name at table slot `index`.
    ///
    /// Read straight from the native table, so indices keep their meaning
    /// even when the table has a slot without an identifier.
    pub fn name(&self, index: usize) -> Result<&str> {
        let count = self.count();
        if index >= count {
            return Err(Error::IndexOutOfRange { index, count });
        }

        self.library.alg_identifier(index).ok_or_else(|| {
            log::warn!("{} table has no identifier at {}", F::LABEL, index);
            Error::IndexOutOfRange { index, count }
        })
    }

    /// Whether `name` appears in the supported list (exact match)
    pub fn is_supported(&self, name: &str) -> bool {
        self.supported().iter().any(|n| n == name)
    }

    /// Whether a context for `name` can be instantiated right now.
    ///
    /// This is a live probe: a trial context is opened and released
    /// immediately.
    pub fn is_enabled(&self, name: &str) -> bool {
        F::instantiate(&*self.library, name).is_some()
    }

    /// Every algorithm the native library knows, in enumeration order
    pub fn supported(&self) -> &[String] {
        self.supported.get_or_init(|| {
            let count = self.library.alg_count();
            let mut names = Vec::with_capacity(count);

            for index in 0..count {
                match self.library.alg_identifier(index) {
                    Some(name) => names.push(name.to_string()),
                    None => log::warn!(
                        "{} table reports {} entries but has no identifier at {}",
                        F::LABEL,
                        count,
                        index
                    ),
                }
            }

            log::debug!("Discovered {} supported {} algorithms", names.len(), F::LABEL);
            names
        })
    }

    /// The supported algorithms that can be instantiated in this build
    pub fn enabled(&self) -> &[String] {
        self.enabled.get_or_init(|| {
            let names: Vec<String> = self
                .supported()
                .iter()
                .filter(|name| self.is_enabled(name))
                .cloned()
                .collect();

            log::debug!(
                "{} of {} {} algorithms are enabled",
                names.len(),
                self.supported().len(),
                F::LABEL
            );
            names
        })
    }

    /// Check `name` against the cached listings.
    ///
    /// Fails with `NotSupported` when the name is absent from the supported
    /// list and with `NotEnabled` when it is supported but not enabled.
    pub fn validate(&self, name: &str) -> Result<()> {
        if self.enabled().iter().any(|n| n == name) {
            return Ok(());
        }

        if self.is_supported(name) {
            log::debug!("{} algorithm {} is supported but not enabled", F::LABEL, name);
            Err(Error::NotEnabled(name.to_string()))
        } else {
            log::debug!("{} algorithm {} is not supported", F::LABEL, name);
            Err(Error::NotSupported(name.to_string()))
        }
    }

    /// Validate `name` and open a native context for it
    pub fn open(&self, name: &str) -> Result<Box<F::Context>> {
        self.validate(name)?;

        F::instantiate(&*self.library, name).ok_or_else(|| {
            log::warn!(
                "{} algorithm {} is listed as enabled but failed to instantiate",
                F::LABEL,
                name
            );
            Error::NotEnabled(name.to_string())
        })
    }
}

impl<F: Family> fmt::Debug for AlgorithmRegistry<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlgorithmRegistry")
            .field("family", &F::LABEL)
            .field("supported", &self.supported.get())
            .field("enabled", &self.enabled.get())
            .finish()
    }
}

// Global registry instances over the bundled library
static KEMS: Lazy<KemRegistry> = Lazy::new(|| KemRegistry::new(Arc::new(PqcleanKems)));
static SIGS: Lazy<SigRegistry> = Lazy::new(|| SigRegistry::new(Arc::new(PqcleanSigs)));

// Public API

/// Process-wide KEM registry over the bundled library
pub fn kems() -> &'static KemRegistry {
    &KEMS
}

/// Process-wide signature registry over the bundled library
pub fn sigs() -> &'static SigRegistry {
    &SIGS
}

/// Version of the native library serving the KEM registry
pub fn kem_library_version() -> &'static str {
    kems().library_version()
}

/// Version of the native library serving the signature registry
pub fn sig_library_version() -> &'static str {
    sigs().library_version()
}

/// List all supported KEM algorithms
pub fn supported_kems() -> &'static [String] {
    kems().supported()
}

/// List all enabled KEM algorithms
pub fn enabled_kems() -> &'static [String] {
    kems().enabled()
}

/// Check whether a KEM algorithm is supported
pub fn is_kem_supported(name: &str) -> bool {
    kems().is_supported(name)
}

/// Check whether a KEM algorithm is enabled
pub fn is_kem_enabled(name: &str) -> bool {
    kems().is_enabled(name)
}

/// Get a KEM algorithm name by index
pub fn kem_name(index: usize) -> Result<&'static str> {
    kems().name(index)
}

/// Number of KEM algorithm slots
pub fn max_number_kems() -> usize {
    kems().count()
}

/// List all supported signature algorithms
pub fn supported_sigs() -> &'static [String] {
    sigs().supported()
}

/// List all enabled signature algorithms
pub fn enabled_sigs() -> &'static [String] {
    sigs().enabled()
}

/// Check whether a signature algorithm is supported
pub fn is_sig_supported(name: &str) -> bool {
    sigs().is_supported(name)
}

/// Check whether a signature algorithm is enabled
pub fn is_sig_enabled(name: &str) -> bool {
    sigs().is_enabled(name)
}

/// Get a signature algorithm name by index
pub fn sig_name(index: usize) -> Result<&'static str> {
    sigs().name(index)
}

/// Number of signature algorithm slots
pub fn max_number_sigs() -> usize {
    sigs().count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::names;

    #[test]
    fn test_default_registries_list_bundled_tables() {
        assert_eq!(supported_kems(), names::KEMS.as_slice());
        assert_eq!(supported_sigs(), names::SIGS.as_slice());
        assert_eq!(max_number_kems(), names::KEMS.len());
        assert_eq!(max_number_sigs(), names::SIGS.len());
    }

    #[test]
    fn test_always_on_algorithms_are_enabled() {
        assert!(enabled_kems().iter().any(|n| n == names::KYBER_768));
        assert!(enabled_sigs().iter().any(|n| n == names::DILITHIUM_3));
        assert!(is_kem_enabled(names::KYBER_768));
        assert!(is_sig_enabled(names::DILITHIUM_3));
    }

    #[test]
    fn test_feature_gated_algorithms_follow_features() {
        assert_eq!(is_kem_enabled(names::KYBER_512), cfg!(feature = "kyber512"));
        assert_eq!(is_kem_enabled(names::KYBER_1024), cfg!(feature = "kyber1024"));
        assert_eq!(is_kem_enabled(names::ML_KEM_768), cfg!(feature = "ml-kem"));
        assert_eq!(is_sig_enabled(names::DILITHIUM_2), cfg!(feature = "dilithium2"));
        assert_eq!(is_sig_enabled(names::DILITHIUM_5), cfg!(feature = "dilithium5"));
        assert_eq!(is_sig_enabled(names::ML_DSA_65), cfg!(feature = "ml-dsa"));
    }

    #[test]
    fn test_name_by_index() {
        assert_eq!(kem_name(0).unwrap(), names::KYBER_512);
        assert_eq!(sig_name(1).unwrap(), names::DILITHIUM_3);
        assert_eq!(
            kem_name(names::KEMS.len()),
            Err(Error::IndexOutOfRange { index: names::KEMS.len(), count: names::KEMS.len() })
        );
    }

    #[test]
    fn test_validate_matches_open() {
        assert!(kems().validate(names::KYBER_768).is_ok());
        assert_eq!(
            sigs().validate("NotASig"),
            Err(Error::NotSupported("NotASig".to_string()))
        );
        if !cfg!(feature = "kyber1024") {
            assert_eq!(
                kems().validate(names::KYBER_1024),
                Err(Error::NotEnabled(names::KYBER_1024.to_string()))
            );
            assert_eq!(kems().open(names::KYBER_1024).err(), kems().validate(names::KYBER_1024).err());
        }
    }

    #[test]
    fn test_bundled_library_versions() {
        assert!(kem_library_version().contains("pqcrypto-kyber"));
        assert!(sig_library_version().contains("pqcrypto-dilithium"));
        assert_eq!(kems().library_version(), PqcleanKems.version());
    }

    // Table with an empty slot between two identifiers
    struct GappedTable;

    impl AlgorithmTable for GappedTable {
        fn alg_count(&self) -> usize {
            3
        }

        fn alg_identifier(&self, index: usize) -> Option<&str> {
            match index {
                0 => Some("First"),
                2 => Some("Third"),
                _ => None,
            }
        }

        fn version(&self) -> &str {
            "gapped"
        }
    }

    impl KemLibrary for GappedTable {
        fn new_context(&self, _name: &str) -> Option<Box<dyn KemContext>> {
            None
        }
    }

    #[test]
    fn test_name_keeps_table_positions_across_gaps() {
        let registry = KemRegistry::new(Arc::new(GappedTable));

        assert_eq!(registry.supported(), ["First".to_string(), "Third".to_string()]);
        assert_eq!(registry.name(0), Ok("First"));
        assert_eq!(registry.name(2), Ok("Third"));
        assert_eq!(registry.name(1), Err(Error::IndexOutOfRange { index: 1, count: 3 }));
        assert_eq!(registry.name(3), Err(Error::IndexOutOfRange { index: 3, count: 3 }));
        assert_eq!(registry.library_version(), "gapped");
    }

    #[test]
    fn test_open_distinguishes_unsupported() {
        assert_eq!(
            kems().open("NotAKem").err(),
            Some(Error::NotSupported("NotAKem".to_string()))
        );
        assert!(!is_sig_supported("NotASig"));
        assert!(is_kem_supported(names::KYBER_1024));
    }
}
