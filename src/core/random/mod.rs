/*!
Random-byte source.

The process has one active source, switchable at run time: the system
generator (default), the deterministic NIST-KAT DRBG, or a caller-supplied
filler. The source is shared process-wide behind a mutex, so switching it
from one thread affects every other thread.

The bundled native library draws keypair randomness from the operating
system; this source serves callers, demos and tests that need reproducible
bytes.
*/

pub mod nist_kat;

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use parking_lot::Mutex;
use rand::RngCore;

use crate::core::constants::NIST_KAT_SEED_BYTES;
use crate::core::error::{Error, Result};

pub use nist_kat::NistKatDrbg;

/// Built-in random algorithms that can be selected by name
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize, serde::Deserialize))]
pub enum RandomAlgorithm {
    /// Operating-system backed generator
    #[default]
    System,
    /// AES-256 CTR_DRBG seeded through `nist_kat_init_256bit`
    NistKat,
}

impl RandomAlgorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            RandomAlgorithm::System => "system",
            RandomAlgorithm::NistKat => "NIST-KAT",
        }
    }
}

impl fmt::Display for RandomAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RandomAlgorithm {
    type Err = Error;

    /// Accepts `"system"` and `"NIST-KAT"`. `"OpenSSL"` names a source this
    /// build does not carry and is reported as `NotSupported`, like any other
    /// unknown name.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "system" => Ok(RandomAlgorithm::System),
            "NIST-KAT" => Ok(RandomAlgorithm::NistKat),
            other => Err(Error::NotSupported(other.to_string())),
        }
    }
}

type CustomFiller = Box<dyn FnMut(&mut [u8]) + Send>;

enum Active {
    System,
    NistKat,
    Custom(CustomFiller),
}

struct RandomState {
    active: Active,
    // Survives switching away from NIST-KAT and back
    drbg: NistKatDrbg,
}

static STATE: Lazy<Mutex<RandomState>> = Lazy::new(|| {
    Mutex::new(RandomState {
        active: Active::System,
        drbg: NistKatDrbg::default(),
    })
});

fn fill(out: &mut [u8]) {
    let mut state = STATE.lock();
    let RandomState { active, drbg } = &mut *state;
    match active {
        Active::System => rand::rng().fill_bytes(out),
        Active::NistKat => drbg.fill(out),
        Active::Custom(filler) => filler(out),
    }
}

/// Generate `count` random bytes from the active source
pub fn randombytes(count: usize) -> Vec<u8> {
    let mut out = vec![0u8; count];
    fill(&mut out);
    out
}

/// Overwrite the first `count` bytes of `buffer` with random bytes
pub fn randombytes_into(buffer: &mut [u8], count: usize) -> Result<()> {
    if count > buffer.len() {
        return crate::invalid_argument_err!(
            "can not write {} random bytes into a {}-byte buffer",
            count,
            buffer.len()
        );
    }
    fill(&mut buffer[..count]);
    Ok(())
}

/// Make `algorithm` the active source
pub fn switch_algorithm(algorithm: RandomAlgorithm) {
    let mut state = STATE.lock();
    state.active = match algorithm {
        RandomAlgorithm::System => Active::System,
        RandomAlgorithm::NistKat => Active::NistKat,
    };
    log::debug!("Random source switched to {}", algorithm);
}

/// Parse `name` and make it the active source
pub fn switch_algorithm_by_name(name: &str) -> Result<()> {
    let algorithm = name.parse::<RandomAlgorithm>()?;
    switch_algorithm(algorithm);
    Ok(())
}

/// Seed the NIST-KAT DRBG.
///
/// `entropy` must be exactly 48 bytes. `personalization` must be empty or
/// at least 48 bytes long; only its first 48 bytes are used. Seeding does not
/// switch the active source.
pub fn nist_kat_init_256bit(entropy: &[u8], personalization: &[u8]) -> Result<()> {
    let entropy: &[u8; NIST_KAT_SEED_BYTES] = entropy.try_into().map_err(|_| {
        Error::InvalidArgument(format!(
            "the entropy source must be exactly {} bytes long",
            NIST_KAT_SEED_BYTES
        ))
    })?;

    let personalization = match personalization.len() {
        0 => None,
        len if len >= NIST_KAT_SEED_BYTES => personalization[..NIST_KAT_SEED_BYTES].try_into().ok(),
        _ => {
            return crate::invalid_argument_err!(
                "the personalization string must be either empty or at least {} bytes long",
                NIST_KAT_SEED_BYTES
            );
        }
    };

    STATE.lock().drbg = NistKatDrbg::new(entropy, personalization);
    log::debug!("NIST-KAT DRBG seeded");
    Ok(())
}

/// Install `filler` as the active source.
///
/// The filler runs while the source lock is held, so it must not call back
/// into this module.
pub fn custom_algorithm<F>(filler: F)
where
    F: FnMut(&mut [u8]) + Send + 'static,
{
    STATE.lock().active = Active::Custom(Box::new(filler));
    log::debug!("Random source switched to a custom filler");
}

/// Name of the active source: `"system"`, `"NIST-KAT"` or `"custom"`
pub fn active_algorithm() -> &'static str {
    match STATE.lock().active {
        Active::System => RandomAlgorithm::System.as_str(),
        Active::NistKat => RandomAlgorithm::NistKat.as_str(),
        Active::Custom(_) => "custom",
    }
}
