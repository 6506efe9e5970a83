//! The random source is process-wide, so everything that switches it runs in
//! one test.

use pqc_mechanisms::random::{self, RandomAlgorithm};
use pqc_mechanisms::{Error, MechanismConfig, Result, names};

fn kat_seed() -> Vec<u8> {
    (0u8..48).collect()
}

#[test]
fn test_switching_random_sources() -> Result<()> {
    assert_eq!(random::active_algorithm(), "system");
    let system = random::randombytes(32);
    assert_eq!(system.len(), 32);
    assert_ne!(system, random::randombytes(32));

    // NIST-KAT reproduces the first seed of the PQC KAT files
    random::switch_algorithm_by_name("NIST-KAT")?;
    random::nist_kat_init_256bit(&kat_seed(), &[])?;
    assert_eq!(random::active_algorithm(), "NIST-KAT");
    assert_eq!(
        random::randombytes(48),
        [
            0x06, 0x15, 0x50, 0x23, 0x4D, 0x15, 0x8C, 0x5E, 0xC9, 0x55, 0x95, 0xFE, 0x04, 0xEF, 0x7A, 0x25,
            0x76, 0x7F, 0x2E, 0x24, 0xCC, 0x2B, 0xC4, 0x79, 0xD0, 0x9D, 0x86, 0xDC, 0x9A, 0xBC, 0xFD, 0xE7,
            0x05, 0x6A, 0x8C, 0x26, 0x6F, 0x9E, 0xF9, 0x7E, 0xD0, 0x85, 0x41, 0xDB, 0xD2, 0xE1, 0xFF, 0xA1,
        ]
    );

    // Re-seeding restarts the stream
    random::nist_kat_init_256bit(&kat_seed(), &[])?;
    let first = random::randombytes(20);
    random::nist_kat_init_256bit(&kat_seed(), &[])?;
    let mut buffer = [0xAAu8; 24];
    random::randombytes_into(&mut buffer, 20)?;
    assert_eq!(&buffer[..20], first.as_slice());
    assert_eq!(&buffer[20..], &[0xAA; 4]);

    // Bad seeds are rejected and leave the DRBG alone
    assert!(matches!(
        random::nist_kat_init_256bit(&[0u8; 32], &[]),
        Err(Error::InvalidArgument(_))
    ));
    assert!(matches!(
        random::nist_kat_init_256bit(&kat_seed(), &[1u8; 47]),
        Err(Error::InvalidArgument(_))
    ));
    random::nist_kat_init_256bit(&kat_seed(), &[0u8; 64])?;
    assert_eq!(random::randombytes(20), first);

    // Custom filler
    random::custom_algorithm(|buffer: &mut [u8]| {
        buffer.iter_mut().enumerate().for_each(|(i, b)| *b = (i % 256) as u8);
    });
    assert_eq!(random::active_algorithm(), "custom");
    assert_eq!(random::randombytes(4), vec![0, 1, 2, 3]);

    // Unknown sources leave the active one in place
    assert_eq!(
        random::switch_algorithm_by_name("OpenSSL"),
        Err(Error::NotSupported("OpenSSL".into()))
    );
    assert_eq!(random::active_algorithm(), "custom");

    // A config installs its source on request
    let config = MechanismConfig::with_algorithms(names::KYBER_768, names::DILITHIUM_3, RandomAlgorithm::NistKat);
    config.apply_random();
    assert_eq!(random::active_algorithm(), "NIST-KAT");

    MechanismConfig::default().apply_random();
    assert_eq!(random::active_algorithm(), "system");
    Ok(())
}
