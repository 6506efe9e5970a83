//! Random source example: NIST-KAT, a custom filler and the system source.

use pqc_mechanisms::random::{self, RandomAlgorithm};
use pqc_mechanisms::{Result, hex_chop};

fn main() -> Result<()> {
    env_logger::init();

    println!("pqc-mechanisms version: {}", pqc_mechanisms::library_version());

    let mut entropy_seed = [0u8; 48];
    entropy_seed[0] = 100;
    entropy_seed[20] = 200;
    entropy_seed[47] = 150;

    random::switch_algorithm(RandomAlgorithm::NistKat);
    random::nist_kat_init_256bit(&entropy_seed, &[])?;
    println!("{:<18}{}", "NIST-KAT: ", hex_chop(&random::randombytes(32)));

    random::custom_algorithm(|buffer: &mut [u8]| {
        buffer.iter_mut().enumerate().for_each(|(i, b)| *b = (i % 256) as u8);
    });
    println!("{:<18}{}", "Custom RNG: ", hex_chop(&random::randombytes(32)));

    if let Err(e) = random::switch_algorithm_by_name("OpenSSL") {
        println!("{:<18}{}", "OpenSSL: ", e);
    }

    random::switch_algorithm(RandomAlgorithm::System);
    println!("{:<18}{}", "System (default): ", hex_chop(&random::randombytes(32)));

    Ok(())
}
