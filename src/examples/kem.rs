//! Key encapsulation example: a client and a server agree on a shared secret.

use std::process::ExitCode;
use std::time::Instant;

use pqc_mechanisms::{KeyEncapsulation, Result, enabled_kems, hex_chop, is_kem_enabled, names};

fn run() -> Result<bool> {
    println!("pqc-mechanisms version: {}", pqc_mechanisms::library_version());
    println!("Native KEM library: {}", pqc_mechanisms::kem_library_version());
    println!("Enabled KEMs:\n{}", enabled_kems().join(" "));

    let kem_name = if is_kem_enabled(names::ML_KEM_512) {
        names::ML_KEM_512
    } else {
        names::KYBER_768
    };

    let mut client = KeyEncapsulation::new(kem_name)?;
    println!("\nKEM details:\n{}", client.details());

    let start = Instant::now();
    let client_public_key = client.generate_keypair()?;
    println!("\nClient public key:\n{}", hex_chop(&client_public_key));
    println!("\nIt took {:?} to generate the key pair", start.elapsed());

    let server = KeyEncapsulation::new(kem_name)?;
    let start = Instant::now();
    let (ciphertext, shared_secret_server) = server.encapsulate(&client_public_key)?;
    println!("It took {:?} to encapsulate the secret", start.elapsed());

    let start = Instant::now();
    let shared_secret_client = client.decapsulate(&ciphertext)?;
    println!("It took {:?} to decapsulate the secret", start.elapsed());

    println!("\nClient shared secret:\n{}", hex_chop(&shared_secret_client));
    println!("\nServer shared secret:\n{}", hex_chop(&shared_secret_server));

    let is_valid = shared_secret_client == shared_secret_server;
    println!("\nShared secrets coincide? {}", is_valid);
    Ok(is_valid)
}

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
