//! Signature example: a signer signs a message and a verifier checks it.

use std::process::ExitCode;
use std::time::Instant;

use pqc_mechanisms::{Result, Signature, enabled_sigs, hex_chop, is_sig_enabled, names};

fn run() -> Result<bool> {
    println!("pqc-mechanisms version: {}", pqc_mechanisms::library_version());
    println!("Native signature library: {}", pqc_mechanisms::sig_library_version());
    println!("Enabled signatures:\n{}", enabled_sigs().join(" "));

    let message = b"This is the message to sign";
    let sig_name = if is_sig_enabled(names::ML_DSA_44) {
        names::ML_DSA_44
    } else {
        names::DILITHIUM_3
    };

    let mut signer = Signature::new(sig_name)?;
    println!("\nSignature details:\n{}", signer.details());

    let start = Instant::now();
    let signer_public_key = signer.generate_keypair()?;
    println!("\nSigner public key:\n{}", hex_chop(&signer_public_key));
    println!("\nIt took {:?} to generate the key pair", start.elapsed());

    let start = Instant::now();
    let signature = signer.sign(message)?;
    println!("It took {:?} to sign the message", start.elapsed());
    println!("\nSignature:\n{}", hex_chop(&signature));

    let verifier = Signature::new(sig_name)?;
    let start = Instant::now();
    let is_valid = verifier.verify(message, &signature, &signer_public_key)?;
    println!("\nIt took {:?} to verify the signature", start.elapsed());
    println!("\nValid signature? {}", is_valid);

    if signer.details().sig_with_ctx_support {
        let context = b"example context";
        let signature = signer.sign_with_ctx_str(message, context)?;
        let is_valid_ctx = verifier.verify_with_ctx_str(message, &signature, context, &signer_public_key)?;
        println!("Valid signature with context string? {}", is_valid_ctx);
        return Ok(is_valid && is_valid_ctx);
    }

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
