//! Instrumented native library for integration tests.
//!
//! `MockKems` and `MockSigs` implement the native boundary with toy schemes
//! whose keys and outputs are easy to recognise. Every context allocation and
//! release is counted, every `secure_erase` call records the bytes it was
//! given, names can be disabled, and each native primitive can be forced to
//! fail.

#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use parking_lot::Mutex;
use zeroize::Zeroize;

use pqc_mechanisms::native::{
    AlgorithmTable, KemContext, KemLibrary, NativeFailure, NativeResult, SigContext, SigLibrary,
};
use pqc_mechanisms::{KemDetails, KemRegistry, SigRegistry, SignatureDetails};

pub const KEM_NAMES: [&str; 3] = ["Mock-KEM-A", "Mock-KEM-B", "Mock-KEM-Off"];
pub const SIG_NAMES: [&str; 3] = ["Mock-Sig-A", "Mock-Sig-B", "Mock-Sig-Off"];

pub const KEY_LEN: usize = 16;
pub const CIPHERTEXT_LEN: usize = 16;
pub const SHARED_SECRET_LEN: usize = 8;
pub const SIGNATURE_LEN: usize = 16;
pub const MAX_SIGNATURE_LEN: usize = 24;

/// Counters and switches shared by a mock library and all its contexts
#[derive(Default)]
pub struct MockState {
    pub identifiers_read: AtomicUsize,
    pub opened: AtomicUsize,
    pub freed: AtomicUsize,
    pub erased: Mutex<Vec<Vec<u8>>>,
    pub disabled: Mutex<HashSet<String>>,
    pub fail_keypair: AtomicBool,
    pub fail_encapsulate: AtomicBool,
    pub fail_decapsulate: AtomicBool,
    pub fail_sign: AtomicBool,
    keypairs: AtomicUsize,
}

impl MockState {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn live_contexts(&self) -> usize {
        self.opened.load(Ordering::SeqCst) - self.freed.load(Ordering::SeqCst)
    }

    pub fn erased(&self) -> Vec<Vec<u8>> {
        self.erased.lock().clone()
    }

    fn can_open(&self, table: &[&str], name: &str) -> bool {
        table.contains(&name) && !name.ends_with("-Off") && !self.disabled.lock().contains(name)
    }

    fn record_erase(&self, buffer: &mut [u8]) {
        self.erased.lock().push(buffer.to_vec());
        buffer.zeroize();
    }

    // Each keypair gets a distinct, non-zero secret key
    fn next_secret_key(&self) -> [u8; KEY_LEN] {
        let generation = self.keypairs.fetch_add(1, Ordering::SeqCst) as u8;
        let mut sk = [0u8; KEY_LEN];
        sk.iter_mut()
            .enumerate()
            .for_each(|(i, b)| *b = generation.wrapping_mul(31).wrapping_add(i as u8) | 0x80);
        sk
    }
}

fn public_from_secret(sk: &[u8]) -> Vec<u8> {
    sk.iter().map(|b| b ^ 0x5A).collect()
}

fn digest(message: &[u8]) -> [u8; SIGNATURE_LEN] {
    let mut out = [0u8; SIGNATURE_LEN];
    for (i, byte) in message.iter().enumerate() {
        out[i % SIGNATURE_LEN] = out[i % SIGNATURE_LEN].rotate_left(3) ^ byte;
    }
    out[0] ^= message.len() as u8;
    out
}

fn check(flag: &AtomicBool) -> NativeResult {
    if flag.load(Ordering::SeqCst) { Err(NativeFailure) } else { Ok(()) }
}

// KEM

pub struct MockKems {
    state: Arc<MockState>,
}

impl MockKems {
    pub fn new(state: &Arc<MockState>) -> Self {
        Self { state: Arc::clone(state) }
    }
}

impl AlgorithmTable for MockKems {
    fn alg_count(&self) -> usize {
        KEM_NAMES.len()
    }

    fn alg_identifier(&self, index: usize) -> Option<&str> {
        self.state.identifiers_read.fetch_add(1, Ordering::SeqCst);
        KEM_NAMES.get(index).copied()
    }

    fn version(&self) -> &str {
        "mock 1.0"
    }
}

impl KemLibrary for MockKems {
    fn new_context(&self, name: &str) -> Option<Box<dyn KemContext>> {
        if !self.state.can_open(&KEM_NAMES, name) {
            return None;
        }
        self.state.opened.fetch_add(1, Ordering::SeqCst);
        Some(Box::new(MockKemContext { name: name.to_string(), state: Arc::clone(&self.state) }))
    }
}

struct MockKemContext {
    name: String,
    state: Arc<MockState>,
}

impl Drop for MockKemContext {
    fn drop(&mut self) {
        self.state.freed.fetch_add(1, Ordering::SeqCst);
    }
}

impl KemContext for MockKemContext {
    fn details(&self) -> KemDetails {
        KemDetails {
            name: self.name.clone(),
            version: "mock".to_string(),
            claimed_nist_level: 1,
            is_ind_cca: true,
            length_public_key: KEY_LEN,
            length_secret_key: KEY_LEN,
            length_ciphertext: CIPHERTEXT_LEN,
            length_shared_secret: SHARED_SECRET_LEN,
        }
    }

    fn keypair(&self, public_key: &mut [u8], secret_key: &mut [u8]) -> NativeResult {
        let sk = self.state.next_secret_key();
        // Written before the failure check so a failed call leaves a partial key behind
        secret_key.copy_from_slice(&sk);
        check(&self.state.fail_keypair)?;
        public_key.copy_from_slice(&public_from_secret(&sk));
        Ok(())
    }

    fn encapsulate(&self, ciphertext: &mut [u8], shared_secret: &mut [u8], public_key: &[u8]) -> NativeResult {
        check(&self.state.fail_encapsulate)?;
        ciphertext.copy_from_slice(public_key);
        for (i, b) in shared_secret.iter_mut().enumerate() {
            *b = public_key[i] ^ public_key[i + SHARED_SECRET_LEN];
        }
        Ok(())
    }

    fn decapsulate(&self, shared_secret: &mut [u8], ciphertext: &[u8], secret_key: &[u8]) -> NativeResult {
        check(&self.state.fail_decapsulate)?;
        // Implicit rejection: a foreign ciphertext yields an unrelated secret
        let mask = if ciphertext == public_from_secret(secret_key).as_slice() { 0x00 } else { 0xFF };
        for (i, b) in shared_secret.iter_mut().enumerate() {
            *b = ciphertext[i] ^ ciphertext[i + SHARED_SECRET_LEN] ^ mask;
        }
        Ok(())
    }

    fn secure_erase(&self, buffer: &mut [u8]) {
        self.state.record_erase(buffer);
    }
}

// Signatures

pub struct MockSigs {
    state: Arc<MockState>,
}

impl MockSigs {
    pub fn new(state: &Arc<MockState>) -> Self {
        Self { state: Arc::clone(state) }
    }
}

impl AlgorithmTable for MockSigs {
    fn alg_count(&self) -> usize {
        SIG_NAMES.len()
    }

    fn alg_identifier(&self, index: usize) -> Option<&str> {
        self.state.identifiers_read.fetch_add(1, Ordering::SeqCst);
        SIG_NAMES.get(index).copied()
    }

    fn version(&self) -> &str {
        "mock 1.0"
    }
}

impl SigLibrary for MockSigs {
    fn new_context(&self, name: &str) -> Option<Box<dyn SigContext>> {
        if !self.state.can_open(&SIG_NAMES, name) {
            return None;
        }
        self.state.opened.fetch_add(1, Ordering::SeqCst);
        Some(Box::new(MockSigContext { name: name.to_string(), state: Arc::clone(&self.state) }))
    }
}

struct MockSigContext {
    name: String,
    state: Arc<MockState>,
}

impl Drop for MockSigContext {
    fn drop(&mut self) {
        self.state.freed.fetch_add(1, Ordering::SeqCst);
    }
}

impl SigContext for MockSigContext {
    fn details(&self) -> SignatureDetails {
        SignatureDetails {
            name: self.name.clone(),
            version: "mock".to_string(),
            claimed_nist_level: 2,
            is_euf_cma: true,
            sig_with_ctx_support: false,
            length_public_key: KEY_LEN,
            length_secret_key: KEY_LEN,
            max_length_signature: MAX_SIGNATURE_LEN,
        }
    }

    fn keypair(&self, public_key: &mut [u8], secret_key: &mut [u8]) -> NativeResult {
        let sk = self.state.next_secret_key();
        secret_key.copy_from_slice(&sk);
        check(&self.state.fail_keypair)?;
        public_key.copy_from_slice(&public_from_secret(&sk));
        Ok(())
    }

    fn sign(&self, signature: &mut [u8], message: &[u8], secret_key: &[u8]) -> NativeResult<usize> {
        check(&self.state.fail_sign)?;
        let public_key = public_from_secret(secret_key);
        let digest = digest(message);
        for i in 0..SIGNATURE_LEN {
            signature[i] = digest[i] ^ public_key[i];
        }
        Ok(SIGNATURE_LEN)
    }

    fn verify(&self, message: &[u8], signature: &[u8], public_key: &[u8]) -> NativeResult {
        if signature.len() != SIGNATURE_LEN {
            return Err(NativeFailure);
        }
        let digest = digest(message);
        let valid = (0..SIGNATURE_LEN).all(|i| signature[i] == digest[i] ^ public_key[i]);
        if valid { Ok(()) } else { Err(NativeFailure) }
    }

    fn secure_erase(&self, buffer: &mut [u8]) {
        self.state.record_erase(buffer);
    }
}

/// Fresh registries over mock libraries sharing one `MockState`
pub fn mock_registries() -> (Arc<MockState>, KemRegistry, SigRegistry) {
    let state = MockState::new();
    let kem_library: Arc<dyn KemLibrary> = Arc::new(MockKems::new(&state));
    let sig_library: Arc<dyn SigLibrary> = Arc::new(MockSigs::new(&state));
    (state, KemRegistry::new(kem_library), SigRegistry::new(sig_library))
}
