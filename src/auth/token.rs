// src/auth/token.rs
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Digest, Sha256};

/// 256 bits for the cookie-signing secret.
const SECRET_BYTES: usize = 32;
/// Six bytes encode to exactly eight base64 characters.
const REFERENCE_BYTES: usize = 6;

/// Per-process cookie secret, used when none is configured.
pub fn random_secret() -> String {
    random_token(&mut OsRng, SECRET_BYTES)
}

pub fn random_token<R: RngCore>(rng: &mut R, nbytes: usize) -> String {
    let mut raw = vec![0u8; nbytes];
    rng.fill_bytes(&mut raw);
    base64_url_nopad(&raw)
}

/// Short human-facing code for submitted requests, e.g. `RP-3FQ9ZK1X`.
pub fn generate_reference<R: RngCore>(rng: &mut R) -> String {
    let code = random_token(rng, REFERENCE_BYTES)
        .to_uppercase()
        .replace(['-', '_'], "X");
    format!("RP-{code}")
}

pub fn generate_reference_default() -> String {
    generate_reference(&mut OsRng)
}

/// SHA-256 over `secret`, a separator, then `payload`.
pub fn keyed_digest(secret: &str, payload: &str) -> [u8; 32] {
    Sha256::new()
        .chain_update(secret)
        .chain_update(b".")
        .chain_update(payload)
        .finalize()
        .into()
}

/// Compares two cookie tags without bailing out at the first differing byte.
pub fn tags_match(expected: &[u8], given: &[u8]) -> bool {
    expected.len() == given.len()
        && expected
            .iter()
            .zip(given)
            .fold(0u8, |acc, (x, y)| acc | (x ^ y))
            == 0
}

pub fn base64_url_nopad(bytes: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}

pub fn decode_base64_url(s: &str) -> Option<Vec<u8>> {
    URL_SAFE_NO_PAD.decode(s).ok()
}
