//! Serialized hash format for password credentials.
//!
//! A stored credential is a `$`-joined 4-tuple:
//! ```text
//! pbkdf2_sha256$<iterations>$<salt>$<derived key>
//! ```
//! Salt and derived key are text-encoded per the [`Encoding`] era.

use crate::error::CredentialError;

pub mod encoding;

pub use encoding::Encoding;

/// Number of `$`-separated fields in a stored hash.
pub const FIELD_COUNT: usize = 4;

/// Supported key-derivation algorithms.
///
/// A closed set today; unknown tokens are rejected rather than defaulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Pbkdf2Sha256,
}

impl Algorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Pbkdf2Sha256 => "pbkdf2_sha256",
        }
    }

    pub fn from_token(token: &str) -> Result<Self, CredentialError> {
        match token {
            "pbkdf2_sha256" => Ok(Algorithm::Pbkdf2Sha256),
            _ => Err(CredentialError::UnsupportedAlgorithm(token.to_string())),
        }
    }
}

/// Represents a parsed credential hash with decoded fields.
///
/// The derived key keeps whatever length the stored hash used; the verifier
/// re-derives exactly that many bytes.
#[derive(Debug)]
pub(crate) struct HashRecord {
    algorithm: Algorithm,
    iterations: u32,
    salt: Vec<u8>,
    derived_key: Vec<u8>,
}

impl HashRecord {
    pub fn new(algorithm: Algorithm, iterations: u32, salt: Vec<u8>, derived_key: Vec<u8>) -> Self {
        Self {
            algorithm,
            iterations,
            salt,
            derived_key,
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    pub fn salt(&self) -> &[u8] {
        &self.salt
    }

    pub fn derived_key(&self) -> &[u8] {
        &self.derived_key
    }
}

/// Parses a stored hash string into a [`HashRecord`].
///
/// Structural checks run before any decoding: field count, algorithm token,
/// decimal iteration count, and field presence. Decoding failures of the
/// salt or derived-key fields surface last.
///
/// # Errors
///
/// Returns [`CredentialError::MalformedHash`] for any structural or decoding
/// problem and [`CredentialError::UnsupportedAlgorithm`] for an unknown
/// algorithm token. A malformed stored hash is never reported as a wrong
/// password.
pub(crate) fn parse(hash: &str, encoding: Encoding) -> Result<HashRecord, CredentialError> {
    let fields: Vec<&str> = hash.split('$').collect();
    if fields.len() != FIELD_COUNT {
        return Err(CredentialError::MalformedHash(format!(
            "expected {FIELD_COUNT} '$'-separated fields, found {}",
            fields.len()
        )));
    }

    let algorithm = Algorithm::from_token(fields[0])?;

    let iterations: u32 = fields[1].parse().map_err(|_| {
        CredentialError::MalformedHash("iteration count is not a decimal integer".to_string())
    })?;

    if fields[2].is_empty() {
        return Err(CredentialError::MalformedHash("empty salt field".to_string()));
    }
    if fields[3].is_empty() {
        return Err(CredentialError::MalformedHash(
            "empty derived key field".to_string(),
        ));
    }

    let salt = encoding.decode(fields[2])?;
    let derived_key = encoding.decode(fields[3])?;

    Ok(HashRecord::new(algorithm, iterations, salt, derived_key))
}

/// Serializes a [`HashRecord`] into the stored text form.
pub(crate) fn serialize(record: &HashRecord, encoding: Encoding) -> String {
    format!(
        "{}${}${}${}",
        record.algorithm().as_str(),
        record.iterations(),
        encoding.encode(record.salt()),
        encoding.encode(record.derived_key()),
    )
}
