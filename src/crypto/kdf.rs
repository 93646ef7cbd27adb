use getrandom::fill;
use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use zeroize::Zeroizing;

use super::{DEFAULT_ITERATIONS, DEFAULT_KEY_LEN, DEFAULT_SALT_LEN};
use crate::error::CredentialError;

#[derive(Debug, Clone, Copy)]
pub struct KdfParams {
    iterations: u32,
    key_len: usize,
    salt_len: usize,
}

impl Default for KdfParams {
    fn default() -> Self {
        Self {
            // default work factor
            iterations: DEFAULT_ITERATIONS,
            // default derived key length
            key_len: DEFAULT_KEY_LEN,
            // default salt length
            salt_len: DEFAULT_SALT_LEN,
        }
    }
}

impl KdfParams {
    pub fn new(iterations: u32, key_len: usize, salt_len: usize) -> anyhow::Result<Self> {
        let params = Self {
            iterations,
            key_len,
            salt_len,
        };
        params.validate()?;
        Ok(params)
    }

    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    pub fn key_len(&self) -> usize {
        self.key_len
    }

    pub fn salt_len(&self) -> usize {
        self.salt_len
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.iterations < 1 {
            anyhow::bail!("pbkdf2 iteration count must be >= 1");
        }
        if self.key_len < 1 {
            anyhow::bail!("derived key length must be >= 1 byte");
        }
        if self.salt_len < 8 {
            anyhow::bail!("salt length must be >= 8 bytes");
        }
        Ok(())
    }
}

/// Generate a random salt of the given length.
pub fn generate_salt(len: usize) -> Result<Vec<u8>, CredentialError> {
    let mut salt = vec![0u8; len];
    fill(&mut salt).map_err(|_| CredentialError::RandomnessUnavailable)?;
    Ok(salt)
}

/// Derive `key_len` bytes from `password` and `salt` via PBKDF2-HMAC-SHA-256.
pub fn derive_key(
    password: &str,
    salt: &[u8],
    iterations: u32,
    key_len: usize,
) -> Zeroizing<Vec<u8>> {
    let mut key = Zeroizing::new(vec![0u8; key_len]);
    pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, iterations, &mut key);
    key
}
