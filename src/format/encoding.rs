//! Field encodings for the two hash-format eras.

use std::borrow::Cow;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;

use crate::error::CredentialError;

/// Encoding era of a stored hash.
///
/// The era is not recorded inside the hash string itself; callers track it
/// per stored record and pass it in at verification time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Encoding {
    /// Lowercase hex fields, as issued before the base64 migration.
    Legacy,
    /// Standard base64 with padding.
    #[default]
    Current,
}

impl Encoding {
    /// Maps the caller-facing `legacy` flag onto an era.
    pub fn from_legacy_flag(legacy: bool) -> Self {
        if legacy { Self::Legacy } else { Self::Current }
    }

    pub fn encode(&self, bytes: &[u8]) -> String {
        match self {
            Encoding::Legacy => hex::encode(bytes),
            Encoding::Current => BASE64.encode(bytes),
        }
    }

    pub fn decode(&self, field: &str) -> Result<Vec<u8>, CredentialError> {
        match self {
            Encoding::Legacy => hex::decode(field)
                .map_err(|_| CredentialError::MalformedHash("invalid hex encoding".to_string())),
            Encoding::Current => BASE64
                .decode(field)
                .map_err(|_| CredentialError::MalformedHash("invalid base64 encoding".to_string())),
        }
    }

    /// Salt input handed to the KDF for this era.
    ///
    /// The legacy scheme fed the salt's *hex text* into the KDF instead of
    /// the raw bytes. That is a compatibility shim for already-issued
    /// hashes, not a convention to extend to new eras.
    pub fn kdf_salt<'a>(&self, salt: &'a [u8]) -> Cow<'a, [u8]> {
        match self {
            Encoding::Legacy => Cow::Owned(hex::encode(salt).into_bytes()),
            Encoding::Current => Cow::Borrowed(salt),
        }
    }
}
