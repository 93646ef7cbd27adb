//! Cryptographic primitives for the credential engine.
//!
//! Provides key derivation, salt generation, and constant-time comparison.

pub mod compare;
pub mod kdf;

pub use compare::constant_time_eq;
pub use kdf::{KdfParams, derive_key, generate_salt};

/// Default length of the salt (16 bytes).
pub const DEFAULT_SALT_LEN: usize = 16;
/// Default length of the derived key (32 bytes / 256 bits).
pub const DEFAULT_KEY_LEN: usize = 32;
/// Default PBKDF2 iteration count.
pub const DEFAULT_ITERATIONS: u32 = 200_000;
