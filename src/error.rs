use std::fmt;

#[derive(Debug)]
pub enum CredentialError {
    MalformedHash(String),
    UnsupportedAlgorithm(String),
    RandomnessUnavailable,
}

impl fmt::Display for CredentialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialError::MalformedHash(detail) => {
                write!(f, "malformed password hash: {detail}")
            }
            CredentialError::UnsupportedAlgorithm(token) => {
                write!(f, "unsupported hash algorithm '{token}'")
            }
            CredentialError::RandomnessUnavailable => {
                write!(f, "OS random generator unavailable")
            }
        }
    }
}

impl std::error::Error for CredentialError {}
