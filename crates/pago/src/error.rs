//! Error types for Pago.
//!
//! Every failure is a distinct variant so callers can tell corrupt or
//! foreign data apart from a wrong password (which is `Ok(false)`, not an
//! error). Passwords and key material never appear in error messages.

/// Errors produced while hashing or verifying.
#[derive(Debug, thiserror::Error)]
pub enum PagoError {
    #[error("Random source unavailable: {0}")]
    RandomSource(String),

    #[error("Malformed encoded hash: expected 6 '$'-separated fields, found {fields}")]
    MalformedFormat { fields: usize },

    #[error("Unsupported algorithm: {0:?}")]
    UnsupportedAlgorithm(String),

    #[error("Incompatible version: {0:?}")]
    IncompatibleVersion(String),

    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    #[error("Salt decode error: {0}")]
    SaltDecode(String),

    #[error("Hash decode error: {0}")]
    HashDecode(String),

    #[error("Key derivation failed: {0}")]
    DerivationFailed(String),
}

/// Convenience Result alias.
pub type Result<T> = std::result::Result<T, PagoError>;
