//! Pago — Argon2id password hashing in the PHC string format.
//!
//! Produces self-describing hash strings such as
//! `$argon2id$v=19$m=65536,t=4,p=1$<salt>$<hash>` and verifies candidate
//! passwords against them in constant time. Every string carries the
//! parameters it was made with, so verification needs no configuration.
//!
//! ```no_run
//! let stored = pago::hash("correct horse battery staple", None)?;
//! assert!(pago::verify("correct horse battery staple", &stored)?);
//! assert!(!pago::verify("Tr0ub4dor&3", &stored)?);
//! # Ok::<(), pago::PagoError>(())
//! ```

pub mod crypto;
pub mod encoded;
pub mod error;
pub mod hasher;
pub mod params;

// Re-export primary types
pub use crypto::derivation::{Argon2id, KeyDerivation, ARGON2_VERSION, KEY_LEN};
pub use crypto::random::{generate_salt, SALT_LEN};
pub use encoded::EncodedHash;
pub use error::{PagoError, Result};
pub use hasher::Hasher;
pub use params::Params;

/// Release version of this crate (not the Argon2 version).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The parameters used when none are given: 64 MiB, 4 passes, 1 lane.
pub fn default_params() -> Params {
    Params::default()
}

/// Hash `password` with Argon2id, using `params` or the defaults.
pub fn hash(password: impl AsRef<[u8]>, params: Option<Params>) -> Result<String> {
    Hasher::new(params.unwrap_or_default()).hash(password.as_ref())
}

/// Verify `password` against a PHC string produced by [`hash`].
///
/// A wrong password is `Ok(false)`. Errors mean the string itself is
/// malformed, foreign, or cannot be derived from.
pub fn verify(password: impl AsRef<[u8]>, encoded: &str) -> Result<bool> {
    Hasher::new(Params::default()).verify(password.as_ref(), encoded)
}
