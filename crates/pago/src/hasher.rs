//! Password hashing and verification.
//!
//! A [`Hasher`] pairs a key derivation engine with the cost parameters used
//! for new hashes. Verification ignores those parameters and re-derives with
//! whatever the stored string embeds, so a hasher can check hashes produced
//! under older settings.

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

use crate::crypto::compare::constant_time_eq;
use crate::crypto::derivation::{Argon2id, KeyDerivation, KEY_LEN};
use crate::crypto::random::{generate_salt_with, SALT_LEN};
use crate::encoded::EncodedHash;
use crate::error::Result;
use crate::params::Params;

/// Encoder and verifier for PHC-formatted hashes.
#[derive(Debug, Clone, Default)]
pub struct Hasher<E = Argon2id> {
    engine: E,
    params: Params,
}

impl Hasher<Argon2id> {
    /// Create an Argon2id hasher producing hashes with `params`.
    pub fn new(params: Params) -> Self {
        Self::with_engine(Argon2id, params)
    }
}

impl<E: KeyDerivation> Hasher<E> {
    /// Create a hasher over a custom derivation engine.
    pub fn with_engine(engine: E, params: Params) -> Self {
        Self { engine, params }
    }

    /// Parameters used for new hashes.
    pub fn params(&self) -> Params {
        self.params
    }

    /// Hash `password` under a fresh salt from the OS random source.
    pub fn hash(&self, password: &[u8]) -> Result<String> {
        self.hash_with_rng(&mut OsRng, password)
    }

    /// Hash `password` under a fresh salt drawn from `rng`.
    pub fn hash_with_rng<R>(&self, rng: &mut R, password: &[u8]) -> Result<String>
    where
        R: RngCore + CryptoRng + ?Sized,
    {
        log::debug!("hashing password with {}", self.params);

        let salt = generate_salt_with(rng, SALT_LEN)?;
        let key = self
            .engine
            .derive(password, &salt, &self.params, KEY_LEN)?;

        Ok(EncodedHash::new(E::VERSION, self.params, salt, key.to_vec()).to_string())
    }

    /// Check `password` against a stored PHC string.
    ///
    /// Returns `Ok(false)` when the password does not match; errors are
    /// reserved for strings that cannot be parsed or derived from.
    pub fn verify(&self, password: &[u8], encoded: &str) -> Result<bool> {
        let stored = self.decode(encoded)?;
        let params = stored.params();
        log::debug!(
            "verifying password against {}-byte hash with {params}",
            stored.hash().len()
        );

        let candidate = self
            .engine
            .derive(password, stored.salt(), &params, stored.hash().len())?;

        Ok(constant_time_eq(candidate.as_slice(), stored.hash()))
    }

    /// Whether a stored hash was produced with parameters other than this
    /// hasher's, and should be replaced on the next successful login.
    pub fn needs_rehash(&self, encoded: &str) -> Result<bool> {
        let stored = self.decode(encoded)?;
        Ok(stored.params() != self.params)
    }

    fn decode(&self, encoded: &str) -> Result<EncodedHash> {
        EncodedHash::parse_with_version(encoded, E::VERSION).map_err(|e| {
            log::debug!("rejecting encoded hash: {e}");
            e
        })
    }
}
