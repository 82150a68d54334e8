//! Key derivation engines.
//!
//! The encoder and verifier never call Argon2 directly; they go through
//! [`KeyDerivation`], so the primitive can be swapped (for instance a
//! hardware-backed implementation) without touching the PHC codec.

use argon2::{Algorithm, Argon2, Version};
use zeroize::Zeroizing;

use crate::error::{PagoError, Result};
use crate::params::Params;

/// The Argon2 version this crate links against (`0x13`, i.e. 19).
pub const ARGON2_VERSION: u32 = Version::V0x13 as u32;

/// Length of the derived key written by the encoder, in bytes.
pub const KEY_LEN: usize = 32;

/// A password-based key derivation primitive.
pub trait KeyDerivation {
    /// Version identifier written to and expected in the `v=` field.
    const VERSION: u32;

    /// Derive `output_len` bytes from `password` and `salt` under `params`.
    fn derive(
        &self,
        password: &[u8],
        salt: &[u8],
        params: &Params,
        output_len: usize,
    ) -> Result<Zeroizing<Vec<u8>>>;
}

/// Argon2id from the RustCrypto `argon2` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2id;

impl KeyDerivation for Argon2id {
    const VERSION: u32 = ARGON2_VERSION;

    fn derive(
        &self,
        password: &[u8],
        salt: &[u8],
        params: &Params,
        output_len: usize,
    ) -> Result<Zeroizing<Vec<u8>>> {
        let argon2_params = argon2::Params::new(
            params.memory_cost_kib(),
            params.time_cost(),
            u32::from(params.parallelism()),
            Some(output_len),
        )
        .map_err(|e| PagoError::DerivationFailed(format!("Argon2 params: {e}")))?;

        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, argon2_params);

        let mut output = Zeroizing::new(vec![0u8; output_len]);
        argon2
            .hash_password_into(password, salt, output.as_mut_slice())
            .map_err(|e| PagoError::DerivationFailed(format!("Argon2 hash: {e}")))?;

        Ok(output)
    }
}
