//! Secure salt generation.
//!
//! Uses the operating system's cryptographic random source via `rand`.
//! Reads go through the fallible `try_fill_bytes`, so an unavailable
//! entropy source is reported instead of yielding a zeroed buffer.

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

use crate::error::{PagoError, Result};

/// Salt length used by the encoder, in bytes.
pub const SALT_LEN: usize = 16;

/// Generate `length` random bytes from the OS random source.
pub fn generate_salt(length: usize) -> Result<Vec<u8>> {
    generate_salt_with(&mut OsRng, length)
}

/// Generate `length` random bytes from the given cryptographic RNG.
///
/// Either the whole buffer is filled or an error is returned.
pub fn generate_salt_with<R>(rng: &mut R, length: usize) -> Result<Vec<u8>>
where
    R: RngCore + CryptoRng + ?Sized,
{
    let mut salt = vec![0u8; length];
    rng.try_fill_bytes(&mut salt).map_err(|e| {
        log::warn!("random source failed while generating a {length}-byte salt: {e}");
        PagoError::RandomSource(e.to_string())
    })?;
    Ok(salt)
}
