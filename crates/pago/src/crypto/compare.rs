//! Constant-time comparison of derived key material.

use subtle::ConstantTimeEq;

/// Compare two byte strings without short-circuiting on content.
///
/// Inputs of different length compare unequal straight away; the length
/// of a stored hash is public since it is readable from the encoded string.
/// For equal lengths every byte is visited regardless of where the first
/// difference sits.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.ct_eq(b).into()
}
