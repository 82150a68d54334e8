//! Cryptographic building blocks for Pago.
//!
//! This module provides:
//! - Salt generation from a cryptographically secure random source
//! - The pluggable key-derivation engine (Argon2id by default)
//! - Constant-time comparison of derived keys

pub mod compare;
pub mod derivation;
pub mod random;
