//! PHC string encoding of Argon2id hashes.
//!
//! Wire format:
//! ```text
//! $argon2id$v=<version>$m=<memory KiB>,t=<time cost>,p=<parallelism>$<salt>$<hash>
//! ```
//!
//! Salt and hash use the standard base64 alphabet without padding.
//! Parsing checks the fields in order and stops at the first violation,
//! each field mapping to its own [`PagoError`] variant.

use std::fmt;
use std::str::FromStr;

use base64::engine::general_purpose::STANDARD_NO_PAD;

use crate::crypto::derivation::ARGON2_VERSION;
use crate::error::{PagoError, Result};
use crate::params::Params;

/// Algorithm identifier, the first field of the string.
pub const ALGORITHM: &str = "argon2id";

const DELIMITER: char = '$';

/// A parsed or freshly produced Argon2id hash record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedHash {
    version: u32,
    params: Params,
    salt: Vec<u8>,
    hash: Vec<u8>,
}

impl EncodedHash {
    pub(crate) fn new(version: u32, params: Params, salt: Vec<u8>, hash: Vec<u8>) -> Self {
        Self {
            version,
            params,
            salt,
            hash,
        }
    }

    /// Parse a PHC string produced for [`ARGON2_VERSION`].
    pub fn parse(encoded: &str) -> Result<Self> {
        Self::parse_with_version(encoded, ARGON2_VERSION)
    }

    /// Parse a PHC string, requiring its `v=` field to equal `expected_version`.
    pub fn parse_with_version(encoded: &str, expected_version: u32) -> Result<Self> {
        let fields: Vec<&str> = encoded.split(DELIMITER).collect();
        let ["", algorithm, version, params, salt, hash] = fields.as_slice() else {
            return Err(PagoError::MalformedFormat {
                fields: fields.len(),
            });
        };

        if *algorithm != ALGORITHM {
            return Err(PagoError::UnsupportedAlgorithm((*algorithm).to_string()));
        }

        match parse_version(version) {
            Some(v) if v == expected_version => {}
            _ => return Err(PagoError::IncompatibleVersion((*version).to_string())),
        }

        let params = parse_params(params).ok_or_else(|| {
            PagoError::InvalidParameters(format!("expected m=<u32>,t=<u32>,p=<u8>, got {params:?}"))
        })?;

        let salt = decode_b64(salt).map_err(|e| PagoError::SaltDecode(e.to_string()))?;
        let hash = decode_b64(hash).map_err(|e| PagoError::HashDecode(e.to_string()))?;

        Ok(Self::new(expected_version, params, salt, hash))
    }

    /// Algorithm tag, always `argon2id`.
    pub fn algorithm(&self) -> &'static str {
        ALGORITHM
    }

    /// Argon2 version from the `v=` field.
    pub fn version(&self) -> u32 {
        self.version
    }

    /// Cost parameters the hash was produced with.
    pub fn params(&self) -> Params {
        self.params
    }

    /// Raw salt bytes.
    pub fn salt(&self) -> &[u8] {
        &self.salt
    }

    /// Raw derived key bytes.
    pub fn hash(&self) -> &[u8] {
        &self.hash
    }
}

impl fmt::Display for EncodedHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "${ALGORITHM}$v={}${}${}${}",
            self.version,
            self.params,
            encode_b64(&self.salt),
            encode_b64(&self.hash)
        )
    }
}

impl FromStr for EncodedHash {
    type Err = PagoError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

fn encode_b64(bytes: &[u8]) -> String {
    base64::Engine::encode(&STANDARD_NO_PAD, bytes)
}

fn decode_b64(text: &str) -> std::result::Result<Vec<u8>, base64::DecodeError> {
    base64::Engine::decode(&STANDARD_NO_PAD, text)
}

// ── Field parsers ─────────────────────────────────────────────────────────────

fn parse_version(field: &str) -> Option<u32> {
    parse_number(field.strip_prefix("v=")?)
}

fn parse_params(field: &str) -> Option<Params> {
    let mut pairs = field.split(',');
    let memory_cost_kib = parse_number(pairs.next()?.strip_prefix("m=")?)?;
    let time_cost = parse_number(pairs.next()?.strip_prefix("t=")?)?;
    let parallelism = parse_number(pairs.next()?.strip_prefix("p=")?)?;
    if pairs.next().is_some() {
        return None;
    }
    Some(Params::from_parts(memory_cost_kib, time_cost, parallelism))
}

/// Plain decimal digits only: no sign, no whitespace, no overflow.
fn parse_number<T: FromStr>(digits: &str) -> Option<T> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}
