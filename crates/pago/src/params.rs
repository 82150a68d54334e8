//! Argon2id cost parameters.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{PagoError, Result};

/// Default memory cost: 64 MiB.
pub const DEFAULT_MEMORY_COST_KIB: u32 = 64 * 1024;
/// Default number of passes.
pub const DEFAULT_TIME_COST: u32 = 4;
/// Default number of lanes.
pub const DEFAULT_PARALLELISM: u8 = 1;

/// Argon2 needs at least this many KiB per lane.
pub const MIN_MEMORY_KIB_PER_LANE: u32 = 8;

/// Cost parameters embedded in every encoded hash.
///
/// Values built through [`Params::new`] (or deserialized) are validated.
/// Values parsed out of a stored hash are taken as-is and left to the
/// derivation engine to accept or reject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ParamsConfig")]
pub struct Params {
    memory_cost_kib: u32,
    time_cost: u32,
    parallelism: u8,
}

impl Params {
    /// Build a validated parameter set.
    ///
    /// All three values must be strictly positive, and the memory cost must
    /// cover Argon2's floor of 8 KiB per lane.
    pub fn new(memory_cost_kib: u32, time_cost: u32, parallelism: u8) -> Result<Self> {
        if time_cost == 0 {
            return Err(PagoError::InvalidParameters(
                "time cost must be at least 1".into(),
            ));
        }
        if parallelism == 0 {
            return Err(PagoError::InvalidParameters(
                "parallelism must be at least 1".into(),
            ));
        }
        let floor = MIN_MEMORY_KIB_PER_LANE * u32::from(parallelism);
        if memory_cost_kib < floor {
            return Err(PagoError::InvalidParameters(format!(
                "memory cost {memory_cost_kib} KiB is below the minimum of {floor} KiB for {parallelism} lane(s)"
            )));
        }
        Ok(Self::from_parts(memory_cost_kib, time_cost, parallelism))
    }

    pub(crate) const fn from_parts(memory_cost_kib: u32, time_cost: u32, parallelism: u8) -> Self {
        Self {
            memory_cost_kib,
            time_cost,
            parallelism,
        }
    }

    /// Memory cost in KiB (`m=`).
    pub fn memory_cost_kib(&self) -> u32 {
        self.memory_cost_kib
    }

    /// Number of passes (`t=`).
    pub fn time_cost(&self) -> u32 {
        self.time_cost
    }

    /// Number of lanes (`p=`).
    pub fn parallelism(&self) -> u8 {
        self.parallelism
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::from_parts(
            DEFAULT_MEMORY_COST_KIB,
            DEFAULT_TIME_COST,
            DEFAULT_PARALLELISM,
        )
    }
}

/// Writes the PHC parameter field, `m=<mem>,t=<time>,p=<par>`.
impl fmt::Display for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "m={},t={},p={}",
            self.memory_cost_kib, self.time_cost, self.parallelism
        )
    }
}

/// Deserialization form of [`Params`]. Missing fields take the defaults.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ParamsConfig {
    memory_cost_kib: u32,
    time_cost: u32,
    parallelism: u8,
}

impl Default for ParamsConfig {
    fn default() -> Self {
        Self {
            memory_cost_kib: DEFAULT_MEMORY_COST_KIB,
            time_cost: DEFAULT_TIME_COST,
            parallelism: DEFAULT_PARALLELISM,
        }
    }
}

impl TryFrom<ParamsConfig> for Params {
    type Error = PagoError;

    fn try_from(config: ParamsConfig) -> Result<Self> {
        Params::new(config.memory_cost_kib, config.time_cost, config.parallelism)
    }
}
