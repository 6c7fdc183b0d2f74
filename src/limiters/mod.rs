//! Slope limiters and the per-wave-family limiter table.
//!
//! Limiters control oscillations near discontinuities while preserving
//! second-order accuracy in smooth regions. Each wave family of the
//! hyperbolic system gets its own limiter selection; the resulting table is
//! built and validated once during solver setup and passed to the kernels
//! unchanged afterwards.

use crate::error::{SetupError, SetupResult};
use crate::types::WaveIndex;

/// Built-in flux limiters with their classic numeric codes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LimiterKind {
    /// No limiting (code 0); the correction wave is used at full strength.
    #[default]
    None,
    /// Minmod limiter (code 1).
    Minmod,
    /// Superbee limiter (code 2).
    Superbee,
    /// Van Leer limiter (code 3).
    VanLeer,
    /// Monotonized centered limiter (code 4).
    Mc,
}

impl LimiterKind {
    /// All limiters in code order.
    pub const ALL: [LimiterKind; 5] = [
        LimiterKind::None,
        LimiterKind::Minmod,
        LimiterKind::Superbee,
        LimiterKind::VanLeer,
        LimiterKind::Mc,
    ];

    /// Resolve a numeric limiter code.
    pub fn from_code(code: u8) -> SetupResult<Self> {
        match code {
            0 => Ok(LimiterKind::None),
            1 => Ok(LimiterKind::Minmod),
            2 => Ok(LimiterKind::Superbee),
            3 => Ok(LimiterKind::VanLeer),
            4 => Ok(LimiterKind::Mc),
            other => Err(SetupError::UnknownLimiterCode(other)),
        }
    }

    /// The numeric code handed to compiled kernels.
    pub const fn code(self) -> u8 {
        match self {
            LimiterKind::None => 0,
            LimiterKind::Minmod => 1,
            LimiterKind::Superbee => 2,
            LimiterKind::VanLeer => 3,
            LimiterKind::Mc => 4,
        }
    }

    /// Human-readable name for debugging and logging.
    pub const fn name(self) -> &'static str {
        match self {
            LimiterKind::None => "none",
            LimiterKind::Minmod => "minmod",
            LimiterKind::Superbee => "superbee",
            LimiterKind::VanLeer => "vanleer",
            LimiterKind::Mc => "mc",
        }
    }

    /// Evaluate the limiter function phi(theta).
    ///
    /// `theta` is the ratio of the upwind to the local wave strength.
    /// All limiters except `None` vanish for `theta <= 0` and return 1 at
    /// `theta = 1`, so smooth data passes through unlimited.
    pub fn phi(self, theta: f64) -> f64 {
        match self {
            LimiterKind::None => 1.0,
            LimiterKind::Minmod => theta.min(1.0).max(0.0),
            LimiterKind::Superbee => (2.0 * theta).min(1.0).max(theta.min(2.0)).max(0.0),
            LimiterKind::VanLeer => (theta + theta.abs()) / (1.0 + theta.abs()),
            LimiterKind::Mc => (0.5 * (1.0 + theta)).min(2.0).min(2.0 * theta).max(0.0),
        }
    }
}

/// Per-wave-family limiter table.
///
/// Built once during setup from the configured limiter list: a single
/// entry broadcasts to every wave family; a list of exactly `num_waves`
/// entries is taken as-is; any other length is rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LimiterTable {
    entries: Vec<LimiterKind>,
}

impl LimiterTable {
    /// Build a table for `num_waves` wave families.
    pub fn build(limiters: &[LimiterKind], num_waves: usize) -> SetupResult<Self> {
        let entries = match limiters.len() {
            1 => vec![limiters[0]; num_waves],
            n if n == num_waves => limiters.to_vec(),
            n => {
                return Err(SetupError::InvalidLimiterTable {
                    expected: num_waves,
                    actual: n,
                })
            }
        };
        Ok(Self { entries })
    }

    /// Build a table from numeric limiter codes.
    pub fn from_codes(codes: &[u8], num_waves: usize) -> SetupResult<Self> {
        let kinds: Vec<LimiterKind> = codes
            .iter()
            .map(|&c| LimiterKind::from_code(c))
            .collect::<SetupResult<_>>()?;
        Self::build(&kinds, num_waves)
    }

    /// Number of wave families.
    pub fn num_waves(&self) -> usize {
        self.entries.len()
    }

    /// The limiter for one wave family.
    pub fn get(&self, wave: WaveIndex) -> LimiterKind {
        self.entries[wave.as_usize()]
    }

    /// The full entry list.
    pub fn entries(&self) -> &[LimiterKind] {
        &self.entries
    }

    /// Numeric codes in wave-family order, as handed to compiled kernels.
    pub fn codes(&self) -> Vec<u8> {
        self.entries.iter().map(|k| k.code()).collect()
    }
}
