//! Growth stages of a crop cycle.

use std::fmt;

use serde::Serialize;

/// Three-stage partition of a crop cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum GrowthStage {
    /// Establishment, from sowing until canopy development.
    Initial = 0,
    /// Full canopy through flowering and yield formation.
    Mid = 1,
    /// Maturation and senescence.
    Late = 2,
}

impl GrowthStage {
    /// All three stages in cycle order.
    pub const ALL: [GrowthStage; 3] = [Self::Initial, Self::Mid, Self::Late];

    /// Returns the zero-based index of this stage (matches the `#[repr(u8)]` discriminant).
    pub fn as_index(self) -> usize {
        self as usize
    }

    /// Lower-case lookup key (`"initial"`, `"mid"`, `"late"`).
    pub fn key(self) -> &'static str {
        match self {
            Self::Initial => "initial",
            Self::Mid => "mid",
            Self::Late => "late",
        }
    }

    /// Capitalised display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Initial => "Initial",
            Self::Mid => "Mid",
            Self::Late => "Late",
        }
    }
}

impl fmt::Display for GrowthStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
