//! Reading a d6 pool.
//!
//! The deciding die (highest, or lowest for a zero-dice pool) sets the
//! result: 1-3 failure, 4-5 partial success, 6 full success. Two or more
//! sixes in a real pool is a critical.

use serde::{Deserialize, Serialize};

use crate::dice::{RollResult, SIDES};

/// The result of reading a roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Multiple sixes.
    Critical,
    /// A six.
    Success,
    /// A four or five: success with a cost.
    Partial,
    /// One to three.
    Failure,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Critical => write!(f, "Critical Success"),
            Self::Success => write!(f, "Full Success"),
            Self::Partial => write!(f, "Partial Success"),
            Self::Failure => write!(f, "Failure"),
        }
    }
}

/// Thresholds for highest-die resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighestDie {
    /// Minimum value for a partial success.
    pub partial_min: u32,
    /// Minimum value for a full success.
    pub success_min: u32,
}

impl Default for HighestDie {
    fn default() -> Self {
        Self {
            partial_min: 4,
            success_min: SIDES,
        }
    }
}

impl HighestDie {
    /// Resolve a roll by its deciding die.
    pub fn resolve(&self, roll: &RollResult) -> Outcome {
        let deciding = roll.deciding_value();

        if !roll.keep_lowest && roll.count_of(SIDES) >= 2 {
            Outcome::Critical
        } else if deciding >= self.success_min {
            Outcome::Success
        } else if deciding >= self.partial_min {
            Outcome::Partial
        } else {
            Outcome::Failure
        }
    }
}
