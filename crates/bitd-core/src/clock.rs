//! Bounded numeric trackers.
//!
//! Stress, trauma, and healing are all clocks. Each record only uses the
//! fields that matter to it (trauma has no meaningful value here, healing no
//! max), so every field defaults to zero when absent.

use serde::{Deserialize, Serialize};

use crate::lenient;

/// A numeric tracker with a value and optional bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clock {
    /// Current value.
    #[serde(default, deserialize_with = "lenient::int")]
    pub value: i32,
    /// Maximum value.
    #[serde(default, deserialize_with = "lenient::int")]
    pub max: i32,
    /// Minimum value (usually 0).
    #[serde(default, deserialize_with = "lenient::int")]
    pub min: i32,
}

impl Clock {
    /// Create a clock with a value and maximum, minimum 0.
    pub fn new(value: i32, max: i32) -> Self {
        Self { value, max, min: 0 }
    }

    /// Set the minimum value.
    pub fn with_min(mut self, min: i32) -> Self {
        self.min = min;
        self
    }

    /// The value raised to the minimum if it sits below it.
    pub fn floored_value(&self) -> i32 {
        self.value.max(self.min)
    }
}

impl std::fmt::Display for Clock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.value, self.max)
    }
}
