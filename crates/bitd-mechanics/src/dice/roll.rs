//! Dice roll results.

use serde::{Deserialize, Serialize};

/// The faces rolled by a pool.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollResult {
    /// Individual die values, in roll order.
    pub values: Vec<u32>,
    /// Read the lowest die instead of the highest.
    pub keep_lowest: bool,
}

impl RollResult {
    /// The highest single die value, or 0 if empty.
    pub fn highest(&self) -> u32 {
        self.values.iter().copied().max().unwrap_or(0)
    }

    /// The lowest single die value, or 0 if empty.
    pub fn lowest(&self) -> u32 {
        self.values.iter().copied().min().unwrap_or(0)
    }

    /// The die that decides the outcome.
    pub fn deciding_value(&self) -> u32 {
        if self.keep_lowest {
            self.lowest()
        } else {
            self.highest()
        }
    }

    /// Count dice showing exactly the given face.
    pub fn count_of(&self, face: u32) -> usize {
        self.values.iter().filter(|v| **v == face).count()
    }

    /// Number of dice in the result.
    pub fn count(&self) -> usize {
        self.values.len()
    }
}

impl std::fmt::Display for RollResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let values: Vec<String> = self.values.iter().map(u32::to_string).collect();
        let read = if self.keep_lowest { "lowest" } else { "highest" };
        write!(f, "[{}] {read} {}", values.join(", "), self.deciding_value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(values: &[u32], keep_lowest: bool) -> RollResult {
        RollResult {
            values: values.to_vec(),
            keep_lowest,
        }
    }

    #[test]
    fn highest_and_lowest() {
        let r = result(&[3, 6, 1], false);
        assert_eq!(r.highest(), 6);
        assert_eq!(r.lowest(), 1);
        assert_eq!(r.deciding_value(), 6);
        assert_eq!(result(&[3, 6, 1], true).deciding_value(), 1);
    }

    #[test]
    fn empty_result() {
        let r = RollResult::default();
        assert_eq!(r.highest(), 0);
        assert_eq!(r.lowest(), 0);
        assert_eq!(r.count(), 0);
    }

    #[test]
    fn count_of_face() {
        let r = result(&[6, 2, 6, 6], false);
        assert_eq!(r.count_of(6), 3);
        assert_eq!(r.count_of(5), 0);
    }

    #[test]
    fn display() {
        assert_eq!(result(&[3, 5], false).to_string(), "[3, 5] highest 5");
        assert_eq!(result(&[3, 5], true).to_string(), "[3, 5] lowest 3");
    }
}
