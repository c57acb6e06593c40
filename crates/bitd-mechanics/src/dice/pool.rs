//! Dice pool construction and rolling.

use rand::Rng;
use rand::rngs::StdRng;

use super::roll::RollResult;
use super::{SIDES, ZERO_POOL_DICE};

/// A number of d6s to roll together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DicePool {
    /// How many dice are thrown.
    pub count: u32,
    /// True when the pool came from a zero or negative dice count, so the
    /// lowest die is read instead of the highest.
    pub keep_lowest: bool,
}

impl DicePool {
    /// Build the pool for a dice count, applying the zero-dice rule.
    pub fn for_count(dice_count: i32) -> Self {
        match u32::try_from(dice_count) {
            Ok(count) if count > 0 => Self {
                count,
                keep_lowest: false,
            },
            _ => Self {
                count: ZERO_POOL_DICE,
                keep_lowest: true,
            },
        }
    }

    /// Roll every die in the pool using the given RNG.
    pub fn roll(&self, rng: &mut StdRng) -> RollResult {
        let values = (0..self.count)
            .map(|_| rng.random_range(1..=SIDES))
            .collect();
        RollResult {
            values,
            keep_lowest: self.keep_lowest,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn positive_count_rolls_that_many() {
        let pool = DicePool::for_count(3);
        assert_eq!(pool.count, 3);
        assert!(!pool.keep_lowest);
    }

    #[test]
    fn zero_and_negative_roll_two_keep_lowest() {
        for count in [0, -1, -4] {
            let pool = DicePool::for_count(count);
            assert_eq!(pool.count, 2);
            assert!(pool.keep_lowest);
        }
    }

    #[test]
    fn roll_produces_valid_values() {
        let mut rng = StdRng::seed_from_u64(42);
        let result = DicePool::for_count(10).roll(&mut rng);
        assert_eq!(result.values.len(), 10);
        assert!(result.values.iter().all(|v| (1..=6).contains(v)));
    }

    #[test]
    fn roll_deterministic_with_seed() {
        let pool = DicePool::for_count(4);
        let mut rng1 = StdRng::seed_from_u64(99);
        let mut rng2 = StdRng::seed_from_u64(99);
        assert_eq!(pool.roll(&mut rng1), pool.roll(&mut rng2));
    }
}
