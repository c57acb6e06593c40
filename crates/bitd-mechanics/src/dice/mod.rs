//! Six-sided dice pools and their results.
//!
//! Every roll in the game is a pool of d6s. A pool of zero or fewer dice is
//! still rolled: two dice, keeping the lowest.

pub mod pool;
pub mod roll;

pub use pool::DicePool;
pub use roll::RollResult;

/// Sides on every die.
pub const SIDES: u32 = 6;

/// Dice thrown for a pool with no dice.
pub const ZERO_POOL_DICE: u32 = 2;
