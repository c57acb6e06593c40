//! The built-in evaluator: throw d6s and read the highest.

use std::sync::Mutex;

use async_trait::async_trait;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::dice::DicePool;
use crate::dispatch::{RollEvaluator, RollOutcome};
use crate::error::{MechError, MechResult};
use crate::resolution::HighestDie;
use crate::roll::RollRequest;

/// Rolls the requested pool with a shared RNG.
pub struct DiceRollEvaluator {
    rng: Mutex<StdRng>,
    rules: HighestDie,
}

impl DiceRollEvaluator {
    /// An evaluator seeded from the operating system.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// A reproducible evaluator.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            rng: Mutex::new(rng),
            rules: HighestDie::default(),
        }
    }
}

impl Default for DiceRollEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RollEvaluator for DiceRollEvaluator {
    async fn evaluate(&self, request: RollRequest) -> MechResult<RollOutcome> {
        let pool = DicePool::for_count(request.dice_count);
        let roll = {
            let mut rng = self
                .rng
                .lock()
                .map_err(|_| MechError::Evaluation("dice RNG lock poisoned".to_string()))?;
            pool.roll(&mut rng)
        };
        let outcome = self.rules.resolve(&roll);
        tracing::debug!(%roll, %outcome, "dice rolled");

        Ok(RollOutcome {
            request,
            roll,
            outcome,
        })
    }
}
