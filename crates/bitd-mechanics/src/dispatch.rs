//! Hands finished roll requests to whatever evaluates them.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;

use crate::dice::RollResult;
use crate::error::MechResult;
use crate::resolution::Outcome;
use crate::roll::RollRequest;

/// What an evaluator reports back for a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RollOutcome {
    /// The request that was evaluated.
    pub request: RollRequest,
    /// The dice thrown.
    pub roll: RollResult,
    /// How the dice read.
    pub outcome: Outcome,
}

/// Evaluates a roll request, usually by rolling dice and posting the result
/// somewhere the table can see it.
#[async_trait]
pub trait RollEvaluator: Send + Sync {
    /// Evaluate one request.
    async fn evaluate(&self, request: RollRequest) -> MechResult<RollOutcome>;
}

/// Forwards requests to the injected evaluator.
///
/// Does no validation: a negative dice count or a missing position is the
/// evaluator's business.
#[derive(Clone)]
pub struct RollDispatcher {
    evaluator: Arc<dyn RollEvaluator>,
}

impl RollDispatcher {
    /// Create a dispatcher around an evaluator.
    pub fn new(evaluator: Arc<dyn RollEvaluator>) -> Self {
        Self { evaluator }
    }

    /// Send a request to the evaluator and return its outcome unchanged.
    pub async fn dispatch(&self, request: RollRequest) -> MechResult<RollOutcome> {
        tracing::info!(
            kind = ?request.kind,
            dice = request.dice_count,
            label = %request.label,
            "dispatching roll"
        );
        self.evaluator.evaluate(request).await
    }
}

impl std::fmt::Debug for RollDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RollDispatcher").finish_non_exhaustive()
    }
}
