//! Character mechanics for Blades in the Dark.
//!
//! Turns a character's attributes and skills into dice pools, folds in the
//! linked crew's tier and upgrades, and walks the player through choosing a
//! roll type before handing a finished [`RollRequest`] to a roll evaluator.
//! Ships with a seeded d6 evaluator so hosts can roll without bringing
//! their own.

pub mod config;
pub mod crew;
pub mod dialog;
pub mod dice;
pub mod dispatch;
pub mod error;
pub mod evaluator;
pub mod pool;
pub mod resolution;
pub mod roll;

pub use config::RollSettings;
pub use crew::{CrewModifiers, has_mastery, healing_min, max_stress, max_trauma};
pub use dialog::{FieldKind, FieldOption, FormDialog, FormField, FormSpec, FormValues};
pub use dice::{DicePool, RollResult};
pub use dispatch::{RollDispatcher, RollEvaluator, RollOutcome};
pub use error::{MechError, MechResult};
pub use evaluator::DiceRollEvaluator;
pub use pool::{DicePoolMap, compute_dice_pools, computed_attributes, list_actions};
pub use resolution::{HighestDie, Outcome};
pub use roll::{
    Effect, Position, RollContext, RollFlow, RollFlowResult, RollKind, RollRequest, RollSession,
    RollState,
};
