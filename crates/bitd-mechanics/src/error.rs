//! Error types for the mechanics engine.
//!
//! Most of the engine degrades to neutral defaults instead of failing, so
//! errors here only come from collaborators: the dialog that collects roll
//! options and the evaluator that throws the dice.

/// Errors that can occur during mechanics operations.
#[derive(Debug, thiserror::Error)]
pub enum MechError {
    /// The form dialog could not be shown or read.
    #[error("dialog error: {0}")]
    Dialog(String),

    /// The roll evaluator failed to produce an outcome.
    #[error("roll evaluation failed: {0}")]
    Evaluation(String),
}

/// Convenience result type for mechanics operations.
pub type MechResult<T> = Result<T, MechError>;
