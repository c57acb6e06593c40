use crate::id::ActorId;

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when managing actor records.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// An actor with the same identifier is already registered.
    #[error("actor already exists: {0}")]
    DuplicateId(ActorId),

    /// No character matches the given identifier or name.
    #[error("character not found: \"{0}\"")]
    CharacterNotFound(String),

    /// A roster document could not be parsed.
    #[error("invalid roster: {0}")]
    Roster(#[from] serde_json::Error),
}
