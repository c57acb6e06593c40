//! Actor lookup.
//!
//! The mechanics never own actor records. They ask an [`ActorRegistry`] for
//! the current state of a record each time they need it, so a crew upgrade
//! made by the host shows up on the next computation.

use std::collections::HashMap;

use crate::actor::Actor;
use crate::character::Character;
use crate::error::{CoreError, CoreResult};
use crate::id::ActorId;

/// Read-only access to actor records owned by a host.
pub trait ActorRegistry: Send + Sync {
    /// Fetch the current record for an identifier.
    fn lookup(&self, id: &ActorId) -> Option<Actor>;
}

/// A registry backed by a hash map, for hosts that keep records in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRegistry {
    actors: HashMap<ActorId, Actor>,
    order: Vec<ActorId>,
}

impl InMemoryRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an actor. Fails if the identifier is taken.
    pub fn insert(&mut self, actor: impl Into<Actor>) -> CoreResult<ActorId> {
        let actor = actor.into();
        let id = actor.id().clone();
        if self.actors.contains_key(&id) {
            return Err(CoreError::DuplicateId(id));
        }
        self.order.push(id.clone());
        self.actors.insert(id.clone(), actor);
        Ok(id)
    }

    /// Replace or add an actor, returning the previous record.
    pub fn upsert(&mut self, actor: impl Into<Actor>) -> Option<Actor> {
        let actor = actor.into();
        let id = actor.id().clone();
        let previous = self.actors.insert(id.clone(), actor);
        if previous.is_none() {
            self.order.push(id);
        }
        previous
    }

    /// Borrow an actor by identifier.
    pub fn get(&self, id: &ActorId) -> Option<&Actor> {
        self.actors.get(id)
    }

    /// Find a character by identifier or by name (case-insensitive).
    pub fn find_character(&self, key: &str) -> CoreResult<&Character> {
        if let Some(c) = self
            .actors
            .get(&ActorId::from(key))
            .and_then(Actor::as_character)
        {
            return Ok(c);
        }
        let lower = key.to_lowercase();
        self.characters()
            .find(|c| c.name.to_lowercase() == lower)
            .ok_or_else(|| CoreError::CharacterNotFound(key.to_string()))
    }

    /// All characters in insertion order.
    pub fn characters(&self) -> impl Iterator<Item = &Character> {
        self.order
            .iter()
            .filter_map(|id| self.actors.get(id))
            .filter_map(Actor::as_character)
    }

    /// Number of registered actors.
    pub fn len(&self) -> usize {
        self.actors.len()
    }

    /// Returns true if no actors are registered.
    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }
}

impl ActorRegistry for InMemoryRegistry {
    fn lookup(&self, id: &ActorId) -> Option<Actor> {
        self.actors.get(id).cloned()
    }
}
