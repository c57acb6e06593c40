use serde::{Deserialize, Serialize};

use crate::character::Character;
use crate::crew::Crew;
use crate::id::ActorId;

/// Any record a registry can hold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Actor {
    /// A player character.
    Character(Character),
    /// A crew.
    Crew(Crew),
}

impl Actor {
    /// The record's identifier.
    pub fn id(&self) -> &ActorId {
        match self {
            Self::Character(c) => &c.id,
            Self::Crew(c) => &c.id,
        }
    }

    /// The record's display name.
    pub fn name(&self) -> &str {
        match self {
            Self::Character(c) => &c.name,
            Self::Crew(c) => &c.name,
        }
    }

    /// The character record, if this is one.
    pub fn as_character(&self) -> Option<&Character> {
        match self {
            Self::Character(c) => Some(c),
            Self::Crew(_) => None,
        }
    }

    /// The crew record, if this is one.
    pub fn as_crew(&self) -> Option<&Crew> {
        match self {
            Self::Crew(c) => Some(c),
            Self::Character(_) => None,
        }
    }

    /// Consume the actor, keeping only a crew record.
    pub fn into_crew(self) -> Option<Crew> {
        match self {
            Self::Crew(c) => Some(c),
            Self::Character(_) => None,
        }
    }
}

impl From<Character> for Actor {
    fn from(c: Character) -> Self {
        Self::Character(c)
    }
}

impl From<Crew> for Actor {
    fn from(c: Crew) -> Self {
        Self::Crew(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tagged_json() {
        let actors: Vec<Actor> = serde_json::from_str(
            r#"[{"type": "character", "id": "a", "name": "Cross"},
                {"type": "crew", "id": "b", "name": "Crows", "tier": 1}]"#,
        )
        .unwrap();
        assert_eq!(actors[0].name(), "Cross");
        assert!(actors[0].as_character().is_some());
        assert_eq!(actors[1].as_crew().unwrap().tier, 1);
        assert_eq!(actors[1].id(), &ActorId::from("b"));
    }

    #[test]
    fn into_crew_rejects_characters() {
        assert!(Actor::from(Character::new("Cross")).into_crew().is_none());
        assert!(Actor::from(Crew::new("Crows")).into_crew().is_some());
    }
}
