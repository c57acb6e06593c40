//! Crew modifiers.
//!
//! A character's crew contributes its tier and the scoundrel upgrades
//! (mastery, extra stress and trauma boxes). Characters without a crew, or
//! whose crew cannot be found, get neutral modifiers; nothing here fails.

use bitd_core::{ActorRegistry, Character, Crew};

/// Crew-derived modifiers for one character, resolved at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrewModifiers {
    /// The crew's tier.
    pub tier: i32,
    /// Whether the crew has the mastery upgrade.
    pub mastery: bool,
    /// Extra stress boxes.
    pub add_stress: i32,
    /// Extra trauma boxes.
    pub add_trauma: i32,
}

impl Default for CrewModifiers {
    fn default() -> Self {
        Self::none()
    }
}

impl CrewModifiers {
    /// Modifiers for a character with no crew.
    pub fn none() -> Self {
        Self {
            tier: 0,
            mastery: false,
            add_stress: 0,
            add_trauma: 0,
        }
    }

    /// Read modifiers off a crew record.
    ///
    /// Non-finite bonuses count as zero; fractional ones truncate.
    pub fn from_crew(crew: &Crew) -> Self {
        Self {
            tier: crew.tier,
            mastery: crew.scoundrel.mastery,
            add_stress: finite_or_zero(crew.scoundrel.add_stress),
            add_trauma: finite_or_zero(crew.scoundrel.add_trauma),
        }
    }

    /// Resolve the modifiers of a character's first linked crew.
    ///
    /// Looks the crew up on every call so upgrades applied by the host are
    /// seen immediately.
    pub fn resolve(character: &Character, registry: &dyn ActorRegistry) -> Self {
        let Some(link) = character.crew_link() else {
            return Self::none();
        };

        let Some(actor) = registry.lookup(&link.id) else {
            tracing::warn!(
                character = %character.name,
                crew = %link.id,
                "linked crew not found, using neutral modifiers"
            );
            return Self::none();
        };

        match actor.as_crew() {
            Some(crew) => Self::from_crew(crew),
            None => {
                tracing::warn!(
                    character = %character.name,
                    actor = %link.id,
                    "crew link points at a non-crew actor"
                );
                Self::none()
            }
        }
    }
}

/// The character's stress maximum including crew bonuses.
pub fn max_stress(character: &Character, registry: &dyn ActorRegistry) -> i32 {
    character
        .stress
        .max
        .saturating_add(CrewModifiers::resolve(character, registry).add_stress)
}

/// The character's trauma maximum including crew bonuses.
pub fn max_trauma(character: &Character, registry: &dyn ActorRegistry) -> i32 {
    character
        .trauma
        .max
        .saturating_add(CrewModifiers::resolve(character, registry).add_trauma)
}

/// Whether the character's crew grants mastery.
pub fn has_mastery(character: &Character, registry: &dyn ActorRegistry) -> bool {
    CrewModifiers::resolve(character, registry).mastery
}

/// The healing clock's value, raised to its minimum.
pub fn healing_min(character: &Character) -> i32 {
    character.healing.floored_value()
}

fn finite_or_zero(value: f64) -> i32 {
    if value.is_finite() {
        value.trunc() as i32
    } else {
        0
    }
}
