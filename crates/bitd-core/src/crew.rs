//! Crew records.

use serde::{Deserialize, Serialize};

use crate::id::ActorId;
use crate::lenient;

/// Crew upgrades that affect every linked scoundrel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoundrelTraits {
    /// Raises every skill maximum by one.
    #[serde(default, deserialize_with = "lenient::bool")]
    pub mastery: bool,
    /// Extra stress boxes.
    #[serde(default, deserialize_with = "lenient::float")]
    pub add_stress: f64,
    /// Extra trauma boxes.
    #[serde(default, deserialize_with = "lenient::float")]
    pub add_trauma: f64,
}

/// A crew shared by several characters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Crew {
    /// Unique identifier.
    #[serde(default)]
    pub id: ActorId,
    /// Display name.
    pub name: String,
    /// Crew rank, used as the dice pool when acquiring assets.
    #[serde(default, deserialize_with = "lenient::int")]
    pub tier: i32,
    /// Traits granted to linked scoundrels.
    #[serde(default)]
    pub scoundrel: ScoundrelTraits,
}

impl Crew {
    /// Create a tier-0 crew with no traits.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ActorId::new(),
            name: name.into(),
            tier: 0,
            scoundrel: ScoundrelTraits::default(),
        }
    }

    /// Set the identifier.
    pub fn with_id(mut self, id: impl Into<ActorId>) -> Self {
        self.id = id.into();
        self
    }

    /// Set the tier.
    pub fn with_tier(mut self, tier: i32) -> Self {
        self.tier = tier;
        self
    }

    /// Set the scoundrel traits.
    pub fn with_traits(mut self, scoundrel: ScoundrelTraits) -> Self {
        self.scoundrel = scoundrel;
        self
    }
}
