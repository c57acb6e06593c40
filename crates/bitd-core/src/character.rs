//! Character records.
//!
//! A character groups skills under attributes. Order matters to the sheet
//! (it drives the action picker), so attributes and skills are kept as
//! ordered lists of named entries rather than maps.

use serde::{Deserialize, Serialize};

use crate::clock::Clock;
use crate::id::ActorId;
use crate::lenient;

/// Skill maximum when the character's crew has no mastery.
pub const DEFAULT_SKILL_MAX: i32 = 3;

/// A trained ability rated by dots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    /// Skill name (e.g., "hunt", "skirmish").
    pub name: String,
    /// Configured rating.
    #[serde(default, deserialize_with = "lenient::int")]
    pub value: i32,
    /// Floor raised by effects; the rating never counts as lower.
    #[serde(default, deserialize_with = "lenient::int")]
    pub min: i32,
    /// Configured maximum as stored by the host.
    #[serde(default = "default_skill_max", deserialize_with = "lenient::int")]
    pub max: i32,
}

fn default_skill_max() -> i32 {
    DEFAULT_SKILL_MAX
}

impl Skill {
    /// Create a skill with a rating, min 0 and the default max.
    pub fn new(name: impl Into<String>, value: i32) -> Self {
        Self {
            name: name.into(),
            value,
            min: 0,
            max: DEFAULT_SKILL_MAX,
        }
    }

    /// Set the minimum rating.
    pub fn with_min(mut self, min: i32) -> Self {
        self.min = min;
        self
    }

    /// The rating clamped up to the minimum.
    pub fn effective_value(&self) -> i32 {
        self.value.max(self.min)
    }
}

/// A top-level trait grouping skills and contributing a base bonus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    /// Attribute name (e.g., "insight", "prowess", "resolve").
    pub name: String,
    /// Dice added to the attribute's own pool.
    #[serde(default, deserialize_with = "lenient::int")]
    pub bonus: i32,
    /// Skills under this attribute, in sheet order.
    #[serde(default)]
    pub skills: Vec<Skill>,
}

impl Attribute {
    /// Create an attribute with a bonus and no skills.
    pub fn new(name: impl Into<String>, bonus: i32) -> Self {
        Self {
            name: name.into(),
            bonus,
            skills: Vec::new(),
        }
    }

    /// Append a skill.
    pub fn with_skill(mut self, skill: Skill) -> Self {
        self.skills.push(skill);
        self
    }
}

/// Link from a character to the crew they belong to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrewLink {
    /// Identifier of the linked crew.
    pub id: ActorId,
    /// Display name cached by the host.
    #[serde(default)]
    pub name: String,
}

/// A player character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    /// Unique identifier.
    #[serde(default)]
    pub id: ActorId,
    /// Display name.
    pub name: String,
    /// Attributes in sheet order.
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    /// Stress clock (value and max).
    #[serde(default)]
    pub stress: Clock,
    /// Trauma clock (max).
    #[serde(default)]
    pub trauma: Clock,
    /// Healing clock (value and min).
    #[serde(default, alias = "healing_clock")]
    pub healing: Clock,
    /// Crew links; only the first entry is consulted.
    #[serde(default)]
    pub crew: Vec<CrewLink>,
}

impl Character {
    /// Create a character with no attributes, empty clocks, and no crew.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ActorId::new(),
            name: name.into(),
            attributes: Vec::new(),
            stress: Clock::default(),
            trauma: Clock::default(),
            healing: Clock::default(),
            crew: Vec::new(),
        }
    }

    /// Set the identifier.
    pub fn with_id(mut self, id: impl Into<ActorId>) -> Self {
        self.id = id.into();
        self
    }

    /// Append an attribute.
    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Link the character to a crew.
    pub fn with_crew(mut self, id: impl Into<ActorId>) -> Self {
        self.crew.push(CrewLink {
            id: id.into(),
            name: String::new(),
        });
        self
    }

    /// Find an attribute by name.
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name == name)
    }

    /// Find a skill by name across all attributes.
    pub fn skill(&self, name: &str) -> Option<&Skill> {
        self.attributes
            .iter()
            .flat_map(|a| a.skills.iter())
            .find(|s| s.name == name)
    }

    /// The first crew link, if any.
    pub fn crew_link(&self) -> Option<&CrewLink> {
        self.crew.first()
    }
}
