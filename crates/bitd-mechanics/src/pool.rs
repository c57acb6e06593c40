//! Dice pools derived from a character's attributes and skills.
//!
//! A skill's pool is its rating. An attribute's pool is its bonus plus one
//! die for every skill under it rated above zero. The vice pool is the
//! lowest of the insight, prowess, and resolve pools.

use serde::Serialize;

use bitd_core::Character;
use bitd_core::character::DEFAULT_SKILL_MAX;

use crate::crew::CrewModifiers;

/// Attributes whose lowest pool sets the vice pool.
pub const VICE_ATTRIBUTES: [&str; 3] = ["insight", "prowess", "resolve"];

/// Skill maximum granted by the crew mastery upgrade.
pub const MASTERY_SKILL_MAX: i32 = DEFAULT_SKILL_MAX + 1;

/// Dice counts for every attribute and skill, plus the vice pool.
///
/// Built fresh by [`compute_dice_pools`]; entries keep sheet order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DicePoolMap {
    entries: Vec<(String, i32)>,
    vice: i32,
}

impl DicePoolMap {
    /// The pool for an attribute or skill.
    pub fn get(&self, name: &str) -> Option<i32> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, dice)| *dice)
    }

    /// The vice pool.
    pub fn vice(&self) -> i32 {
        self.vice
    }

    /// All attribute and skill pools in sheet order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i32)> {
        self.entries.iter().map(|(n, dice)| (n.as_str(), *dice))
    }

    /// Number of attribute and skill entries (vice excluded).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no attribute or skill entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn set(&mut self, name: &str, dice: i32) {
        match self.entries.iter_mut().find(|(n, _)| n == name) {
            Some(entry) => entry.1 = dice,
            None => self.entries.push((name.to_string(), dice)),
        }
    }
}

/// Compute every dice pool for a character.
pub fn compute_dice_pools(character: &Character) -> DicePoolMap {
    let mut pools = DicePoolMap::default();

    for attribute in &character.attributes {
        pools.set(&attribute.name, attribute.bonus);
        let mut dice = attribute.bonus;
        for skill in &attribute.skills {
            let rating = skill.effective_value();
            pools.set(&skill.name, rating);
            if rating > 0 {
                dice = dice.saturating_add(1);
            }
        }
        pools.set(&attribute.name, dice);
    }

    // Once, after every attribute pool is final.
    pools.vice = VICE_ATTRIBUTES
        .iter()
        .filter_map(|name| pools.get(name))
        .min()
        .unwrap_or(0);

    tracing::debug!(
        character = %character.name,
        entries = pools.len(),
        vice = pools.vice,
        "computed dice pools"
    );
    pools
}

/// A skill with the bounds the sheet should display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComputedSkill {
    /// Skill name.
    pub name: String,
    /// Rating clamped up to the minimum.
    pub value: i32,
    /// Minimum rating.
    pub min: i32,
    /// Maximum rating (3, or 4 with mastery).
    pub max: i32,
}

/// An attribute with its skills' display bounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComputedAttribute {
    /// Attribute name.
    pub name: String,
    /// Attribute bonus.
    pub bonus: i32,
    /// Skills in sheet order.
    pub skills: Vec<ComputedSkill>,
}

/// The skill maximum for a crew with or without mastery.
pub fn skill_max(mastery: bool) -> i32 {
    if mastery {
        MASTERY_SKILL_MAX
    } else {
        DEFAULT_SKILL_MAX
    }
}

/// Skill bounds for presentation.
///
/// Clamps each rating to its minimum and sets the maximum from the crew's
/// mastery. Dice counts are not affected; use [`compute_dice_pools`] for
/// those.
pub fn computed_attributes(
    character: &Character,
    modifiers: &CrewModifiers,
) -> Vec<ComputedAttribute> {
    let max = skill_max(modifiers.mastery);
    character
        .attributes
        .iter()
        .map(|attribute| ComputedAttribute {
            name: attribute.name.clone(),
            bonus: attribute.bonus,
            skills: attribute
                .skills
                .iter()
                .map(|skill| ComputedSkill {
                    name: skill.name.clone(),
                    value: skill.effective_value(),
                    min: skill.min,
                    max,
                })
                .collect(),
        })
        .collect()
}

/// The rollable entries under one attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionGroup {
    /// Attribute name; rolling it directly is a resistance roll.
    pub attribute: String,
    /// Skill names under the attribute.
    pub actions: Vec<String>,
}

/// Group every rollable target by attribute, in sheet order.
pub fn list_actions(character: &Character) -> Vec<ActionGroup> {
    character
        .attributes
        .iter()
        .map(|attribute| ActionGroup {
            attribute: attribute.name.clone(),
            actions: attribute.skills.iter().map(|s| s.name.clone()).collect(),
        })
        .collect()
}
