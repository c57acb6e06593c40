//! Choosing what kind of roll to make.
//!
//! A roll starts from a target on the sheet: a skill (an action) or an
//! attribute (a resistance roll). Actions open a form where the player picks
//! a modifier and one of several roll types; resistance rolls only ask for
//! the modifier. Either way the flow ends in a [`RollRequest`] or nothing.

mod flow;
mod session;

use serde::Serialize;

pub use flow::{RollContext, RollFlow, RollState};
pub use session::{RollFlowResult, RollSession};

/// Form field names.
pub mod fields {
    /// Extra dice, -3 to +3.
    pub const MODIFIER: &str = "modifier";
    /// Selected roll type.
    pub const ROLL_TYPE: &str = "roll_type";
    /// Action roll position.
    pub const POSITION: &str = "position";
    /// Action roll effect.
    pub const EFFECT: &str = "effect";
    /// Threat roll position.
    pub const THREAT_POSITION: &str = "threat_position";
    /// Threat roll extra threats, 0 to 5.
    pub const EXTRA_THREATS: &str = "extra_threats";
    /// Engagement dice, 0 to 10.
    pub const QUANTITY: &str = "quantity";
    /// Crew tier for asset acquisition, 0 to 4.
    pub const TIER: &str = "tier";
    /// Free-text note.
    pub const NOTE: &str = "note";
}

/// How bad it gets if an action goes wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    /// Low stakes.
    Controlled,
    /// The usual case.
    Risky,
    /// Serious harm on the line.
    Desperate,
}

impl Position {
    /// Every position, in display order.
    pub const ALL: [Position; 3] = [Self::Controlled, Self::Risky, Self::Desperate];

    /// Form value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Controlled => "controlled",
            Self::Risky => "risky",
            Self::Desperate => "desperate",
        }
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Controlled => "Controlled",
            Self::Risky => "Risky",
            Self::Desperate => "Desperate",
        }
    }

    /// Parse a form value.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == value.trim())
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// How much an action accomplishes if it succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Effect {
    /// Less than hoped.
    Limited,
    /// What was intended.
    Standard,
    /// More than intended.
    Great,
}

impl Effect {
    /// Every effect level, in display order.
    pub const ALL: [Effect; 3] = [Self::Limited, Self::Standard, Self::Great];

    /// Form value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Limited => "limited",
            Self::Standard => "standard",
            Self::Great => "great",
        }
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Limited => "Limited",
            Self::Standard => "Standard",
            Self::Great => "Great",
        }
    }

    /// Parse a form value.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.as_str() == value.trim())
    }
}

impl std::fmt::Display for Effect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The kind of roll a request was built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RollKind {
    /// Action roll with position and effect.
    Action,
    /// Threat roll with position and extra threats.
    Threat,
    /// Fortune roll.
    Fortune,
    /// Gather information.
    GatherInformation,
    /// Indulge vice, rolled from the vice pool.
    IndulgeVice,
    /// Engagement roll with a freely chosen dice count.
    Engagement,
    /// Acquire an asset, rolled from crew tier.
    AcquireAsset,
    /// Resistance roll straight off an attribute.
    Resistance,
}

impl RollKind {
    /// Roll types offered by the form, in display order.
    pub const SELECTABLE: [RollKind; 7] = [
        Self::Action,
        Self::Threat,
        Self::Fortune,
        Self::GatherInformation,
        Self::IndulgeVice,
        Self::Engagement,
        Self::AcquireAsset,
    ];

    /// The value the roll-type field uses, or `None` for resistance rolls,
    /// which are never selected.
    pub fn form_value(self) -> Option<&'static str> {
        match self {
            Self::Action => Some("actionRoll"),
            Self::Threat => Some("threatRoll"),
            Self::Fortune => Some("fortune"),
            Self::GatherInformation => Some("gatherInfo"),
            Self::IndulgeVice => Some("indulgeVice"),
            Self::Engagement => Some("engagement"),
            Self::AcquireAsset => Some("acquireAsset"),
            Self::Resistance => None,
        }
    }

    /// Parse a roll-type field value.
    pub fn from_form_value(value: &str) -> Option<Self> {
        Self::SELECTABLE
            .into_iter()
            .find(|k| k.form_value() == Some(value.trim()))
    }

    /// Name shown in the roll-type picker.
    pub fn option_label(self) -> &'static str {
        match self {
            Self::Action => "Action Roll",
            Self::Threat => "Threat Roll",
            Self::Fortune => "Fortune",
            Self::GatherInformation => "Gather Information",
            Self::IndulgeVice => "Indulge Vice",
            Self::Engagement => "Engagement",
            Self::AcquireAsset => "Acquire Asset",
            Self::Resistance => "Resistance",
        }
    }

    /// Label attached to a request of this kind rolled against `target`.
    pub fn label(self, target: &str) -> String {
        match self {
            Self::Action | Self::Resistance => target.to_string(),
            Self::Threat => "Threat Roll".to_string(),
            Self::Fortune => "Fortune".to_string(),
            Self::GatherInformation => "Gather Information".to_string(),
            Self::IndulgeVice => "Vice".to_string(),
            Self::Engagement => "Engagement".to_string(),
            Self::AcquireAsset => "Acquire Asset".to_string(),
        }
    }
}

/// A fully specified roll, ready for an evaluator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RollRequest {
    /// What produced the request.
    pub kind: RollKind,
    /// Dice to roll. Zero or negative means the two-dice-keep-lowest rule.
    pub dice_count: i32,
    /// Display label.
    pub label: String,
    /// Position, for action and threat rolls.
    pub position: Option<Position>,
    /// Effect, for action rolls.
    pub effect: Option<Effect>,
    /// Free-text note.
    pub note: String,
    /// Kind-specific number: current stress, extra threats, or tier.
    pub payload: Option<i32>,
    /// Crew tier, for asset acquisition.
    pub tier: Option<i32>,
}

impl RollRequest {
    /// Create a request with no position, effect, note or payload.
    pub fn new(kind: RollKind, dice_count: i32, label: impl Into<String>) -> Self {
        Self {
            kind,
            dice_count,
            label: label.into(),
            position: None,
            effect: None,
            note: String::new(),
            payload: None,
            tier: None,
        }
    }

    /// Set the position.
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    /// Set the effect.
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effect = Some(effect);
        self
    }

    /// Attach a note.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    /// Set the payload.
    pub fn with_payload(mut self, payload: i32) -> Self {
        self.payload = Some(payload);
        self
    }

    /// Set the crew tier.
    pub fn with_tier(mut self, tier: i32) -> Self {
        self.tier = Some(tier);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_values_round_trip_for_selectable_kinds() {
        for kind in RollKind::SELECTABLE {
            let value = kind.form_value().unwrap();
            assert_eq!(RollKind::from_form_value(value), Some(kind));
        }
        assert_eq!(RollKind::Resistance.form_value(), None);
        assert_eq!(RollKind::from_form_value("resistance"), None);
    }

    #[test]
    fn labels() {
        assert_eq!(RollKind::Action.label("hunt"), "hunt");
        assert_eq!(RollKind::Threat.label("hunt"), "Threat Roll");
        assert_eq!(RollKind::IndulgeVice.label("hunt"), "Vice");
        assert_eq!(RollKind::Resistance.label("prowess"), "prowess");
    }

    #[test]
    fn parse_position_and_effect() {
        assert_eq!(Position::parse("desperate"), Some(Position::Desperate));
        assert_eq!(Position::parse("sideways"), None);
        assert_eq!(Effect::parse(" great "), Some(Effect::Great));
        assert_eq!(Effect::Limited.to_string(), "Limited");
    }

    #[test]
    fn builder_sets_optional_fields() {
        let request = RollRequest::new(RollKind::Action, 3, "hunt")
            .with_position(Position::Risky)
            .with_effect(Effect::Standard)
            .with_note("quietly")
            .with_payload(2);
        assert_eq!(request.position, Some(Position::Risky));
        assert_eq!(request.effect, Some(Effect::Standard));
        assert_eq!(request.note, "quietly");
        assert_eq!(request.payload, Some(2));
        assert_eq!(request.tier, None);
    }
}
