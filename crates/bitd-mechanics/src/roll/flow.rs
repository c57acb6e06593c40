//! The roll configuration state machine.

use bitd_core::lenient::parse_int;
use bitd_core::{ActorRegistry, Character};

use super::fields;
use super::{Effect, Position, RollKind, RollRequest};
use crate::config::RollSettings;
use crate::crew::CrewModifiers;
use crate::dialog::{FieldKind, FieldOption, FormField, FormSpec, FormValues};
use crate::pool::{DicePoolMap, compute_dice_pools, list_actions};

const MODIFIER_RANGE: std::ops::RangeInclusive<i32> = -3..=3;
const EXTRA_THREATS_RANGE: std::ops::RangeInclusive<i32> = 0..=5;
const QUANTITY_RANGE: std::ops::RangeInclusive<i32> = 0..=10;
const TIER_RANGE: std::ops::RangeInclusive<i32> = 0..=4;

/// A snapshot of everything a roll needs from the character and its crew.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollContext {
    /// Dice pools at the time the roll started.
    pub pools: DicePoolMap,
    /// Current stress.
    pub stress: i32,
    /// Resolved crew tier.
    pub tier: i32,
    /// Skill names; rolling one of these is an action.
    pub actions: Vec<String>,
    /// Which opposed roll types are offered.
    pub settings: RollSettings,
}

impl RollContext {
    /// Read the context off a character, resolving its crew now.
    pub fn gather(
        character: &Character,
        registry: &dyn ActorRegistry,
        settings: RollSettings,
    ) -> Self {
        let modifiers = CrewModifiers::resolve(character, registry);
        Self {
            pools: compute_dice_pools(character),
            stress: character.stress.value,
            tier: modifiers.tier,
            actions: list_actions(character)
                .into_iter()
                .flat_map(|group| group.actions)
                .collect(),
            settings,
        }
    }

    /// Whether rolling `target` is an action.
    pub fn is_action(&self, target: &str) -> bool {
        self.actions.iter().any(|a| a == target)
    }

    fn offers(&self, kind: RollKind) -> bool {
        match kind {
            RollKind::Action => self.settings.action_roll,
            RollKind::Threat => self.settings.threat_roll,
            RollKind::Resistance => false,
            _ => true,
        }
    }

    /// The roll type preselected in the form.
    pub fn default_kind(&self) -> RollKind {
        if self.settings.action_roll {
            RollKind::Action
        } else if self.settings.threat_roll {
            RollKind::Threat
        } else {
            RollKind::Fortune
        }
    }
}

/// Where a roll flow stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RollState {
    /// Not started.
    Idle,
    /// Waiting for the player to fill in the form.
    AwaitingConfirmation(FormSpec),
    /// Confirmed; the request is ready to dispatch.
    Resolved(RollRequest),
    /// The player closed the form. Nothing is rolled.
    Cancelled,
}

/// Walks one roll from target to request.
#[derive(Debug, Clone)]
pub struct RollFlow {
    context: RollContext,
    target: String,
    dice_hint: i32,
    state: RollState,
}

impl RollFlow {
    /// Create an idle flow.
    pub fn new(context: RollContext) -> Self {
        Self {
            context,
            target: String::new(),
            dice_hint: 0,
            state: RollState::Idle,
        }
    }

    /// The context the flow was built with.
    pub fn context(&self) -> &RollContext {
        &self.context
    }

    /// Current state.
    pub fn state(&self) -> &RollState {
        &self.state
    }

    /// Whether the flow has finished, one way or the other.
    pub fn is_terminal(&self) -> bool {
        matches!(self.state, RollState::Resolved(_) | RollState::Cancelled)
    }

    /// The resolved request, if any.
    pub fn request(&self) -> Option<&RollRequest> {
        match &self.state {
            RollState::Resolved(request) => Some(request),
            _ => None,
        }
    }

    /// Consume the flow, returning the resolved request if any.
    pub fn into_request(self) -> Option<RollRequest> {
        match self.state {
            RollState::Resolved(request) => Some(request),
            _ => None,
        }
    }

    /// Start a roll against `target` and build the form to show.
    ///
    /// `default_dice_hint` preselects the engagement dice count and is
    /// clamped into 0..=10. Returns `None` if the flow was already started.
    pub fn begin(&mut self, target: &str, default_dice_hint: i64) -> Option<&FormSpec> {
        if self.state != RollState::Idle {
            tracing::debug!(roll_target = target, "roll flow already started");
            return None;
        }

        self.target = target.to_string();
        self.dice_hint = clamp_hint(default_dice_hint);
        let spec = self.build_form();
        tracing::debug!(
            roll_target = target,
            action = self.context.is_action(target),
            fields = spec.fields.len(),
            "awaiting roll confirmation"
        );
        self.state = RollState::AwaitingConfirmation(spec);

        match &self.state {
            RollState::AwaitingConfirmation(spec) => Some(spec),
            _ => None,
        }
    }

    /// Continue with the dialog's answer. `None` cancels.
    ///
    /// Does nothing unless the flow is awaiting confirmation.
    pub fn resume(&mut self, values: Option<FormValues>) -> &RollState {
        if !matches!(self.state, RollState::AwaitingConfirmation(_)) {
            tracing::debug!("resume ignored outside confirmation");
            return &self.state;
        }

        self.state = match values {
            Some(values) => RollState::Resolved(self.resolve(&values)),
            None => {
                tracing::debug!(roll_target = %self.target, "roll cancelled");
                RollState::Cancelled
            }
        };
        &self.state
    }

    fn build_form(&self) -> FormSpec {
        let title = if self.target.is_empty() {
            "Roll".to_string()
        } else {
            format!("Roll {}", self.target)
        };

        let mut form = vec![FormField::new(
            fields::MODIFIER,
            "Modifier",
            FieldKind::Select {
                options: MODIFIER_RANGE
                    .map(|m| FieldOption::new(m.to_string(), format!("{m:+}d")))
                    .collect(),
                default: "0".to_string(),
            },
        )];

        if self.context.is_action(&self.target) {
            form.extend(self.roll_type_fields());
        }

        form.push(FormField::new(
            fields::NOTE,
            "Notes",
            FieldKind::Text {
                default: String::new(),
            },
        ));

        FormSpec { title, fields: form }
    }

    fn roll_type_fields(&self) -> Vec<FormField> {
        let action = RollKind::Action.form_value().unwrap_or_default();
        let threat = RollKind::Threat.form_value().unwrap_or_default();
        let engagement = RollKind::Engagement.form_value().unwrap_or_default();
        let acquire = RollKind::AcquireAsset.form_value().unwrap_or_default();

        let kinds: Vec<FieldOption> = RollKind::SELECTABLE
            .into_iter()
            .filter(|k| self.context.offers(*k))
            .filter_map(|k| k.form_value().map(|v| FieldOption::new(v, k.option_label())))
            .collect();

        let mut form = vec![FormField::new(
            fields::ROLL_TYPE,
            "Roll Type",
            FieldKind::Choice {
                options: kinds,
                default: self
                    .context
                    .default_kind()
                    .form_value()
                    .unwrap_or_default()
                    .to_string(),
            },
        )];

        if self.context.settings.action_roll {
            form.push(
                FormField::new(
                    fields::POSITION,
                    "Position",
                    FieldKind::Select {
                        options: Position::ALL
                            .iter()
                            .map(|p| FieldOption::new(p.as_str(), p.label()))
                            .collect(),
                        default: Position::Risky.as_str().to_string(),
                    },
                )
                .for_roll_type(action),
            );
            form.push(
                FormField::new(
                    fields::EFFECT,
                    "Effect",
                    FieldKind::Select {
                        options: Effect::ALL
                            .iter()
                            .map(|e| FieldOption::new(e.as_str(), e.label()))
                            .collect(),
                        default: Effect::Standard.as_str().to_string(),
                    },
                )
                .for_roll_type(action),
            );
        }

        if self.context.settings.threat_roll {
            form.push(
                FormField::new(
                    fields::THREAT_POSITION,
                    "Position",
                    FieldKind::Select {
                        options: [Position::Risky, Position::Desperate]
                            .iter()
                            .map(|p| FieldOption::new(p.as_str(), p.label()))
                            .collect(),
                        default: Position::Risky.as_str().to_string(),
                    },
                )
                .for_roll_type(threat),
            );
            form.push(
                FormField::new(
                    fields::EXTRA_THREATS,
                    "Extra Threats",
                    numeric_select(EXTRA_THREATS_RANGE, 0, |n| n.to_string()),
                )
                .for_roll_type(threat),
            );
        }

        form.push(
            FormField::new(
                fields::QUANTITY,
                "Number of Dice",
                numeric_select(QUANTITY_RANGE, self.dice_hint, |n| format!("{n}d")),
            )
            .for_roll_type(engagement),
        );

        let current_tier = self.context.tier.to_string();
        let mut tiers: Vec<FieldOption> = TIER_RANGE
            .map(|n| FieldOption::new(n.to_string(), n.to_string()))
            .collect();
        if !TIER_RANGE.contains(&self.context.tier) {
            tiers.insert(0, FieldOption::new(current_tier.clone(), current_tier.clone()));
        }
        form.push(
            FormField::new(
                fields::TIER,
                "Crew Tier",
                FieldKind::Select {
                    options: tiers,
                    default: current_tier,
                },
            )
            .for_roll_type(acquire),
        );

        form
    }

    fn resolve(&self, values: &FormValues) -> RollRequest {
        let modifier = number(values, fields::MODIFIER, 0, MODIFIER_RANGE);
        let note = values.get(fields::NOTE).unwrap_or_default();

        if !self.context.is_action(&self.target) {
            return self.resistance(modifier).with_note(note);
        }

        let kind = self.selected_kind(values);
        let target_dice = self.context.pools.get(&self.target).unwrap_or(0);
        let label = kind.label(&self.target);

        let request = match kind {
            RollKind::Action => {
                let position = values
                    .get(fields::POSITION)
                    .and_then(Position::parse)
                    .unwrap_or(Position::Risky);
                let effect = values
                    .get(fields::EFFECT)
                    .and_then(Effect::parse)
                    .unwrap_or(Effect::Standard);
                RollRequest::new(kind, target_dice.saturating_add(modifier), label)
                    .with_position(position)
                    .with_effect(effect)
                    .with_payload(self.context.stress)
            }
            RollKind::Threat => {
                let position = values
                    .get(fields::THREAT_POSITION)
                    .and_then(Position::parse)
                    .unwrap_or(Position::Risky);
                let extra_threats = number(values, fields::EXTRA_THREATS, 0, EXTRA_THREATS_RANGE);
                RollRequest::new(kind, target_dice.saturating_add(modifier), label)
                    .with_position(position)
                    .with_payload(extra_threats)
            }
            RollKind::IndulgeVice => {
                RollRequest::new(kind, self.context.pools.vice().saturating_add(modifier), label)
                    .with_payload(self.context.stress)
            }
            RollKind::Engagement => {
                let dice = number(values, fields::QUANTITY, self.dice_hint, QUANTITY_RANGE);
                RollRequest::new(kind, dice, label)
            }
            RollKind::AcquireAsset => {
                let tiers = *TIER_RANGE.start()..=self.context.tier.max(*TIER_RANGE.end());
                let tier = number(values, fields::TIER, self.context.tier, tiers);
                RollRequest::new(kind, tier.saturating_add(modifier), label)
                    .with_payload(tier)
                    .with_tier(tier)
            }
            RollKind::Fortune | RollKind::GatherInformation | RollKind::Resistance => {
                RollRequest::new(kind, target_dice.saturating_add(modifier), label)
            }
        };

        tracing::debug!(kind = ?request.kind, dice = request.dice_count, "roll resolved");
        request.with_note(note)
    }

    fn resistance(&self, modifier: i32) -> RollRequest {
        let base = if self.target.is_empty() {
            1
        } else {
            self.context.pools.get(&self.target).unwrap_or_else(|| {
                tracing::warn!(roll_target = %self.target, "no dice pool for target, rolling from zero");
                0
            })
        };

        RollRequest::new(
            RollKind::Resistance,
            base.saturating_add(modifier),
            RollKind::Resistance.label(&self.target),
        )
        .with_payload(self.context.stress)
    }

    fn selected_kind(&self, values: &FormValues) -> RollKind {
        let Some(raw) = values.get(fields::ROLL_TYPE) else {
            return self.context.default_kind();
        };

        match RollKind::from_form_value(raw) {
            Some(kind) if self.context.offers(kind) => kind,
            _ => {
                tracing::warn!(roll_type = raw, "roll type not offered, using default");
                self.context.default_kind()
            }
        }
    }
}

fn clamp_hint(hint: i64) -> i32 {
    let clamped = hint.clamp(
        i64::from(*QUANTITY_RANGE.start()),
        i64::from(*QUANTITY_RANGE.end()),
    );
    i32::try_from(clamped).unwrap_or(0)
}

fn numeric_select(
    range: std::ops::RangeInclusive<i32>,
    default: i32,
    label: impl Fn(i32) -> String,
) -> FieldKind {
    FieldKind::Select {
        options: range.map(|n| FieldOption::new(n.to_string(), label(n))).collect(),
        default: default.to_string(),
    }
}

/// Read a numeric field clamped into `range`. Absent uses `default`;
/// unparsable counts as zero.
fn number(
    values: &FormValues,
    name: &str,
    default: i32,
    range: std::ops::RangeInclusive<i32>,
) -> i32 {
    let Some(raw) = values.get(name) else {
        return default;
    };
    match parse_int(raw) {
        Some(n) => {
            let clamped = n.clamp(*range.start(), *range.end());
            if clamped != n {
                tracing::warn!(field = name, value = n, clamped, "form value out of range");
            }
            clamped
        }
        None => {
            tracing::warn!(field = name, value = raw, "form value is not a number, using 0");
            0
        }
    }
}
