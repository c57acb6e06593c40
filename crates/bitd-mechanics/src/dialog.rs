//! The form the player fills in before a roll, and the dialog that shows it.
//!
//! A [`FormSpec`] describes fields without saying how to draw them. The host
//! renders it however it likes through a [`FormDialog`] and hands back the
//! raw string values, or `None` if the player closed the form.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::MechResult;

/// One selectable value of a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldOption {
    /// Value returned when chosen.
    pub value: String,
    /// Display label.
    pub label: String,
}

impl FieldOption {
    /// Create an option.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// How a field collects its value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// Pick one value from a dropdown.
    Select {
        /// Available options.
        options: Vec<FieldOption>,
        /// Preselected value.
        default: String,
    },
    /// Pick one value from a set of radio buttons.
    Choice {
        /// Available options.
        options: Vec<FieldOption>,
        /// Preselected value.
        default: String,
    },
    /// Free text.
    Text {
        /// Prefilled text.
        default: String,
    },
}

impl FieldKind {
    /// The value a player gets by confirming without touching the field.
    pub fn default_value(&self) -> &str {
        match self {
            Self::Select { default, .. } | Self::Choice { default, .. } | Self::Text { default } => {
                default
            }
        }
    }

    /// The options, if the field has a fixed set.
    pub fn options(&self) -> &[FieldOption] {
        match self {
            Self::Select { options, .. } | Self::Choice { options, .. } => options,
            Self::Text { .. } => &[],
        }
    }
}

/// A single form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    /// Key under which the value is returned.
    pub name: String,
    /// Display label.
    pub label: String,
    /// Input style.
    pub kind: FieldKind,
    /// Roll-type values this field belongs to; empty means always relevant.
    pub applies_to: Vec<String>,
}

impl FormField {
    /// Create a field relevant to every roll type.
    pub fn new(name: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind,
            applies_to: Vec::new(),
        }
    }

    /// Restrict the field to one roll-type value.
    pub fn for_roll_type(mut self, value: impl Into<String>) -> Self {
        self.applies_to.push(value.into());
        self
    }

    /// Whether the field matters when the given roll type is chosen.
    pub fn applies(&self, roll_type: &str) -> bool {
        self.applies_to.is_empty() || self.applies_to.iter().any(|v| v == roll_type)
    }
}

/// A complete form to present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSpec {
    /// Window title.
    pub title: String,
    /// Fields in display order.
    pub fields: Vec<FormField>,
}

impl FormSpec {
    /// Find a field by name.
    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// The values a player gets by confirming the form untouched.
    pub fn defaults(&self) -> FormValues {
        self.fields
            .iter()
            .map(|f| (f.name.clone(), f.kind.default_value().to_string()))
            .collect()
    }
}

/// Raw values returned by a confirmed form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues(HashMap<String, String>);

impl FormValues {
    /// Create an empty set of values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a value, builder style.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    /// Set a value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    /// Read a value.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }
}

impl FromIterator<(String, String)> for FormValues {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Presents a form and waits for the player.
///
/// Returns `Ok(None)` when the player cancels or dismisses the form; the two
/// are not distinguished. Errors are reserved for a dialog that cannot be
/// shown or read at all.
#[async_trait]
pub trait FormDialog: Send + Sync {
    /// Show the form and collect its values.
    async fn present(&self, spec: &FormSpec) -> MechResult<Option<FormValues>>;
}
