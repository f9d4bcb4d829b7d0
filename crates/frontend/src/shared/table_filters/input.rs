//! Value widgets of the "add filter" form, derived from filter definitions.
//!
//! Rendering here is pure: [`render_input`] returns a description of the widget
//! and the view layer turns it into DOM.

use super::definition::{FilterDefinition, FilterKind};
use crate::shared::config::BoolLabels;

pub const BOOL_TRUE: &str = "true";
pub const BOOL_FALSE: &str = "false";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterInput {
    Text { value: String },
    Date { value: String },
    Select {
        options: Vec<SelectOption>,
        selected: Option<String>,
    },
}

impl FilterInput {
    /// Value submitted when the widget is confirmed untouched.
    ///
    /// A select always shows an option, so that option is the value.
    pub fn initial_value(&self) -> String {
        match self {
            Self::Text { value } | Self::Date { value } => value.clone(),
            Self::Select { options, selected } => selected
                .clone()
                .or_else(|| options.first().map(|o| o.value.clone()))
                .unwrap_or_default(),
        }
    }
}

fn bool_options(labels: &BoolLabels) -> Vec<SelectOption> {
    vec![
        SelectOption {
            value: BOOL_TRUE.to_string(),
            label: labels.bool_true.clone(),
        },
        SelectOption {
            value: BOOL_FALSE.to_string(),
            label: labels.bool_false.clone(),
        },
    ]
}

/// Widget for entering a value of `def`, pre-filled with `current` when it is valid.
pub fn render_input(def: &FilterDefinition, current: Option<&str>, labels: &BoolLabels) -> FilterInput {
    let current = current.map(str::trim);
    let select = |options: Vec<SelectOption>| {
        let selected = current
            .filter(|c| options.iter().any(|o| o.value == *c))
            .map(str::to_string);
        FilterInput::Select { options, selected }
    };

    match &def.kind {
        FilterKind::Text => FilterInput::Text {
            value: current.unwrap_or_default().to_string(),
        },
        FilterKind::Date => FilterInput::Date {
            value: current.unwrap_or_default().to_string(),
        },
        FilterKind::Bool => select(bool_options(labels)),
        FilterKind::Choice(options) => select(
            options
                .resolve()
                .into_iter()
                .map(|(value, option)| SelectOption {
                    value,
                    label: option.value,
                })
                .collect(),
        ),
    }
}

fn is_truthy(raw: &str) -> bool {
    matches!(raw.trim().to_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

/// Text shown for a stored value in a filter tag.
pub fn display_value(def: &FilterDefinition, raw: &str, labels: &BoolLabels) -> String {
    match &def.kind {
        FilterKind::Bool => {
            if is_truthy(raw) {
                labels.bool_true.clone()
            } else {
                labels.bool_false.clone()
            }
        }
        FilterKind::Choice(options) => options
            .resolve()
            .get(raw)
            .map(|o| o.value.clone())
            .unwrap_or_else(|| raw.to_string()),
        FilterKind::Text | FilterKind::Date => raw.to_string(),
    }
}
