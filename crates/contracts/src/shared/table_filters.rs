//! Wire types for table filter metadata served by `/api/table-filters/<table>/`.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Value type of a filter as declared by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterValueType {
    #[default]
    Text,
    Bool,
    Date,
    Choice,
}

impl FilterValueType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Bool => "bool",
            Self::Date => "date",
            Self::Choice => "choice",
        }
    }
}

/// One selectable value of a choice filter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOption {
    /// Value written into the filter set
    pub key: String,
    /// Label shown to the user
    pub value: String,
}

impl FilterOption {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterDefinitionDto {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type", default)]
    pub value_type: FilterValueType,
    /// Present only for choice filters; keyed by stored value, in display order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<IndexMap<String, FilterOption>>,
}

/// All filters available for one table
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TableFilterMetadata {
    pub table_key: String,
    #[serde(default)]
    pub filters: IndexMap<String, FilterDefinitionDto>,
}
