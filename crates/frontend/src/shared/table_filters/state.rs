//! State machine of one filter bar.
//!
//! Each bar owns a [`FilterBarState`] for its table key, so several bars on one
//! page never share an "is adding" flag.

use super::filter_set::FilterSet;
use super::input::{display_value, render_input};
use super::registry::AvailableFilters;
use super::storage::KeyValueStorage;
use super::store::FilterStore;
use crate::shared::config::BoolLabels;

/// Draft of the inline "add filter" form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddFilterDraft {
    /// Selected filter key; empty until the user picks one
    pub field: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FilterBarMode {
    #[default]
    Idle,
    Adding(AddFilterDraft),
}

/// A removable tag for one active filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterTagView {
    pub key: String,
    pub label: String,
    pub description: String,
    pub value_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterBarState {
    pub table_key: String,
    pub filters: FilterSet,
    pub mode: FilterBarMode,
}

impl FilterBarState {
    pub fn new(table_key: &str, filters: FilterSet) -> Self {
        Self {
            table_key: table_key.to_lowercase(),
            filters,
            mode: FilterBarMode::Idle,
        }
    }

    pub fn load<S: KeyValueStorage>(store: &FilterStore<S>, table_key: &str) -> Self {
        Self::new(table_key, store.load(table_key))
    }

    pub fn is_adding(&self) -> bool {
        matches!(self.mode, FilterBarMode::Adding(_))
    }

    pub fn draft(&self) -> Option<&AddFilterDraft> {
        match &self.mode {
            FilterBarMode::Adding(draft) => Some(draft),
            FilterBarMode::Idle => None,
        }
    }

    /// Open the add form, or collapse it when already open.
    pub fn toggle_add(&mut self) {
        self.mode = match self.mode {
            FilterBarMode::Idle => FilterBarMode::Adding(AddFilterDraft::default()),
            FilterBarMode::Adding(_) => FilterBarMode::Idle,
        };
    }

    /// Pick the filter to add; the value resets to what the new widget shows.
    pub fn select_field(&mut self, field: &str, available: &AvailableFilters, labels: &BoolLabels) {
        let FilterBarMode::Adding(draft) = &mut self.mode else {
            return;
        };
        draft.field = field.to_string();
        draft.value = available
            .get(field)
            .map(|def| render_input(def, None, labels).initial_value())
            .unwrap_or_default();
    }

    pub fn set_draft_value(&mut self, value: String) {
        if let FilterBarMode::Adding(draft) = &mut self.mode {
            draft.value = value;
        }
    }

    /// Persist the drafted filter. `None` when there is nothing to add.
    pub fn confirm_add<S: KeyValueStorage>(&mut self, store: &FilterStore<S>) -> Option<FilterSet> {
        let draft = self.draft()?;
        let field = draft.field.trim().to_string();
        if field.is_empty() {
            return None;
        }
        let value = draft.value.clone();

        self.filters = store.add(&self.table_key, &field, &value);
        self.mode = FilterBarMode::Idle;
        Some(self.filters.clone())
    }

    pub fn remove_filter<S: KeyValueStorage>(&mut self, store: &FilterStore<S>, key: &str) -> FilterSet {
        self.filters = store.remove(&self.table_key, key);
        self.mode = FilterBarMode::Idle;
        self.filters.clone()
    }

    pub fn clear_filters<S: KeyValueStorage>(&mut self, store: &FilterStore<S>) -> FilterSet {
        self.filters = store.clear(&self.table_key);
        self.mode = FilterBarMode::Idle;
        self.filters.clone()
    }

    /// Filters that can still be added: available minus applied.
    pub fn addable_filters(&self, available: &AvailableFilters) -> Vec<(String, String)> {
        available
            .iter()
            .filter(|(key, _)| !self.filters.contains_key(key))
            .map(|(key, def)| (key.clone(), def.title.clone()))
            .collect()
    }

    pub fn tags(&self, available: &AvailableFilters, labels: &BoolLabels) -> Vec<FilterTagView> {
        self.filters
            .iter()
            .map(|(key, value)| match available.get(key) {
                Some(def) => FilterTagView {
                    key: key.to_string(),
                    label: def.title.clone(),
                    description: def.description.clone(),
                    value_label: display_value(def, value, labels),
                },
                // left over from an older session
                None => FilterTagView {
                    key: key.to_string(),
                    label: key.to_string(),
                    description: String::new(),
                    value_label: value.to_string(),
                },
            })
            .collect()
    }

    pub fn show_add_controls(&self, available: &AvailableFilters) -> bool {
        !available.is_empty()
    }

    pub fn show_clear(&self, available: &AvailableFilters) -> bool {
        !available.is_empty() && !self.filters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::table_filters::definition::{ChoiceOptions, FilterDefinition};
    use crate::shared::table_filters::storage::MemoryStorage;
    use std::collections::BTreeMap;

    fn store() -> FilterStore<MemoryStorage> {
        FilterStore::new(
            MemoryStorage::new(),
            "table-filters-",
            BTreeMap::from([("parts".to_string(), "cascade=1".to_string())]),
        )
    }

    fn available() -> AvailableFilters {
        [
            ("cascade", FilterDefinition::boolean("Include subcategories")),
            ("active", FilterDefinition::boolean("Active").with_description("Show active parts")),
            (
                "has_stock",
                FilterDefinition::choice(
                    "Stock available",
                    ChoiceOptions::from_iter([("1", "In Stock"), ("0", "No Stock")]),
                ),
            ),
            ("ipn", FilterDefinition::text("IPN")),
        ]
        .into_iter()
        .map(|(k, d)| (k.to_string(), d))
        .collect()
    }

    #[test]
    fn test_toggle_add_is_idempotent() {
        let mut state = FilterBarState::new("parts", FilterSet::new());
        state.toggle_add();
        assert!(state.is_adding());
        state.toggle_add();
        assert_eq!(state.mode, FilterBarMode::Idle);
    }

    #[test]
    fn test_addable_excludes_applied_filters() {
        let store = store();
        let state = FilterBarState::load(&store, "parts");
        let keys: Vec<_> = state
            .addable_filters(&available())
            .into_iter()
            .map(|(k, _)| k)
            .collect();
        assert_eq!(keys, vec!["active", "has_stock", "ipn"]);
    }

    #[test]
    fn test_select_field_resets_value_to_widget_default() {
        let labels = BoolLabels::default();
        let mut state = FilterBarState::new("parts", FilterSet::new());
        state.toggle_add();

        state.select_field("has_stock", &available(), &labels);
        assert_eq!(state.draft().unwrap().value, "1");

        state.set_draft_value("0".to_string());
        state.select_field("ipn", &available(), &labels);
        assert_eq!(state.draft().unwrap().field, "ipn");
        assert_eq!(state.draft().unwrap().value, "");
    }

    #[test]
    fn test_confirm_without_field_keeps_form_open() {
        let store = store();
        let mut state = FilterBarState::load(&store, "parts");
        assert_eq!(state.confirm_add(&store), None);

        state.toggle_add();
        assert_eq!(state.confirm_add(&store), None);
        assert!(state.is_adding());
    }

    #[test]
    fn test_choice_filter_first_option_is_stored() {
        let store = store();
        let labels = BoolLabels::default();
        let mut state = FilterBarState::load(&store, "parts");
        state.toggle_add();
        state.select_field("has_stock", &available(), &labels);

        let filters = state.confirm_add(&store).unwrap();
        assert_eq!(filters.get("has_stock"), Some("1"));
        assert_eq!(store.load("parts").get("has_stock"), Some("1"));
        assert_eq!(state.mode, FilterBarMode::Idle);
    }

    #[test]
    fn test_parts_lifecycle_through_controller() {
        let store = store();
        let labels = BoolLabels::default();
        let mut state = FilterBarState::load(&store, "parts");
        assert_eq!(state.filters, FilterSet::from_iter([("cascade", "1")]));

        state.toggle_add();
        state.select_field("active", &available(), &labels);
        state.set_draft_value("1".to_string());
        let filters = state.confirm_add(&store).unwrap();
        assert_eq!(filters, FilterSet::from_iter([("cascade", "1"), ("active", "1")]));

        let filters = state.remove_filter(&store, "cascade");
        assert_eq!(filters, FilterSet::from_iter([("active", "1")]));

        assert!(state.clear_filters(&store).is_empty());
        assert!(FilterBarState::load(&store, "parts").filters.is_empty());
    }

    #[test]
    fn test_confirmed_value_matches_stored_value() {
        let store = store();
        let labels = BoolLabels::default();
        let mut state = FilterBarState::new("bom", FilterSet::new());
        state.toggle_add();
        state.select_field("ipn", &available(), &labels);
        state.set_draft_value(" 5 ".to_string());

        let filters = state.confirm_add(&store).unwrap();
        assert_eq!(filters, FilterSet::from_iter([("ipn", "5")]));
        assert_eq!(state.filters, store.load("bom"));
        assert_eq!(state.tags(&available(), &labels)[0].value_label, "5");
    }

    #[test]
    fn test_remove_collapses_add_form() {
        let store = store();
        let mut state = FilterBarState::load(&store, "parts");
        state.toggle_add();
        state.remove_filter(&store, "cascade");
        assert_eq!(state.mode, FilterBarMode::Idle);
    }

    #[test]
    fn test_tags() {
        let labels = BoolLabels::default();
        let state = FilterBarState::new(
            "parts",
            FilterSet::from_iter([("active", "true"), ("has_stock", "0"), ("old_key", "x")]),
        );
        let tags = state.tags(&available(), &labels);
        assert_eq!(tags.len(), 3);
        assert_eq!(tags[0].label, "Active");
        assert_eq!(tags[0].description, "Show active parts");
        assert_eq!(tags[0].value_label, "Yes");
        assert_eq!(tags[1].value_label, "No Stock");
        assert_eq!(tags[2].label, "old_key");
        assert_eq!(tags[2].value_label, "x");
    }

    #[test]
    fn test_controls_hidden_without_available_filters() {
        let state = FilterBarState::new("notifications", FilterSet::from_iter([("read", "1")]));
        let none = AvailableFilters::new();
        assert!(!state.show_add_controls(&none));
        assert!(!state.show_clear(&none));
        assert!(state.show_clear(&available()));

        let empty = FilterBarState::new("parts", FilterSet::new());
        assert!(!empty.show_clear(&available()));
    }
}
