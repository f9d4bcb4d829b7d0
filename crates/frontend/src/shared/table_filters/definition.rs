//! Filter definitions supplied by a [`FilterRegistry`](super::registry::FilterRegistry).

use std::fmt;
use std::sync::Arc;

use contracts::shared::table_filters::{FilterDefinitionDto, FilterValueType};
use indexmap::IndexMap;

pub use contracts::shared::table_filters::FilterOption;

/// Stored value -> option, in display order
pub type FilterOptions = IndexMap<String, FilterOption>;

pub type OptionsProvider = Arc<dyn Fn() -> FilterOptions + Send + Sync>;

/// Options of a choice filter: either fixed, or produced on demand.
#[derive(Clone)]
pub enum ChoiceOptions {
    Static(FilterOptions),
    Provider(OptionsProvider),
}

impl ChoiceOptions {
    pub fn provider(f: impl Fn() -> FilterOptions + Send + Sync + 'static) -> Self {
        Self::Provider(Arc::new(f))
    }

    /// Current options. A provider is called every time.
    pub fn resolve(&self) -> FilterOptions {
        match self {
            Self::Static(options) => options.clone(),
            Self::Provider(provider) => provider(),
        }
    }
}

impl fmt::Debug for ChoiceOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static(options) => f.debug_tuple("Static").field(options).finish(),
            Self::Provider(_) => f.write_str("Provider(..)"),
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ChoiceOptions {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::Static(
            iter.into_iter()
                .map(|(k, v)| {
                    let key = k.into();
                    (key.clone(), FilterOption::new(key, v))
                })
                .collect(),
        )
    }
}

#[derive(Debug, Clone)]
pub enum FilterKind {
    Text,
    Bool,
    Date,
    Choice(ChoiceOptions),
}

#[derive(Debug, Clone)]
pub struct FilterDefinition {
    pub title: String,
    pub description: String,
    pub kind: FilterKind,
}

impl FilterDefinition {
    pub fn new(title: impl Into<String>, kind: FilterKind) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            kind,
        }
    }

    pub fn text(title: impl Into<String>) -> Self {
        Self::new(title, FilterKind::Text)
    }

    pub fn boolean(title: impl Into<String>) -> Self {
        Self::new(title, FilterKind::Bool)
    }

    pub fn date(title: impl Into<String>) -> Self {
        Self::new(title, FilterKind::Date)
    }

    pub fn choice(title: impl Into<String>, options: ChoiceOptions) -> Self {
        Self::new(title, FilterKind::Choice(options))
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

impl From<FilterDefinitionDto> for FilterDefinition {
    fn from(dto: FilterDefinitionDto) -> Self {
        // Options make a choice filter whatever the declared type says
        let kind = match (dto.options, dto.value_type) {
            (Some(options), _) => FilterKind::Choice(ChoiceOptions::Static(options)),
            (None, FilterValueType::Bool) => FilterKind::Bool,
            (None, FilterValueType::Date) => FilterKind::Date,
            (None, FilterValueType::Choice) => {
                FilterKind::Choice(ChoiceOptions::Static(FilterOptions::new()))
            }
            (None, FilterValueType::Text) => FilterKind::Text,
        };

        Self {
            title: dto.title,
            description: dto.description,
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_provider_is_called_on_every_resolve() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let options = ChoiceOptions::provider(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            FilterOptions::from([("10".to_string(), FilterOption::new("10", "OK"))])
        });

        assert_eq!(options.resolve().len(), 1);
        assert_eq!(options.resolve()["10"].value, "OK");
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_from_dto() {
        let dto: FilterDefinitionDto = serde_json::from_str(
            r#"{"title": "Active", "description": "Show active parts", "type": "bool"}"#,
        )
        .unwrap();
        let def = FilterDefinition::from(dto);
        assert_eq!(def.title, "Active");
        assert_eq!(def.description, "Show active parts");
        assert!(matches!(def.kind, FilterKind::Bool));
    }

    #[test]
    fn test_dto_with_options_is_choice() {
        let dto: FilterDefinitionDto = serde_json::from_str(
            r#"{"title": "Status", "options": {"1": {"key": "1", "value": "In Stock"}}}"#,
        )
        .unwrap();
        match FilterDefinition::from(dto).kind {
            FilterKind::Choice(options) => {
                assert_eq!(options.resolve()["1"].value, "In Stock");
            }
            other => panic!("expected choice, got {:?}", other),
        }
    }
}
