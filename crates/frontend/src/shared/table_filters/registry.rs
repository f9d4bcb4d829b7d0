use std::collections::HashMap;

use contracts::shared::table_filters::TableFilterMetadata;
use gloo_net::http::Request;
use indexmap::IndexMap;

use super::definition::FilterDefinition;
use crate::shared::api_utils::api_url;
use crate::shared::error::FilterError;

/// Filter key -> definition, in the order the picker lists them
pub type AvailableFilters = IndexMap<String, FilterDefinition>;

/// Source of the filters a table can be filtered by.
///
/// Implementations must return the same mapping for the same key within one render.
pub trait FilterRegistry: Send + Sync {
    fn available_filters(&self, table_key: &str) -> AvailableFilters;
}

/// Registry with a fixed set of definitions per table.
///
/// Table keys are matched case-insensitively; unknown tables have no filters.
#[derive(Debug, Clone, Default)]
pub struct StaticFilterRegistry {
    tables: HashMap<String, AvailableFilters>,
}

impl StaticFilterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_table<I, K>(mut self, table_key: &str, filters: I) -> Self
    where
        I: IntoIterator<Item = (K, FilterDefinition)>,
        K: Into<String>,
    {
        self.insert_table(table_key, filters.into_iter().map(|(k, d)| (k.into(), d)).collect());
        self
    }

    pub fn insert_table(&mut self, table_key: &str, filters: AvailableFilters) {
        self.tables.insert(table_key.to_lowercase(), filters);
    }
}

impl FilterRegistry for StaticFilterRegistry {
    fn available_filters(&self, table_key: &str) -> AvailableFilters {
        self.tables
            .get(&table_key.to_lowercase())
            .cloned()
            .unwrap_or_default()
    }
}

impl From<TableFilterMetadata> for StaticFilterRegistry {
    fn from(meta: TableFilterMetadata) -> Self {
        let filters = meta
            .filters
            .into_iter()
            .map(|(key, dto)| (key, FilterDefinition::from(dto)))
            .collect();
        let mut registry = Self::new();
        registry.insert_table(&meta.table_key, filters);
        registry
    }
}

async fn request_metadata(url: &str) -> Result<TableFilterMetadata, FilterError> {
    let request_error = |message: String| FilterError::Request {
        url: url.to_string(),
        message,
    };

    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| request_error(e.to_string()))?;
    if !response.ok() {
        return Err(request_error(format!("status {}", response.status())));
    }
    response
        .json::<TableFilterMetadata>()
        .await
        .map_err(|e| request_error(e.to_string()))
}

/// Fetch the filter definitions of one table from the backend.
///
/// Any failure degrades to "no filters for this table".
pub async fn fetch_filter_metadata(endpoint: &str, table_key: &str) -> StaticFilterRegistry {
    let table_key = table_key.to_lowercase();
    let url = api_url(&format!("{}/{}/", endpoint.trim_end_matches('/'), table_key));

    match request_metadata(&url).await {
        Ok(mut meta) => {
            log::debug!("Loaded {} filters for '{}'", meta.filters.len(), table_key);
            // the response is stored under the key that was asked for
            meta.table_key = table_key;
            StaticFilterRegistry::from(meta)
        }
        Err(e) => {
            log::error!("Filter metadata unavailable: {}", e);
            StaticFilterRegistry::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::table_filters::definition::FilterKind;

    #[test]
    fn test_unknown_table_has_no_filters() {
        let registry = StaticFilterRegistry::new()
            .with_table("parts", [("active", FilterDefinition::boolean("Active"))]);
        assert!(registry.available_filters("bom").is_empty());
        assert_eq!(registry.available_filters("PARTS").len(), 1);
    }

    #[test]
    fn test_from_metadata_keeps_order() {
        let meta: TableFilterMetadata = serde_json::from_str(
            r#"{
                "table_key": "SalesOrder",
                "filters": {
                    "outstanding": {"title": "Outstanding", "type": "bool"},
                    "target_date": {"title": "Target date", "type": "date"},
                    "reference": {"title": "Reference"}
                }
            }"#,
        )
        .unwrap();
        let registry = StaticFilterRegistry::from(meta);
        let filters = registry.available_filters("salesorder");
        let keys: Vec<_> = filters.keys().cloned().collect();
        assert_eq!(keys, vec!["outstanding", "target_date", "reference"]);
        assert!(matches!(filters["target_date"].kind, FilterKind::Date));
        assert!(matches!(filters["reference"].kind, FilterKind::Text));
    }
}
