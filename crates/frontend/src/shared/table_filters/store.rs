//! Session-scoped persistence of one [`FilterSet`] per table.

use std::collections::BTreeMap;
use std::sync::Arc;

use super::filter_set::{parse_filter_string, FilterSet, ParsedFilters};
use super::storage::{KeyValueStorage, SessionStorage};
use crate::shared::config::config;

#[derive(Debug, Clone)]
pub struct FilterStore<S = SessionStorage> {
    storage: S,
    key_prefix: Arc<str>,
    defaults: Arc<BTreeMap<String, String>>,
}

impl FilterStore<SessionStorage> {
    /// Store over `sessionStorage`, configured from the embedded config.
    pub fn session() -> Self {
        let cfg = config();
        Self::new(
            SessionStorage,
            &cfg.storage.key_prefix,
            cfg.defaults.clone(),
        )
    }
}

impl<S: KeyValueStorage> FilterStore<S> {
    pub fn new(storage: S, key_prefix: &str, defaults: BTreeMap<String, String>) -> Self {
        Self {
            storage,
            key_prefix: Arc::from(key_prefix),
            defaults: Arc::new(
                defaults
                    .into_iter()
                    .map(|(k, v)| (k.to_lowercase(), v))
                    .collect(),
            ),
        }
    }

    pub fn storage_key(&self, table_key: &str) -> String {
        format!("{}{}", self.key_prefix, table_key.to_lowercase())
    }

    /// Default filter string for a table, used until the first write.
    pub fn default_filters(&self, table_key: &str) -> &str {
        self.defaults
            .get(&table_key.to_lowercase())
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn load(&self, table_key: &str) -> FilterSet {
        self.load_parsed(table_key).filters
    }

    /// Like [`load`](Self::load), keeping the dropped segments. One warning is
    /// logged per dropped segment.
    pub fn load_parsed(&self, table_key: &str) -> ParsedFilters {
        let key = self.storage_key(table_key);
        let raw = self
            .storage
            .get_item(&key)
            .unwrap_or_else(|| self.default_filters(table_key).to_string());

        let parsed = parse_filter_string(&raw);
        for segment in &parsed.rejected {
            log::warn!("Ignoring malformed filter '{}' in '{}'", segment, key);
        }
        parsed
    }

    pub fn save(&self, table_key: &str, filters: &FilterSet) {
        let key = self.storage_key(table_key);
        if let Err(e) = self.storage.set_item(&key, &filters.to_filter_string()) {
            log::warn!("Filters for '{}' not saved: {}", table_key, e);
        }
    }

    /// Set one filter. Key and value are trimmed, as they are when stored.
    pub fn add(&self, table_key: &str, filter_key: &str, value: &str) -> FilterSet {
        let mut filters = self.load(table_key);
        filters.insert(filter_key.trim(), value.trim());
        self.save(table_key, &filters);
        filters
    }

    pub fn remove(&self, table_key: &str, filter_key: &str) -> FilterSet {
        let mut filters = self.load(table_key);
        filters.remove(filter_key.trim());
        self.save(table_key, &filters);
        filters
    }

    /// Drop every filter. The empty set is persisted, so defaults do not come back.
    pub fn clear(&self, table_key: &str) -> FilterSet {
        let filters = FilterSet::new();
        self.save(table_key, &filters);
        filters
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::table_filters::storage::MemoryStorage;

    fn store() -> (MemoryStorage, FilterStore<MemoryStorage>) {
        let storage = MemoryStorage::new();
        let defaults = BTreeMap::from([
            ("parts".to_string(), "cascade=1".to_string()),
            ("Stock".to_string(), "cascade=1&in_stock=1".to_string()),
        ]);
        let store = FilterStore::new(storage.clone(), "table-filters-", defaults);
        (storage, store)
    }

    #[test]
    fn test_storage_key_is_lowercased() {
        let (_, store) = store();
        assert_eq!(store.storage_key("SalesOrder"), "table-filters-salesorder");
    }

    #[test]
    fn test_load_uses_defaults_before_first_save() {
        let (_, store) = store();
        assert_eq!(store.load("parts"), FilterSet::from_iter([("cascade", "1")]));
        assert_eq!(
            store.load("STOCK"),
            FilterSet::from_iter([("cascade", "1"), ("in_stock", "1")])
        );
        assert!(store.load("bom").is_empty());
    }

    #[test]
    fn test_round_trip_through_storage() {
        let (_, store) = store();
        let filters = FilterSet::from_iter([("category", "4"), ("has_stock", "true")]);
        store.save("parts", &filters);
        assert_eq!(store.load("parts"), filters);
    }

    #[test]
    fn test_clear_is_idempotent_and_persists_empty_string() {
        let (storage, store) = store();
        assert!(store.clear("parts").is_empty());
        assert!(store.clear("parts").is_empty());
        assert_eq!(
            storage.get_item("table-filters-parts").as_deref(),
            Some("")
        );
        assert!(store.load("parts").is_empty());
    }

    #[test]
    fn test_add_overwrites() {
        let (_, store) = store();
        store.add("bom", "k", "1");
        store.add("bom", "k", "2");
        assert_eq!(store.load("bom"), FilterSet::from_iter([("k", "2")]));
    }

    #[test]
    fn test_remove_absent_key_is_noop() {
        let (_, store) = store();
        store.add("bom", "sub_part_trackable", "true");
        let filters = store.remove("bom", "missing");
        assert_eq!(filters, FilterSet::from_iter([("sub_part_trackable", "true")]));
        assert_eq!(store.load("bom"), filters);
    }

    #[test]
    fn test_malformed_stored_string_is_tolerated() {
        let (storage, store) = store();
        storage.set_item("table-filters-build", "a=1&bad&c=3").unwrap();
        assert_eq!(
            store.load("build"),
            FilterSet::from_iter([("a", "1"), ("c", "3")])
        );

        let parsed = store.load_parsed("build");
        assert_eq!(parsed.rejected, vec!["bad".to_string()]);
    }

    #[test]
    fn test_add_returns_what_is_stored() {
        let (_, store) = store();
        let returned = store.add("bom", " k ", " v ");
        assert_eq!(returned, FilterSet::from_iter([("k", "v")]));
        assert_eq!(returned, store.load("bom"));
    }

    #[test]
    fn test_remove_trims_key() {
        let (_, store) = store();
        store.add("bom", "k", "1");
        store.add("bom", "j", "2");
        let filters = store.remove("bom", " k ");
        assert_eq!(filters, FilterSet::from_iter([("j", "2")]));
        assert_eq!(store.load("bom"), filters);
    }

    #[test]
    fn test_tables_are_independent() {
        let (_, store) = store();
        store.add("salesorder", "outstanding", "true");
        assert!(store.load("purchaseorder").is_empty());
        assert_eq!(store.load("parts"), FilterSet::from_iter([("cascade", "1")]));
    }

    #[test]
    fn test_parts_table_lifecycle() {
        let (_, store) = store();
        assert_eq!(store.load("parts"), FilterSet::from_iter([("cascade", "1")]));

        let filters = store.add("parts", "active", "1");
        assert_eq!(filters, FilterSet::from_iter([("cascade", "1"), ("active", "1")]));

        let filters = store.remove("parts", "cascade");
        assert_eq!(filters, FilterSet::from_iter([("active", "1")]));

        assert!(store.clear("parts").is_empty());
        assert!(store.load("parts").is_empty());
    }
}
