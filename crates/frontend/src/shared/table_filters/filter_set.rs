//! Filter sets and their `key1=value1&key2=value2` storage format.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Active filters of one table: filter key -> filter value.
///
/// Keeps insertion order so the stored string is stable between saves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterSet(IndexMap<String, String>);

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Set a filter value. An existing key keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.shift_remove(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Serialize to the storage format. Keys and values are trimmed.
    pub fn to_filter_string(&self) -> String {
        self.0
            .iter()
            .map(|(k, v)| format!("{}={}", k.trim(), v.trim()))
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FilterSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = FilterSet::new();
        for (k, v) in iter {
            set.insert(k, v);
        }
        set
    }
}

/// Result of parsing a stored filter string
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedFilters {
    pub filters: FilterSet,
    /// Segments that were dropped, trimmed
    pub rejected: Vec<String>,
}

/// Parse `key1=value1&key2=value2`.
///
/// Never fails: a segment that is not exactly `key=value` with a non-empty key
/// is collected in `rejected` and skipped.
pub fn parse_filter_string(raw: &str) -> ParsedFilters {
    let mut parsed = ParsedFilters::default();

    for segment in raw.split('&').map(str::trim).filter(|s| !s.is_empty()) {
        match segment.split_once('=') {
            Some((key, value)) if !key.trim().is_empty() && !value.contains('=') => {
                parsed.filters.insert(key.trim(), value.trim());
            }
            _ => parsed.rejected.push(segment.to_string()),
        }
    }

    parsed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let parsed = parse_filter_string("cascade=1&in_stock=1");
        assert!(parsed.rejected.is_empty());
        assert_eq!(parsed.filters.get("cascade"), Some("1"));
        assert_eq!(parsed.filters.get("in_stock"), Some("1"));
        assert_eq!(parsed.filters.len(), 2);
    }

    #[test]
    fn test_parse_trims_and_skips_empty_segments() {
        let parsed = parse_filter_string(" a = 1 && &b=2& ");
        assert!(parsed.rejected.is_empty());
        let pairs: Vec<_> = parsed.filters.iter().collect();
        assert_eq!(pairs, vec![("a", "1"), ("b", "2")]);
    }

    #[test]
    fn test_parse_rejects_malformed_segments() {
        let parsed = parse_filter_string("a=1&bad&c=3");
        assert_eq!(parsed.rejected, vec!["bad".to_string()]);
        assert_eq!(
            parsed.filters,
            FilterSet::from_iter([("a", "1"), ("c", "3")])
        );

        let parsed = parse_filter_string("=1&x=1=2&ok=");
        assert_eq!(parsed.rejected, vec!["=1".to_string(), "x=1=2".to_string()]);
        assert_eq!(parsed.filters.get("ok"), Some(""));
    }

    #[test]
    fn test_parse_empty_string() {
        assert_eq!(parse_filter_string(""), ParsedFilters::default());
    }

    #[test]
    fn test_round_trip() {
        let filters = FilterSet::from_iter([
            ("category", "12"),
            ("active", "true"),
            ("search", "resistor 10k"),
        ]);
        let parsed = parse_filter_string(&filters.to_filter_string());
        assert!(parsed.rejected.is_empty());
        assert_eq!(parsed.filters, filters);
    }

    #[test]
    fn test_insert_existing_key_keeps_position() {
        let mut filters = FilterSet::from_iter([("a", "1"), ("b", "2")]);
        filters.insert("a", "3");
        assert_eq!(filters.to_filter_string(), "a=3&b=2");
        filters.remove("a");
        assert_eq!(filters.to_filter_string(), "b=2");
    }
}
