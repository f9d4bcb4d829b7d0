use super::filter_set::FilterSet;
use crate::shared::error::FilterError;

/// Query parameters for a table fetch.
///
/// Hard-coded `overrides` always win over user filters with the same key.
pub fn merge_query(filters: &FilterSet, overrides: &FilterSet) -> FilterSet {
    let mut params = filters.clone();
    for (key, value) in overrides.iter() {
        params.insert(key, value);
    }
    params
}

pub fn to_query_string(params: &FilterSet) -> Result<String, FilterError> {
    Ok(serde_qs::to_string(params)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_win() {
        let filters = FilterSet::from_iter([("cascade", "1"), ("category", "3")]);
        let overrides = FilterSet::from_iter([("category", "7"), ("part_detail", "true")]);
        let params = merge_query(&filters, &overrides);
        assert_eq!(params.get("category"), Some("7"));
        assert_eq!(params.get("cascade"), Some("1"));
        assert_eq!(params.get("part_detail"), Some("true"));
        assert_eq!(params.len(), 3);
    }

    #[test]
    fn test_query_string_is_encoded() {
        let params = FilterSet::from_iter([("search", "10k resistor"), ("active", "true")]);
        let query = to_query_string(&params).unwrap();
        assert!(query.starts_with("search=10k"));
        assert!(query.ends_with("&active=true"));
        assert!(!query.contains(' '));
    }
}
