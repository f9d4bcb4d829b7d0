//! The table side of the filter bar: something that can be re-queried and
//! exposes the rows it currently shows.

use gloo_net::http::Request;
use leptos::prelude::*;
use serde_json::Value;

use super::filter_set::FilterSet;
use super::query::{merge_query, to_query_string};
use super::store::FilterStore;
use crate::shared::api_utils::api_url;
use crate::shared::error::FilterError;

pub trait ReloadableTable: Send + Sync {
    /// Re-issue the data query. `None` reuses the persisted filters.
    fn reload(&self, filters: Option<FilterSet>);

    /// Rows already fetched by the client
    fn rows(&self) -> Vec<Value>;

    /// Rows the user selected, all rows when the table has no selection
    fn selected_rows(&self) -> Vec<Value> {
        self.rows()
    }
}

/// Table backed by a JSON list endpoint.
///
/// Reloads are fire-and-forget: overlapping requests are not ordered and the
/// last response to arrive wins.
#[derive(Clone)]
pub struct RemoteTable {
    table_key: String,
    path: String,
    overrides: FilterSet,
    store: FilterStore,
    pub rows: RwSignal<Vec<Value>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl RemoteTable {
    pub fn new(table_key: &str, path: &str) -> Self {
        Self {
            table_key: table_key.to_lowercase(),
            path: path.to_string(),
            overrides: FilterSet::new(),
            store: FilterStore::session(),
            rows: RwSignal::new(Vec::new()),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    /// Parameters sent with every request regardless of user filters
    pub fn with_overrides(mut self, overrides: FilterSet) -> Self {
        self.overrides = overrides;
        self
    }

    pub fn table_key(&self) -> &str {
        &self.table_key
    }

    fn request_url(&self, filters: &FilterSet) -> Result<String, FilterError> {
        let query = to_query_string(&merge_query(filters, &self.overrides))?;
        let url = api_url(&self.path);
        if query.is_empty() {
            Ok(url)
        } else {
            Ok(format!("{}?{}", url, query))
        }
    }
}

async fn fetch_rows(url: &str) -> Result<Vec<Value>, FilterError> {
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
        .json::<Vec<Value>>()
        .await
        .map_err(|e| request_error(e.to_string()))
}

impl ReloadableTable for RemoteTable {
    fn reload(&self, filters: Option<FilterSet>) {
        let filters = filters.unwrap_or_else(|| self.store.load(&self.table_key));
        let url = match self.request_url(&filters) {
            Ok(url) => url,
            Err(e) => {
                log::error!("Cannot reload '{}': {}", self.table_key, e);
                self.error.set(Some(e.to_string()));
                return;
            }
        };

        let rows = self.rows;
        let loading = self.loading;
        let error = self.error;
        log::debug!("Loading '{}' from {}", self.table_key, url);

        wasm_bindgen_futures::spawn_local(async move {
            loading.set(true);
            error.set(None);
            match fetch_rows(&url).await {
                Ok(data) => {
                    log::debug!("Loaded {} rows from {}", data.len(), url);
                    rows.set(data);
                }
                Err(e) => {
                    log::error!("{}", e);
                    error.set(Some(e.to_string()));
                }
            }
            loading.set(false);
        });
    }

    fn rows(&self) -> Vec<Value> {
        self.rows.get_untracked()
    }
}
