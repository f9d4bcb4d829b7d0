use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::BTreeMap;

use super::error::FilterError;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    /// Cold-start filter strings per table key
    #[serde(default)]
    pub defaults: BTreeMap<String, String>,
    #[serde(default)]
    pub labels: BoolLabels,
    #[serde(default)]
    pub registry: RegistryConfig,
    #[serde(default)]
    pub notifications: NotificationsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    pub key_prefix: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            key_prefix: "table-filters-".to_string(),
        }
    }
}

/// Labels of the boolean filter select and of boolean tags.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct BoolLabels {
    pub bool_true: String,
    pub bool_false: String,
}

impl Default for BoolLabels {
    fn default() -> Self {
        Self {
            bool_true: "Yes".to_string(),
            bool_false: "No".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum RegistrySource {
    /// Definitions compiled into the frontend
    #[default]
    Builtin,
    /// Definitions fetched from the backend per table
    Remote,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RegistryConfig {
    pub source: RegistrySource,
    pub endpoint: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            source: RegistrySource::Builtin,
            endpoint: "/api/table-filters".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct NotificationsConfig {
    pub endpoint: String,
    pub interval_ms: u32,
    pub tick_threshold: u32,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            endpoint: "/api/notifications/unread/".to_string(),
            interval_ms: 1000,
            tick_threshold: 5,
        }
    }
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[storage]
key_prefix = "table-filters-"

[defaults]
stock = "cascade=1&in_stock=1"
parts = "cascade=1"
build = ""
company = ""
salesorder = ""
purchaseorder = ""

[labels]
bool_true = "Yes"
bool_false = "No"

[registry]
source = "builtin"
endpoint = "/api/table-filters"

[notifications]
endpoint = "/api/notifications/unread/"
interval_ms = 1000
tick_threshold = 5
"#;

/// Parse configuration from TOML text
pub fn parse_config(contents: &str) -> Result<Config, FilterError> {
    let mut config: Config = toml::from_str(contents)?;
    // table keys are case-insensitive everywhere else
    config.defaults = config
        .defaults
        .into_iter()
        .map(|(k, v)| (k.to_lowercase(), v))
        .collect();
    Ok(config)
}

/// Load the embedded configuration.
///
/// Falls back to built-in defaults (no default filters) if the embedded text is broken.
pub fn load_config() -> Config {
    match parse_config(DEFAULT_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Using fallback configuration: {}", e);
            Config::default()
        }
    }
}

static CONFIG: Lazy<Config> = Lazy::new(load_config);

pub fn config() -> &'static Config {
    &CONFIG
}
