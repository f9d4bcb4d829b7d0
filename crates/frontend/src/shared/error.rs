use thiserror::Error;

/// Errors raised by the filter subsystem and its browser collaborators.
///
/// None of these are fatal: UI entry points log them and keep going.
#[derive(Debug, Error)]
pub enum FilterError {
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("browser storage is not available")]
    StorageUnavailable,

    #[error("failed to write storage key '{key}': {message}")]
    StorageWrite { key: String, message: String },

    #[error("container '{0}' not found")]
    ContainerNotFound(String),

    #[error("request to {url} failed: {message}")]
    Request { url: String, message: String },

    #[error("failed to encode query: {0}")]
    Query(#[from] serde_qs::Error),

    #[error("export failed: {0}")]
    Export(String),

    #[error("no rows to {0}")]
    NoRows(&'static str),
}
