use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("failed to create cache directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to remove cache entry {path}: {source}")]
    Remove {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A remote lifecycle fetch failed. Every variant carries the product key so
/// callers can report which component could not be checked.
#[derive(Debug, Error)]
pub enum DataSourceError {
    #[error("network error fetching EOL data for {product}: {source}")]
    Network {
        product: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("EOL API returned status {status} for {product}")]
    BadStatus {
        product: String,
        status: reqwest::StatusCode,
    },

    #[error("invalid EOL API response for {product}: {source}")]
    InvalidResponse {
        product: String,
        #[source]
        source: reqwest::Error,
    },
}

impl DataSourceError {
    /// The product key the failed fetch was for
    pub fn product(&self) -> &str {
        match self {
            DataSourceError::Network { product, .. }
            | DataSourceError::BadStatus { product, .. }
            | DataSourceError::InvalidResponse { product, .. } => product,
        }
    }
}
