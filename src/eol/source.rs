//! Lifecycle data retrieval: remote endoflife.date API behind a TTL cache

use std::time::Duration;

#[cfg(test)]
use mockall::automock;

use tracing::{debug, info, warn};

use crate::config::FETCH_TIMEOUT_MS;
use crate::eol::cache::Cache;
use crate::eol::error::DataSourceError;
use crate::eol::types::EolCycle;

/// Default base URL for the endoflife.date API
const DEFAULT_BASE_URL: &str = "https://endoflife.date/api";

/// Trait for fetching lifecycle cycles for an already-canonical product key
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait LifecycleSource: Send + Sync {
    /// Fetches all lifecycle cycles for a product.
    ///
    /// Single attempt per call: no retry loop, no backoff. Failures carry
    /// the product key so callers can report which component was affected.
    async fn fetch_cycles(&self, product: &str) -> Result<Vec<EolCycle>, DataSourceError>;
}

/// Remote implementation backed by the endoflife.date API
pub struct EndOfLifeApi {
    client: reqwest::Client,
    base_url: String,
}

impl EndOfLifeApi {
    /// Creates a client with a custom base URL (used by tests)
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent("eol-check")
                .timeout(Duration::from_millis(FETCH_TIMEOUT_MS))
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.to_string(),
        }
    }
}

impl Default for EndOfLifeApi {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait::async_trait]
impl LifecycleSource for EndOfLifeApi {
    async fn fetch_cycles(&self, product: &str) -> Result<Vec<EolCycle>, DataSourceError> {
        let url = format!("{}/{}.json", self.base_url, product);
        debug!("Fetching EOL data from {}", url);

        let response =
            self.client
                .get(&url)
                .send()
                .await
                .map_err(|source| DataSourceError::Network {
                    product: product.to_string(),
                    source,
                })?;

        let status = response.status();
        if !status.is_success() {
            warn!("EOL API returned status {}: {}", status, url);
            return Err(DataSourceError::BadStatus {
                product: product.to_string(),
                status,
            });
        }

        let cycles: Vec<EolCycle> =
            response
                .json()
                .await
                .map_err(|source| DataSourceError::InvalidResponse {
                    product: product.to_string(),
                    source,
                })?;

        Ok(cycles)
    }
}

/// Cache-aside lifecycle source: consults the [`Cache`] first and falls back
/// to the remote source on miss/expiry or when a refresh is forced.
pub struct EolDataSource<S: LifecycleSource> {
    remote: S,
    cache: Cache,
}

impl<S: LifecycleSource> EolDataSource<S> {
    pub fn new(remote: S, cache: Cache) -> Self {
        Self { remote, cache }
    }

    /// Returns lifecycle cycles for a product.
    ///
    /// With `force_refresh` false, a cache hit returns immediately with no
    /// remote call. Otherwise exactly one remote fetch is performed and a
    /// success is written back to the cache best-effort.
    pub async fn fetch(
        &self,
        product: &str,
        force_refresh: bool,
    ) -> Result<Vec<EolCycle>, DataSourceError> {
        if !force_refresh
            && let Some(cached) = self.cache.get(product)
        {
            debug!("Cache hit for {}", product);
            return Ok(cached);
        }

        let cycles = self.remote.fetch_cycles(product).await?;
        info!("Fetched {} cycles for {}", cycles.len(), product);

        self.cache.set(product, &cycles);
        Ok(cycles)
    }

    pub fn cache(&self) -> &Cache {
        &self.cache
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_CACHE_TTL_MS;
    use mockito::Server;
    use tempfile::TempDir;

    fn temp_cache(temp_dir: &TempDir) -> Cache {
        Cache::new(temp_dir.path().join("cache"), DEFAULT_CACHE_TTL_MS).unwrap()
    }

    #[tokio::test]
    async fn fetch_cycles_parses_api_response() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/nodejs.json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"[
                    {"cycle": "20", "releaseDate": "2023-04-18", "eol": "2026-04-30", "lts": "2023-10-24"},
                    {"cycle": "18", "releaseDate": "2022-04-19", "eol": "2025-04-30", "lts": "2022-10-25"}
                ]"#,
            )
            .create_async()
            .await;

        let api = EndOfLifeApi::new(&server.url());
        let cycles = api.fetch_cycles("nodejs").await.unwrap();

        mock.assert_async().await;
        assert_eq!(cycles.len(), 2);
        assert_eq!(cycles[0].cycle, "20");
        assert_eq!(cycles[1].eol.as_date(), Some("2025-04-30"));
    }

    #[tokio::test]
    async fn fetch_cycles_surfaces_non_success_status() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/no-such-product.json")
            .with_status(404)
            .create_async()
            .await;

        let api = EndOfLifeApi::new(&server.url());
        let result = api.fetch_cycles("no-such-product").await;

        mock.assert_async().await;
        match result {
            Err(DataSourceError::BadStatus { product, status }) => {
                assert_eq!(product, "no-such-product");
                assert_eq!(status, reqwest::StatusCode::NOT_FOUND);
            }
            other => panic!("expected BadStatus, got {:?}", other.map(|_| ())),
        }
    }

    #[tokio::test]
    async fn fetch_cycles_surfaces_malformed_body() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/nodejs.json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("{not valid json")
            .create_async()
            .await;

        let api = EndOfLifeApi::new(&server.url());
        let result = api.fetch_cycles("nodejs").await;

        mock.assert_async().await;
        assert!(matches!(
            result,
            Err(DataSourceError::InvalidResponse { .. })
        ));
    }

    #[tokio::test]
    async fn fetch_returns_cached_data_without_remote_call() {
        let temp_dir = TempDir::new().unwrap();
        let cache = temp_cache(&temp_dir);
        let cached = vec![EolCycle::new("18", "2025-04-30")];
        cache.set("nodejs", &cached);

        let mut remote = MockLifecycleSource::new();
        remote.expect_fetch_cycles().never();

        let source = EolDataSource::new(remote, cache);
        let cycles = source.fetch("nodejs", false).await.unwrap();

        assert_eq!(cycles, cached);
    }

    #[tokio::test]
    async fn fetch_hits_remote_on_cache_miss_and_writes_back() {
        let temp_dir = TempDir::new().unwrap();
        let cache = temp_cache(&temp_dir);

        let fetched = vec![EolCycle::new("18", "2025-04-30")];
        let returned = fetched.clone();
        let mut remote = MockLifecycleSource::new();
        remote
            .expect_fetch_cycles()
            .times(1)
            .returning(move |_| Ok(returned.clone()));

        let source = EolDataSource::new(remote, cache);
        let cycles = source.fetch("nodejs", false).await.unwrap();

        assert_eq!(cycles, fetched);
        // The successful fetch must now be served from cache
        assert_eq!(source.cache().get("nodejs"), Some(fetched));
    }

    #[tokio::test]
    async fn fetch_with_force_refresh_bypasses_cache() {
        let temp_dir = TempDir::new().unwrap();
        let cache = temp_cache(&temp_dir);
        cache.set("nodejs", &[EolCycle::new("16", true)]);

        let fresh = vec![EolCycle::new("18", "2025-04-30")];
        let returned = fresh.clone();
        let mut remote = MockLifecycleSource::new();
        remote
            .expect_fetch_cycles()
            .times(1)
            .returning(move |_| Ok(returned.clone()));

        let source = EolDataSource::new(remote, cache);
        let cycles = source.fetch("nodejs", true).await.unwrap();

        assert_eq!(cycles, fresh.clone());
        assert_eq!(source.cache().get("nodejs"), Some(fresh));
    }

    #[tokio::test]
    async fn fetch_propagates_remote_failure() {
        let temp_dir = TempDir::new().unwrap();
        let cache = temp_cache(&temp_dir);

        let mut remote = MockLifecycleSource::new();
        remote.expect_fetch_cycles().times(1).returning(|product| {
            Err(DataSourceError::BadStatus {
                product: product.to_string(),
                status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            })
        });

        let source = EolDataSource::new(remote, cache);
        let result = source.fetch("nodejs", false).await;

        assert!(matches!(&result, Err(DataSourceError::BadStatus { .. })));
        assert_eq!(result.unwrap_err().product(), "nodejs");
    }
}
