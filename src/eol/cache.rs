//! Disk-backed TTL cache for lifecycle data
//!
//! One JSON file per product key, holding a [`CacheEntry`] envelope with the
//! fetch timestamp. Entries older than the TTL, and entries that fail to
//! parse, are treated as misses. There is no never-expire mode.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::eol::error::CacheError;
use crate::eol::types::{CacheEntry, EolCycle};

pub struct Cache {
    cache_dir: PathBuf,
    ttl_ms: i64,
}

impl Cache {
    pub fn new(cache_dir: impl Into<PathBuf>, ttl_ms: i64) -> Result<Self, CacheError> {
        let cache_dir = cache_dir.into();
        info!("Initializing EOL cache at {:?}", cache_dir);

        fs::create_dir_all(&cache_dir).map_err(|source| CacheError::CreateDir {
            path: cache_dir.clone(),
            source,
        })?;

        Ok(Self { cache_dir, ttl_ms })
    }

    /// Get current timestamp in milliseconds since UNIX epoch
    fn current_timestamp_ms() -> i64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("system time before UNIX epoch")
            .as_millis() as i64
    }

    fn entry_path(&self, product: &str) -> PathBuf {
        self.cache_dir.join(format!("{product}.json"))
    }

    /// Returns the cached cycles for a product, or `None` when there is no
    /// entry, the entry is corrupt, or the entry is older than the TTL.
    pub fn get(&self, product: &str) -> Option<Vec<EolCycle>> {
        self.get_at(product, Self::current_timestamp_ms())
    }

    fn get_at(&self, product: &str, now_ms: i64) -> Option<Vec<EolCycle>> {
        let path = self.entry_path(product);

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                warn!("Failed to read cache for {}: {}", product, e);
                return None;
            }
        };

        let entry: CacheEntry = match serde_json::from_str(&content) {
            Ok(entry) => entry,
            Err(e) => {
                // Corrupt cache file: treat as a miss so the caller refetches
                warn!("Failed to parse cache for {}: {}", product, e);
                return None;
            }
        };

        if now_ms - entry.timestamp > self.ttl_ms {
            debug!("Cache entry for {} expired", product);
            return None;
        }

        Some(entry.data)
    }

    /// Persists the cycles for a product, overwriting any prior entry.
    /// A write failure degrades silently: the caller still has the fresh
    /// data for the current call, the cache just is not durably updated.
    pub fn set(&self, product: &str, data: &[EolCycle]) {
        let entry = CacheEntry {
            product: product.to_string(),
            timestamp: Self::current_timestamp_ms(),
            data: data.to_vec(),
        };

        let json = match serde_json::to_string_pretty(&entry) {
            Ok(json) => json,
            Err(e) => {
                warn!("Failed to serialize cache entry for {}: {}", product, e);
                return;
            }
        };

        if let Err(e) = fs::write(self.entry_path(product), json) {
            warn!("Failed to write cache for {}: {}", product, e);
        }
    }

    /// Removes one product's entry; no-op if it does not exist
    pub fn invalidate(&self, product: &str) -> Result<(), CacheError> {
        let path = self.entry_path(product);
        match fs::remove_file(&path) {
            Ok(()) => {
                debug!("Invalidated cache entry for {}", product);
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(CacheError::Remove { path, source }),
        }
    }

    /// Removes all entries for all products
    pub fn clear(&self) -> Result<(), CacheError> {
        let entries = match fs::read_dir(&self.cache_dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
            Err(source) => {
                return Err(CacheError::Remove {
                    path: self.cache_dir.clone(),
                    source,
                });
            }
        };

        for entry in entries.flatten() {
            let path = entry.path();
            if let Err(source) = fs::remove_file(&path) {
                return Err(CacheError::Remove { path, source });
            }
        }

        info!("Cleared EOL cache at {:?}", self.cache_dir);
        Ok(())
    }

    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }
}
