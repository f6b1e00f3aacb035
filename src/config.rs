use std::path::PathBuf;

// =============================================================================
// Time-related constants
// =============================================================================

/// Default cache TTL in milliseconds (24 hours)
pub const DEFAULT_CACHE_TTL_MS: i64 = 24 * 60 * 60 * 1000;

/// Timeout for remote EOL data fetches in milliseconds (30 seconds)
pub const FETCH_TIMEOUT_MS: u64 = 30_000;

/// Timeout for the best-effort AI deprecation crawl in milliseconds (5 seconds)
pub const REFRESH_TIMEOUT_MS: u64 = 5_000;

/// Returns the path to the cache directory for eol-check.
/// Uses $XDG_CACHE_HOME/eol-check if XDG_CACHE_HOME is set,
/// otherwise falls back to ~/.cache/eol-check,
/// or ./eol-check if neither is available.
pub fn cache_dir() -> PathBuf {
    cache_dir_with_env(std::env::var("XDG_CACHE_HOME").ok(), dirs::home_dir())
}

fn cache_dir_with_env(xdg_cache_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let cache_dir = xdg_cache_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".cache")))
        .unwrap_or_else(|| PathBuf::from("."));

    cache_dir.join("eol-check")
}
