//! Best-effort refresh of AI model deprecation data
//!
//! Providers publish deprecations as documentation pages, so this crawls
//! Anthropic's deprecation page and folds extracted dates back into the
//! in-memory tables. The refresh is advisory only: any failure (network,
//! parse mismatch, zero matches) leaves the curated static data
//! authoritative and is never surfaced to the caller.

use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;
use tracing::debug;

use crate::ai::models;
use crate::config::REFRESH_TIMEOUT_MS;

const ANTHROPIC_DEPRECATIONS_URL: &str =
    "https://docs.anthropic.com/en/docs/resources/model-deprecations";

/// Matches deprecation sections of the form
/// `### YYYY-MM-DD: Title` followed by a fenced model id block
static SECTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)### (\d{4}-\d{2}-\d{2}): ([^\n]*).*?```\n(.*?)\n```")
        .expect("invalid deprecation section regex")
});

/// Refreshes deprecation data for all crawlable providers. Failures are
/// swallowed; callers cannot observe whether the refresh did anything.
pub async fn refresh_model_data() {
    let _ = fetch_anthropic_deprecations(ANTHROPIC_DEPRECATIONS_URL).await;
}

async fn fetch_anthropic_deprecations(url: &str) -> Result<(), reqwest::Error> {
    let client = reqwest::Client::builder()
        .user_agent("eol-check")
        .timeout(Duration::from_millis(REFRESH_TIMEOUT_MS))
        .build()?;

    let html = client.get(url).send().await?.text().await?;

    let mut applied = 0usize;
    for captures in SECTION.captures_iter(&html) {
        let date = &captures[1];
        let model_id = captures[3].trim();
        if model_id.is_empty() {
            continue;
        }

        models::apply_deprecation("anthropic", model_id, date);
        applied += 1;
    }

    debug!("Applied {} crawled deprecation entries", applied);
    Ok(())
}
