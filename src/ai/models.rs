//! AI model lifecycle resolution
//!
//! Resolves a (provider, model) pair against the curated tables in
//! [`crate::ai::data`]. The tables live for the process lifetime behind a
//! single `RwLock`; readers clone record vectors out, and the background
//! deprecation refresh replaces whole records under the write lock, so a
//! concurrent reader sees either the pre- or post-refresh record but never a
//! partially written one.

use std::collections::HashMap;
use std::sync::{LazyLock, PoisonError, RwLock};

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::ai::data::{self, ModelTable};
use crate::eol::types::{DateFlag, EolCycle};

/// One lifecycle record for an AI model variant.
///
/// Structurally a trimmed [`EolCycle`] plus deprecation metadata. Unlike
/// product cycles these records can be updated in place by the background
/// refresh; callers must not assume they are immutable for the process
/// lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiModelCycle {
    /// Version/variant identifier (e.g. "0613", "latest", "8b")
    pub cycle: String,
    /// Release date in YYYY-MM-DD format, or "unknown"
    pub release_date: String,
    pub eol: DateFlag,
    /// Whether this is a recommended/stable variant
    pub lts: bool,
    /// Officially deprecated: still works but not recommended
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<bool>,
    /// Recommended replacement model
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replacement: Option<String>,
}

impl From<AiModelCycle> for EolCycle {
    fn from(cycle: AiModelCycle) -> Self {
        let mut converted = EolCycle::new(cycle.cycle, cycle.eol);
        converted.release_date = cycle.release_date;
        converted.lts = DateFlag::Flag(cycle.lts);
        converted
    }
}

static MODEL_TABLES: LazyLock<RwLock<HashMap<String, ModelTable>>> =
    LazyLock::new(|| RwLock::new(data::all_tables()));

static DATE_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-\d{8}$").expect("invalid date suffix regex"));

/// Provider key → display name
static PROVIDER_NAMES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("openai", "OpenAI"),
        ("anthropic", "Anthropic"),
        ("google", "Google"),
        ("meta", "Meta"),
        ("mistral", "Mistral AI"),
        ("cohere", "Cohere"),
    ])
});

/// Resolves lifecycle records for an AI model.
///
/// Provider lookup is case-insensitive. Model lookup tries an exact key
/// match first, then a normalized form (lowercased, trailing 8-digit date
/// suffix stripped) compared case-insensitively against the table keys.
/// Returns `None` for unknown providers or models.
pub fn resolve(provider: &str, model: &str) -> Option<Vec<AiModelCycle>> {
    // Records are only ever replaced wholesale under the write lock, so the
    // tables stay consistent even after a writer panic; recover and read on
    let tables = MODEL_TABLES.read().unwrap_or_else(PoisonError::into_inner);
    let provider_models = tables.get(&provider.to_lowercase())?;

    if let Some(cycles) = provider_models.get(model) {
        return Some(cycles.clone());
    }

    let normalized = DATE_SUFFIX.replace(&model.to_lowercase(), "").into_owned();
    provider_models
        .iter()
        .find(|(key, _)| key.to_lowercase() == normalized)
        .map(|(_, cycles)| cycles.clone())
}

/// All model keys for a provider; empty for unknown providers
pub fn list_models(provider: &str) -> Vec<String> {
    let tables = MODEL_TABLES.read().unwrap_or_else(PoisonError::into_inner);
    tables
        .get(&provider.to_lowercase())
        .map(|models| {
            let mut keys: Vec<String> = models.keys().cloned().collect();
            keys.sort();
            keys
        })
        .unwrap_or_default()
}

/// All known provider keys
pub fn list_providers() -> Vec<String> {
    let tables = MODEL_TABLES.read().unwrap_or_else(PoisonError::into_inner);
    let mut providers: Vec<String> = tables.keys().cloned().collect();
    providers.sort();
    providers
}

/// Display name for a provider key
pub fn provider_display_name(provider: &str) -> Option<&'static str> {
    PROVIDER_NAMES.get(provider.to_lowercase().as_str()).copied()
}

/// Records one crawled deprecation for a provider's model.
///
/// If the model id is known, the record whose cycle matches the id (falling
/// back to the "latest" record) is replaced wholesale with `eol` set to the
/// crawled date and `deprecated = true`; if no cycle matches, a new record
/// is appended. A previously unseen model id gets a fresh table entry with
/// `release_date = "unknown"`.
pub(crate) fn apply_deprecation(provider: &str, model_id: &str, eol_date: &str) {
    let mut tables = MODEL_TABLES.write().unwrap_or_else(PoisonError::into_inner);
    let Some(provider_models) = tables.get_mut(provider) else {
        return;
    };

    let cycles = provider_models.entry(model_id.to_string()).or_default();

    let slot = cycles
        .iter()
        .position(|c| c.cycle == model_id)
        .or_else(|| cycles.iter().position(|c| c.cycle == "latest"));

    match slot {
        Some(index) => {
            // Replace the whole record rather than mutating fields so a
            // concurrent reader never observes a half-updated record
            let mut updated = cycles[index].clone();
            updated.eol = DateFlag::Date(eol_date.to_string());
            updated.deprecated = Some(true);
            cycles[index] = updated;
        }
        None => {
            cycles.push(AiModelCycle {
                cycle: model_id.to_string(),
                release_date: "unknown".to_string(),
                eol: DateFlag::Date(eol_date.to_string()),
                lts: false,
                deprecated: Some(true),
                replacement: None,
            });
        }
    }
}
