//! Command implementations and console output

use anyhow::Context;
use chrono::NaiveDate;
use futures::future::join_all;
use tracing::warn;

use crate::ai::models::AiModelCycle;
use crate::ai::{detect, models, refresh};
use crate::config::DEFAULT_CACHE_TTL_MS;
use crate::eol::cache::Cache;
use crate::eol::evaluator::{Evaluation, Status, evaluate_version};
use crate::eol::source::{EndOfLifeApi, EolDataSource};
use crate::scan;

fn default_source() -> anyhow::Result<EolDataSource<EndOfLifeApi>> {
    let cache = Cache::new(crate::config::cache_dir(), DEFAULT_CACHE_TTL_MS)
        .context("failed to initialize cache")?;
    Ok(EolDataSource::new(EndOfLifeApi::default(), cache))
}

fn print_evaluation(eval: &Evaluation) {
    println!(
        "[{}] {} {}: {}",
        eval.status, eval.component, eval.version, eval.message
    );
}

/// A failed fetch for one product degrades to a WARN line; it never aborts
/// the run.
fn warn_evaluation(component: &str, version: &str, error: &impl std::fmt::Display) -> Evaluation {
    Evaluation {
        component: component.to_string(),
        version: version.to_string(),
        status: Status::Warn,
        message: format!("Could not retrieve EOL data ({error})"),
    }
}

async fn check_component(
    source: &EolDataSource<EndOfLifeApi>,
    component: &str,
    product: &str,
    version: &str,
    force_refresh: bool,
) -> Evaluation {
    match source.fetch(product, force_refresh).await {
        Ok(cycles) => evaluate_version(component, version, &cycles),
        Err(e) => {
            warn!("Fetch failed for {}: {}", product, e);
            warn_evaluation(component, version, &e)
        }
    }
}

/// `eol-check scan`: scan the environment and evaluate every detected
/// component. Independent products are fetched and evaluated concurrently.
pub async fn run_scan(force_refresh: bool) -> anyhow::Result<()> {
    let source = default_source()?;
    let result = scan::scan_environment();

    println!("OS: {}", result.os);
    println!("Package manager: {}", result.package_manager);

    let mut checks = Vec::new();
    if result.runtime_version != "unknown" {
        checks.push((
            "node".to_string(),
            scan::RUNTIME_PRODUCT.to_string(),
            result.runtime_version.clone(),
        ));
    }
    for service in &result.services {
        // node already covered by the runtime check above
        if service.product == scan::RUNTIME_PRODUCT {
            continue;
        }
        checks.push((
            service.name.clone(),
            service.product.clone(),
            service.version.clone(),
        ));
    }

    if checks.is_empty() {
        println!("No components detected.");
        return Ok(());
    }

    let evaluations = join_all(checks.iter().map(|(name, product, version)| {
        check_component(&source, name, product, version, force_refresh)
    }))
    .await;

    for eval in &evaluations {
        print_evaluation(eval);
    }

    Ok(())
}

/// `eol-check check <product> <version>`: evaluate one product directly.
/// The identifier is run through the product map first so package names
/// (e.g. `pg`) work as well as product keys.
pub async fn run_check(identifier: &str, version: &str, force_refresh: bool) -> anyhow::Result<()> {
    let product = crate::eol::product::map_to_product(identifier).unwrap_or(identifier);
    let source = default_source()?;

    let eval = check_component(&source, identifier, product, version, force_refresh).await;
    print_evaluation(&eval);

    Ok(())
}

/// `eol-check ai check <model-string>`: resolve a model-usage string and
/// evaluate its cycle records
pub async fn run_ai_check(model_string: &str, refresh_data: bool) -> anyhow::Result<()> {
    if refresh_data {
        refresh::refresh_model_data().await;
    }

    let Some((provider, model)) = detect::match_model_pattern(model_string) else {
        // Not a model string; it may be an SDK package name
        if let Some(provider) = detect::sdk_provider(model_string) {
            let display = models::provider_display_name(provider).unwrap_or(provider);
            println!(
                "{model_string} is an SDK package for {display}; \
                 run `eol-check ai list {provider}` for its models"
            );
        } else {
            println!("[WARN] {model_string}: unrecognized model string");
        }
        return Ok(());
    };

    let Some(cycles) = models::resolve(provider, model) else {
        println!("[WARN] {model_string}: no lifecycle data for {provider}/{model}");
        return Ok(());
    };

    let display = models::provider_display_name(provider).unwrap_or(provider);
    println!("Provider: {display}");

    // Model records carry variant cycles; evaluate the model id itself so
    // dated identifiers like gpt-4-0613 match their variant record
    let variant = model_string
        .strip_prefix(model)
        .map(|rest| rest.trim_start_matches('-'))
        .filter(|rest| !rest.is_empty());

    let eval = evaluate_model(model, variant, &cycles);
    print_evaluation(&eval);

    Ok(())
}

/// Evaluates a resolved model's cycle records. A bare model string (no
/// variant suffix) is judged by the "latest" channel when the table has
/// one; fully deprecated models carry no "latest" cycle, so those fall
/// back to the most recently released record.
fn evaluate_model(model: &str, variant: Option<&str>, cycles: &[AiModelCycle]) -> Evaluation {
    let variant = match variant {
        Some(variant) => variant.to_string(),
        None => implicit_variant(cycles),
    };

    let eol_cycles: Vec<_> = cycles.iter().cloned().map(Into::into).collect();
    evaluate_version(model, &variant, &eol_cycles)
}

fn implicit_variant(cycles: &[AiModelCycle]) -> String {
    if cycles.iter().any(|c| c.cycle == "latest") {
        return "latest".to_string();
    }

    // Newest record by release date; unparseable dates sort first, later
    // array position breaks ties
    cycles
        .iter()
        .enumerate()
        .max_by_key(|(index, c)| {
            (
                NaiveDate::parse_from_str(&c.release_date, "%Y-%m-%d").ok(),
                *index,
            )
        })
        .map(|(_, c)| c.cycle.clone())
        .unwrap_or_else(|| "latest".to_string())
}

/// `eol-check ai list [provider]`
pub fn run_ai_list(provider: Option<&str>) {
    match provider {
        Some(provider) => {
            let model_names = models::list_models(provider);
            if model_names.is_empty() {
                println!("Unknown provider: {provider}");
                return;
            }
            for model in model_names {
                println!("{model}");
            }
        }
        None => {
            for provider in models::list_providers() {
                let display = models::provider_display_name(&provider).unwrap_or(&provider);
                println!("{provider} ({display})");
            }
        }
    }
}

/// `eol-check cache clear`
pub fn run_cache_clear() -> anyhow::Result<()> {
    let cache = Cache::new(crate::config::cache_dir(), DEFAULT_CACHE_TTL_MS)
        .context("failed to initialize cache")?;
    cache.clear().context("failed to clear cache")?;
    println!("Cache cleared.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;
    use crate::eol::types::DateFlag;

    fn record(cycle: &str, release_date: &str, eol: impl Into<DateFlag>) -> AiModelCycle {
        AiModelCycle {
            cycle: cycle.to_string(),
            release_date: release_date.to_string(),
            eol: eol.into(),
            lts: false,
            deprecated: None,
            replacement: None,
        }
    }

    #[test]
    fn bare_model_prefers_latest_cycle() {
        let cycles = vec![
            record("0613", "2023-06-13", "2024-06-13"),
            record("latest", "2024-04-09", false),
        ];

        let eval = evaluate_model("gpt-4", None, &cycles);

        assert_eq!(eval.status, Status::Ok);
    }

    #[test]
    fn bare_model_without_latest_cycle_is_judged_by_newest_record() {
        // Fully deprecated models carry only dated records, all past EOL
        let cycles = vec![
            record("2.0", "2023-07-11", "2024-03-01"),
            record("2.1", "2023-11-21", "2024-07-21"),
        ];

        let eval = evaluate_model("claude-2", None, &cycles);

        assert_eq!(eval.status, Status::Err);
        assert!(eval.message.contains("2024-07-21"));
    }

    #[test]
    fn explicit_variant_overrides_latest_cycle() {
        let cycles = vec![
            record("0613", "2023-06-13", "2024-06-13"),
            record("latest", "2024-04-09", false),
        ];

        let eval = evaluate_model("gpt-4", Some("0613"), &cycles);

        assert_eq!(eval.status, Status::Err);
    }

    #[test]
    #[serial(model_tables)]
    fn fully_deprecated_table_model_reports_err_not_warn() {
        // claude-3-sonnet's sole record is a dated cycle with a past EOL;
        // the resolver path must not degrade it to a data-availability WARN
        let cycles = models::resolve("anthropic", "claude-3-sonnet").unwrap();

        let eval = evaluate_model("claude-3-sonnet", None, &cycles);

        assert_eq!(eval.status, Status::Err);
        assert!(eval.message.contains("2025-07-21"));
    }

    #[test]
    fn implicit_variant_picks_latest_release_date() {
        let cycles = vec![
            record("old", "2023-01-01", true),
            record("new", "2024-01-01", false),
            record("unknown-date", "unknown", true),
        ];

        assert_eq!(implicit_variant(&cycles), "new");
    }
}
