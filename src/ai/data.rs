//! Curated AI model lifecycle tables
//!
//! Generative AI providers publish deprecations as documentation pages, not
//! machine-readable APIs, so these tables are maintained from the official
//! announcements:
//!
//! - OpenAI: <https://platform.openai.com/docs/deprecations>
//! - Anthropic: <https://docs.anthropic.com/en/docs/resources/model-deprecations>
//! - Google: <https://ai.google.dev/gemini-api/docs/deprecations>
//! - Meta: community tracking (open source models)
//! - Mistral: <https://docs.mistral.ai>
//! - Cohere: <https://docs.cohere.com>

use std::collections::HashMap;

use crate::ai::models::AiModelCycle;
use crate::eol::types::DateFlag;

/// Model name → cycle records for one provider
pub type ModelTable = HashMap<String, Vec<AiModelCycle>>;

fn c(cycle: &str, release_date: &str, eol: impl Into<DateFlag>, lts: bool) -> AiModelCycle {
    AiModelCycle {
        cycle: cycle.to_string(),
        release_date: release_date.to_string(),
        eol: eol.into(),
        lts,
        deprecated: None,
        replacement: None,
    }
}

fn table(entries: Vec<(&str, Vec<AiModelCycle>)>) -> ModelTable {
    entries
        .into_iter()
        .map(|(model, cycles)| (model.to_string(), cycles))
        .collect()
}

fn openai_models() -> ModelTable {
    table(vec![
        (
            "gpt-3.5-turbo",
            vec![
                c("0301", "2023-03-01", "2024-06-13", false),
                c("0613", "2023-06-13", "2024-09-13", false),
                c("16k-0613", "2023-06-13", "2024-09-13", false),
                c("1106", "2023-11-06", "2025-11-14", false),
                c("0125", "2024-01-25", "2025-11-14", false),
                c("latest", "2024-01-25", false, true),
            ],
        ),
        (
            "gpt-4",
            vec![
                c("0314", "2023-03-14", "2024-06-13", false),
                c("0613", "2023-06-13", "2024-06-13", false),
                c("32k-0314", "2023-03-14", "2025-06-06", false),
                c("32k-0613", "2023-06-13", "2025-06-06", false),
                c("turbo-2024-04-09", "2024-04-09", "2025-11-14", false),
                c("turbo", "2024-04-09", false, true),
            ],
        ),
        (
            "gpt-4o",
            vec![
                c("2024-05-13", "2024-05-13", false, true),
                c("2024-08-06", "2024-08-06", false, true),
                c("latest", "2024-11-20", false, true),
            ],
        ),
        (
            "gpt-4o-mini",
            vec![
                c("2024-07-18", "2024-07-18", false, true),
                c("latest", "2024-07-18", false, true),
            ],
        ),
        (
            "gpt-4.5-preview",
            vec![c("preview", "2025-02-27", "2025-07-14", false)],
        ),
        (
            "o1",
            vec![
                c("preview", "2024-09-12", "2025-09-12", false),
                c("2024-12-17", "2024-12-17", false, true),
                c("latest", "2024-12-17", false, true),
            ],
        ),
        (
            "o1-mini",
            vec![
                c("2024-09-12", "2024-09-12", false, true),
                c("latest", "2024-09-12", false, true),
            ],
        ),
        (
            "o3-mini",
            vec![
                c("2025-01-31", "2025-01-31", false, true),
                c("latest", "2025-01-31", false, true),
            ],
        ),
        // Legacy completion models
        ("davinci", vec![c("002", "2020-06-01", "2024-01-04", false)]),
        ("curie", vec![c("001", "2020-06-01", "2024-01-04", false)]),
        ("babbage", vec![c("001", "2020-06-01", "2024-01-04", false)]),
        ("ada", vec![c("001", "2020-06-01", "2024-01-04", false)]),
    ])
}

fn anthropic_models() -> ModelTable {
    table(vec![
        (
            "claude-1",
            vec![
                c("1.0", "2023-03-14", "2024-03-01", false),
                c("1.3", "2023-05-01", "2024-03-01", false),
                c("instant-1.2", "2023-05-01", "2024-03-01", false),
            ],
        ),
        (
            "claude-2",
            vec![
                c("2.0", "2023-07-11", "2025-07-21", false),
                c("2.1", "2023-11-21", "2025-07-21", false),
            ],
        ),
        (
            "claude-3-opus",
            vec![
                c("20240229", "2024-02-29", "2026-01-01", true),
                c("latest", "2024-02-29", false, true),
            ],
        ),
        (
            "claude-3-sonnet",
            vec![c("20240229", "2024-02-29", "2025-07-21", false)],
        ),
        (
            "claude-3-haiku",
            vec![
                c("20240307", "2024-03-07", false, true),
                c("latest", "2024-03-07", false, true),
            ],
        ),
        (
            "claude-3.5-sonnet",
            vec![
                c("20240620", "2024-06-20", "2025-10-22", false),
                c("20241022", "2024-10-22", "2025-10-22", false),
            ],
        ),
        (
            "claude-3.5-haiku",
            vec![
                c("20241022", "2024-10-22", false, true),
                c("latest", "2024-10-22", false, true),
            ],
        ),
        (
            "claude-sonnet-4",
            vec![
                c("20250514", "2025-05-14", false, true),
                c("latest", "2025-05-14", false, true),
            ],
        ),
        (
            "claude-opus-4",
            vec![
                c("20250514", "2025-05-14", false, true),
                c("latest", "2025-05-14", false, true),
            ],
        ),
    ])
}

fn google_models() -> ModelTable {
    table(vec![
        // PaLM 2 is deprecated in favor of Gemini
        (
            "palm-2",
            vec![
                c("text-bison-001", "2023-05-10", "2024-10-01", false),
                c("text-bison-002", "2023-08-01", "2024-10-01", false),
                c("chat-bison-001", "2023-05-10", "2024-10-01", false),
            ],
        ),
        (
            "gemini-pro",
            vec![c("1.0", "2023-12-06", "2025-02-15", false)],
        ),
        (
            "gemini-1.0-pro",
            vec![
                c("001", "2024-02-15", "2025-02-15", false),
                c("002", "2024-04-01", "2025-02-15", false),
            ],
        ),
        (
            "gemini-1.5-pro",
            vec![
                c("preview-0514", "2024-05-14", "2025-05-24", false),
                c("001", "2024-05-24", false, true),
                c("002", "2024-09-24", false, true),
                c("latest", "2024-09-24", false, true),
            ],
        ),
        (
            "gemini-1.5-flash",
            vec![
                c("preview-0514", "2024-05-14", "2025-05-24", false),
                c("001", "2024-05-24", false, true),
                c("002", "2024-09-24", false, true),
                c("8b", "2024-10-03", false, true),
                c("latest", "2024-09-24", false, true),
            ],
        ),
        (
            "gemini-2.0-flash",
            vec![
                c("exp", "2024-12-11", "2025-09-01", false),
                c("thinking-exp", "2025-01-21", "2025-10-01", false),
                c("001", "2025-02-05", false, true),
            ],
        ),
        (
            "gemini-2.5-pro",
            vec![
                c("preview-0325", "2025-03-25", "2025-10-01", false),
                c("latest", "2025-03-25", false, true),
            ],
        ),
        (
            "gemini-2.5-flash",
            vec![
                c("preview-0520", "2025-05-20", "2025-12-01", false),
                c("latest", "2025-05-20", false, true),
            ],
        ),
    ])
}

fn meta_models() -> ModelTable {
    // Llama models are open weights and carry no formal EOL dates; newer
    // releases superseding older ones is tracked via the lts flag
    table(vec![
        (
            "llama-2",
            vec![
                c("7b", "2023-07-18", false, false),
                c("13b", "2023-07-18", false, false),
                c("70b", "2023-07-18", false, true),
            ],
        ),
        (
            "llama-3",
            vec![
                c("8b", "2024-04-18", false, true),
                c("70b", "2024-04-18", false, true),
            ],
        ),
        (
            "llama-3.1",
            vec![
                c("8b", "2024-07-23", false, true),
                c("70b", "2024-07-23", false, true),
                c("405b", "2024-07-23", false, true),
            ],
        ),
        (
            "llama-3.2",
            vec![
                c("1b", "2024-09-25", false, true),
                c("3b", "2024-09-25", false, true),
                c("11b", "2024-09-25", false, true),
                c("90b", "2024-09-25", false, true),
            ],
        ),
        ("llama-3.3", vec![c("70b", "2024-12-06", false, true)]),
        (
            "llama-4",
            vec![
                c("scout", "2025-04-05", false, true),
                c("maverick", "2025-04-05", false, true),
            ],
        ),
    ])
}

fn mistral_models() -> ModelTable {
    table(vec![
        (
            "mistral-7b",
            vec![
                c("v0.1", "2023-09-27", false, false),
                c("v0.2", "2024-01-01", false, true),
                c("v0.3", "2024-05-22", false, true),
            ],
        ),
        ("mixtral-8x7b", vec![c("v0.1", "2023-12-11", false, true)]),
        ("mixtral-8x22b", vec![c("v0.1", "2024-04-17", false, true)]),
        (
            "mistral-large",
            vec![
                c("2402", "2024-02-26", false, false),
                c("2407", "2024-07-24", false, true),
                c("2411", "2024-11-18", false, true),
            ],
        ),
        (
            "mistral-small",
            vec![
                c("2402", "2024-02-26", false, false),
                c("2409", "2024-09-18", false, true),
            ],
        ),
        ("codestral", vec![c("2405", "2024-05-29", false, true)]),
        (
            "pixtral",
            vec![
                c("12b-2409", "2024-09-17", false, true),
                c("large-2411", "2024-11-18", false, true),
            ],
        ),
    ])
}

fn cohere_models() -> ModelTable {
    table(vec![
        (
            "command",
            vec![
                c("command", "2023-03-01", false, false),
                c("command-light", "2023-03-01", false, false),
                c("command-nightly", "2023-03-01", false, false),
            ],
        ),
        (
            "command-r",
            vec![
                c("command-r", "2024-03-11", false, true),
                c("command-r-plus", "2024-04-04", false, true),
                c("command-r-08-2024", "2024-08-01", false, true),
                c("command-r-plus-08-2024", "2024-08-01", false, true),
            ],
        ),
        (
            "command-a",
            vec![c("command-a-03-2025", "2025-03-01", false, true)],
        ),
    ])
}

/// Builds the full provider → model table map. Called once at first access.
pub fn all_tables() -> HashMap<String, ModelTable> {
    HashMap::from([
        ("openai".to_string(), openai_models()),
        ("anthropic".to_string(), anthropic_models()),
        ("google".to_string(), google_models()),
        ("meta".to_string(), meta_models()),
        ("mistral".to_string(), mistral_models()),
        ("cohere".to_string(), cohere_models()),
    ])
}
