//! Detection maps for AI SDK packages and model-usage strings

use std::collections::HashMap;
use std::sync::LazyLock;

/// SDK package name → provider key. SDKs that front several providers
/// (LangChain, Vercel AI, LlamaIndex) map to the sentinel "multiple".
static SDK_TO_PROVIDER: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        // OpenAI SDKs
        ("openai", "openai"),
        ("@azure/openai", "openai"),
        // Anthropic SDKs
        ("@anthropic-ai/sdk", "anthropic"),
        ("anthropic", "anthropic"),
        // Google SDKs
        ("@google/generative-ai", "google"),
        ("@google-cloud/vertexai", "google"),
        ("google-generativeai", "google"),
        // LangChain
        ("langchain", "multiple"),
        ("@langchain/openai", "openai"),
        ("@langchain/anthropic", "anthropic"),
        ("@langchain/google-genai", "google"),
        ("@langchain/cohere", "cohere"),
        ("@langchain/mistralai", "mistral"),
        // Cohere
        ("cohere-ai", "cohere"),
        ("cohere", "cohere"),
        // Mistral
        ("@mistralai/mistralai", "mistral"),
        ("mistralai", "mistral"),
        // LlamaIndex
        ("llamaindex", "multiple"),
        // Vercel AI SDK
        ("ai", "multiple"),
        ("@ai-sdk/openai", "openai"),
        ("@ai-sdk/anthropic", "anthropic"),
        ("@ai-sdk/google", "google"),
        ("@ai-sdk/mistral", "mistral"),
        ("@ai-sdk/cohere", "cohere"),
        // Hugging Face
        ("@huggingface/inference", "huggingface"),
        ("huggingface_hub", "huggingface"),
        // Hosted inference
        ("replicate", "replicate"),
        ("together-ai", "together"),
        // Ollama
        ("ollama", "ollama"),
        ("ollama-ai-provider", "ollama"),
    ])
});

/// Common model-usage strings → (provider, model) pairs
static MODEL_PATTERNS: LazyLock<HashMap<&'static str, (&'static str, &'static str)>> =
    LazyLock::new(|| {
        HashMap::from([
            // OpenAI
            ("gpt-4o", ("openai", "gpt-4o")),
            ("gpt-4o-mini", ("openai", "gpt-4o-mini")),
            ("gpt-4-turbo", ("openai", "gpt-4")),
            ("gpt-4", ("openai", "gpt-4")),
            ("gpt-3.5-turbo", ("openai", "gpt-3.5-turbo")),
            ("o1", ("openai", "o1")),
            ("o1-mini", ("openai", "o1-mini")),
            ("o1-preview", ("openai", "o1")),
            ("o3-mini", ("openai", "o3-mini")),
            // Anthropic
            ("claude-3-opus", ("anthropic", "claude-3-opus")),
            ("claude-3-sonnet", ("anthropic", "claude-3-sonnet")),
            ("claude-3-haiku", ("anthropic", "claude-3-haiku")),
            ("claude-3-5-sonnet", ("anthropic", "claude-3.5-sonnet")),
            ("claude-3.5-sonnet", ("anthropic", "claude-3.5-sonnet")),
            ("claude-3-5-haiku", ("anthropic", "claude-3.5-haiku")),
            ("claude-3.5-haiku", ("anthropic", "claude-3.5-haiku")),
            ("claude-sonnet-4", ("anthropic", "claude-sonnet-4")),
            ("claude-opus-4", ("anthropic", "claude-opus-4")),
            // Google
            ("gemini-pro", ("google", "gemini-pro")),
            ("gemini-1.5-pro", ("google", "gemini-1.5-pro")),
            ("gemini-1.5-flash", ("google", "gemini-1.5-flash")),
            ("gemini-2.0-flash", ("google", "gemini-2.0-flash")),
            ("gemini-2.5-pro", ("google", "gemini-2.5-pro")),
            // Mistral
            ("mistral-large", ("mistral", "mistral-large")),
            ("mistral-small", ("mistral", "mistral-small")),
            ("codestral", ("mistral", "codestral")),
            // Meta (ollama / huggingface usage)
            ("llama-3", ("meta", "llama-3")),
            ("llama-3.1", ("meta", "llama-3.1")),
            ("llama-3.2", ("meta", "llama-3.2")),
            ("llama3", ("meta", "llama-3")),
            ("llama3.1", ("meta", "llama-3.1")),
            ("llama3.2", ("meta", "llama-3.2")),
        ])
    });

/// Maps an AI SDK package name to its provider key
pub fn sdk_provider(package_name: &str) -> Option<&'static str> {
    SDK_TO_PROVIDER.get(package_name).copied()
}

/// Maps a model-usage string (as found in code or config) to a canonical
/// (provider, model) pair
pub fn match_model_pattern(model_string: &str) -> Option<(&'static str, &'static str)> {
    MODEL_PATTERNS.get(model_string).copied()
}
