//! AI model lifecycle layer
//!
//! Generative-model deprecation tracking: curated per-provider tables,
//! detection maps for SDK packages and model-usage strings, and a
//! best-effort documentation crawl that folds newly announced deprecations
//! into the in-memory tables.
//!
//! # Modules
//!
//! - [`models`]: record type, resolve/list accessors, table mutation
//! - [`data`]: the curated static tables (data, not logic)
//! - [`detect`]: SDK package → provider and model-string → (provider, model)
//! - [`refresh`]: advisory deprecation-page crawl

pub mod data;
pub mod detect;
pub mod models;
pub mod refresh;
