//! EOL resolution engine
//!
//! Maps detected identifiers to canonical product keys, retrieves lifecycle
//! cycles through a TTL-governed disk cache backed by the endoflife.date
//! API, and evaluates observed versions into a tri-state status.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   product   │────▶│   source    │────▶│  evaluator  │
//! │  (mapping)  │     │ (fetch/TTL) │     │ (OK/WARN/ERR)│
//! └─────────────┘     └──────┬──────┘     └─────────────┘
//!                            │
//!                            ▼
//!                     ┌─────────────┐
//!                     │    cache    │
//!                     │ (JSON files)│
//!                     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`product`]: curated identifier → product key mapping
//! - [`cache`]: file-per-product TTL cache
//! - [`source`]: remote endoflife.date API with cache-aside fetch
//! - [`evaluator`]: version evaluation against cycle records
//! - [`error`]: cache and data source error types
//! - [`types`]: cycle and cache entry types

pub mod cache;
pub mod error;
pub mod evaluator;
pub mod product;
pub mod source;
pub mod types;
