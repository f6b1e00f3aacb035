//! eol-check: end-of-life status for locally detected software
//!
//! Combines locally detected version information (runtimes, service
//! binaries, AI model identifiers) with externally sourced lifecycle data
//! to report whether each component is supported, approaching end-of-life,
//! or already past it.

pub mod ai;
pub mod cli;
pub mod config;
pub mod eol;
pub mod scan;
