//! Environment scanner
//!
//! Collects what is installed locally: the Node.js runtime version, the
//! JavaScript package manager in use, the OS, and any known service
//! binaries found on PATH. The results feed the EOL resolution engine as
//! (product key, observed version) pairs.
//!
//! # Modules
//!
//! - [`environment`]: OS name and package manager detection
//! - [`services`]: service binary probing with version extraction

pub mod environment;
pub mod services;

use std::process::Command;

use tracing::info;

pub use services::DetectedService;

/// Product key the runtime version is evaluated against
pub const RUNTIME_PRODUCT: &str = "nodejs";

/// Snapshot of the scanned environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanResult {
    /// Node.js runtime version (e.g. "v18.19.0"), or "unknown" when the
    /// runtime is not installed
    pub runtime_version: String,
    pub package_manager: String,
    pub os: String,
    pub services: Vec<DetectedService>,
}

/// Scans the local environment
pub fn scan_environment() -> ScanResult {
    let runtime_version = detect_runtime_version().unwrap_or_else(|| "unknown".to_string());
    let package_manager = environment::detect_package_manager(
        &std::env::current_dir().unwrap_or_else(|_| ".".into()),
    );
    let os = environment::detect_os();
    let services = services::scan_local_services();

    info!(
        "Scan complete: runtime {}, {} services detected",
        runtime_version,
        services.len()
    );

    ScanResult {
        runtime_version,
        package_manager,
        os,
        services,
    }
}

fn detect_runtime_version() -> Option<String> {
    let output = Command::new("node").arg("--version").output().ok()?;
    if !output.status.success() {
        return None;
    }
    let version = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if version.is_empty() { None } else { Some(version) }
}
