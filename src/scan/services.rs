//! Local service detection via binary probing
//!
//! Runs each known binary with its version flag and extracts the version
//! with a per-service regex. Binaries that are missing, fail to run, or
//! print something unexpected are skipped silently.

use std::process::Command;

use regex::Regex;
use tracing::debug;

/// One probe definition: which binary to run and how to read its version
struct ServiceProbe {
    binary: &'static str,
    product: &'static str,
    version_flag: &'static str,
    pattern: &'static str,
}

const SERVICE_PROBES: &[ServiceProbe] = &[
    ServiceProbe {
        binary: "redis-server",
        product: "redis",
        version_flag: "--version",
        pattern: r"v=(\d+\.\d+\.\d+)",
    },
    ServiceProbe {
        binary: "psql",
        product: "postgresql",
        version_flag: "--version",
        pattern: r"psql \(PostgreSQL\) (\d+\.\d+(?:\.\d+)?)",
    },
    ServiceProbe {
        binary: "mysql",
        product: "mysql",
        version_flag: "--version",
        pattern: r"Ver (\d+\.\d+\.\d+)",
    },
    ServiceProbe {
        binary: "mongod",
        product: "mongodb",
        version_flag: "--version",
        pattern: r"db version v(\d+\.\d+\.\d+)",
    },
    ServiceProbe {
        binary: "docker",
        product: "docker-engine",
        version_flag: "--version",
        pattern: r"version (\d+\.\d+\.\d+)",
    },
    ServiceProbe {
        binary: "git",
        product: "git",
        version_flag: "--version",
        pattern: r"version (\d+\.\d+\.\d+)",
    },
    ServiceProbe {
        binary: "python3",
        product: "python",
        version_flag: "--version",
        pattern: r"Python (\d+\.\d+\.\d+)",
    },
    ServiceProbe {
        binary: "java",
        product: "java",
        version_flag: "--version",
        pattern: r#"version "(\d+\.\d+\.\d+(?:_\d+)?)""#,
    },
    ServiceProbe {
        binary: "go",
        product: "go",
        version_flag: "version",
        pattern: r"go version go(\d+\.\d+(?:\.\d+)?)",
    },
];

/// A service found on the local machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectedService {
    /// Binary name the service was detected through
    pub name: String,
    /// Canonical endoflife.date product key
    pub product: String,
    pub version: String,
}

/// Probes all known service binaries and returns the ones that responded
pub fn scan_local_services() -> Vec<DetectedService> {
    SERVICE_PROBES
        .iter()
        .filter_map(|probe| {
            let output = run_probe(probe.binary, probe.version_flag)?;
            let version = extract_version(probe.pattern, &output)?;
            debug!("Detected {} {}", probe.binary, version);
            Some(DetectedService {
                name: probe.binary.to_string(),
                product: probe.product.to_string(),
                version,
            })
        })
        .collect()
}

fn run_probe(binary: &str, version_flag: &str) -> Option<String> {
    let output = Command::new(binary).arg(version_flag).output().ok()?;
    if !output.status.success() {
        return None;
    }
    Some(String::from_utf8_lossy(&output.stdout).into_owned())
}

fn extract_version(pattern: &str, output: &str) -> Option<String> {
    // Probe patterns are constants validated by tests, so compiling per
    // probe run is fine
    let regex = Regex::new(pattern).ok()?;
    regex
        .captures(output)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn all_probe_patterns_compile() {
        for probe in SERVICE_PROBES {
            assert!(
                Regex::new(probe.pattern).is_ok(),
                "pattern for {} does not compile",
                probe.binary
            );
        }
    }

    #[rstest]
    #[case(
        r"v=(\d+\.\d+\.\d+)",
        "Redis server v=7.2.4 sha=00000000:0 malloc=jemalloc-5.3.0",
        "7.2.4"
    )]
    #[case(
        r"psql \(PostgreSQL\) (\d+\.\d+(?:\.\d+)?)",
        "psql (PostgreSQL) 16.2 (Ubuntu 16.2-1)",
        "16.2"
    )]
    #[case(
        r"db version v(\d+\.\d+\.\d+)",
        "db version v7.0.5\nBuild Info: ...",
        "7.0.5"
    )]
    #[case(
        r"go version go(\d+\.\d+(?:\.\d+)?)",
        "go version go1.22.1 linux/amd64",
        "1.22.1"
    )]
    #[case(
        r#"version "(\d+\.\d+\.\d+(?:_\d+)?)""#,
        "openjdk version \"1.8.0_292\"",
        "1.8.0_292"
    )]
    fn extract_version_matches_known_outputs(
        #[case] pattern: &str,
        #[case] output: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(extract_version(pattern, output), Some(expected.to_string()));
    }

    #[test]
    fn extract_version_returns_none_for_unexpected_output() {
        assert_eq!(
            extract_version(r"v=(\d+\.\d+\.\d+)", "command not found"),
            None
        );
    }
}
