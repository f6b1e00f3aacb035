//! Host environment detection: OS name and package manager

use std::path::Path;

use tracing::debug;

const OS_RELEASE_PATH: &str = "/etc/os-release";

/// Human-readable OS name: `PRETTY_NAME` from /etc/os-release where
/// available, otherwise the compile-time platform name.
pub fn detect_os() -> String {
    std::fs::read_to_string(OS_RELEASE_PATH)
        .ok()
        .and_then(|content| parse_os_release(&content))
        .unwrap_or_else(|| std::env::consts::OS.to_string())
}

/// Extracts PRETTY_NAME from os-release content
pub(crate) fn parse_os_release(content: &str) -> Option<String> {
    content
        .lines()
        .find_map(|line| line.strip_prefix("PRETTY_NAME="))
        .map(|value| value.trim_matches('"').to_string())
}

/// Detects the JavaScript package manager in use from lockfiles in `dir`.
/// Defaults to npm when no other lockfile is present.
pub fn detect_package_manager(dir: &Path) -> String {
    let manager = if dir.join("yarn.lock").exists() {
        "yarn"
    } else if dir.join("pnpm-lock.yaml").exists() {
        "pnpm"
    } else {
        "npm"
    };
    debug!("Detected package manager: {}", manager);
    manager.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn parse_os_release_extracts_pretty_name() {
        let content = r#"NAME="Ubuntu"
VERSION="22.04.4 LTS (Jammy Jellyfish)"
ID=ubuntu
PRETTY_NAME="Ubuntu 22.04.4 LTS"
VERSION_ID="22.04"
"#;

        assert_eq!(
            parse_os_release(content),
            Some("Ubuntu 22.04.4 LTS".to_string())
        );
    }

    #[test]
    fn parse_os_release_returns_none_without_pretty_name() {
        assert_eq!(parse_os_release("NAME=Alpine\nID=alpine\n"), None);
    }

    #[test]
    fn detect_package_manager_prefers_yarn_lockfile() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("yarn.lock"), "").unwrap();
        fs::write(temp_dir.path().join("pnpm-lock.yaml"), "").unwrap();

        assert_eq!(detect_package_manager(temp_dir.path()), "yarn");
    }

    #[test]
    fn detect_package_manager_finds_pnpm_lockfile() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("pnpm-lock.yaml"), "").unwrap();

        assert_eq!(detect_package_manager(temp_dir.path()), "pnpm");
    }

    #[test]
    fn detect_package_manager_defaults_to_npm() {
        let temp_dir = TempDir::new().unwrap();

        assert_eq!(detect_package_manager(temp_dir.path()), "npm");
    }
}
