//! Package manager detection for npm, Yarn, and pnpm

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::process::Command;

/// Supported package managers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    Npm,
    Yarn,
    Pnpm,
}

impl PackageManager {
    /// Every manager, in menu order
    pub const ALL: [PackageManager; 3] = [
        PackageManager::Yarn,
        PackageManager::Npm,
        PackageManager::Pnpm,
    ];

    /// Binary name on PATH
    pub fn binary(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
            PackageManager::Pnpm => "pnpm",
        }
    }

    /// Lock file whose presence identifies the manager
    pub fn lock_file(&self) -> &'static str {
        match self {
            PackageManager::Npm => "package-lock.json",
            PackageManager::Yarn => "yarn.lock",
            PackageManager::Pnpm => "pnpm-lock.yaml",
        }
    }

    /// Arguments installing `packages` as development dependencies
    pub fn install_args(&self, packages: &[&str]) -> Vec<String> {
        let prefix: &[&str] = match self {
            PackageManager::Npm => &["install", "--save-dev"],
            PackageManager::Yarn => &["add", "-D"],
            PackageManager::Pnpm => &["add", "-D"],
        };
        prefix
            .iter()
            .chain(packages.iter())
            .map(|s| s.to_string())
            .collect()
    }

    /// Full install command line, for display
    pub fn install_command(&self, packages: &[&str]) -> String {
        format!("{} {}", self.binary(), self.install_args(packages).join(" "))
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.binary())
    }
}

/// Detect the manager from the lock file present in `root`
pub fn detect_package_manager(root: &Path) -> Option<PackageManager> {
    PackageManager::ALL
        .into_iter()
        .find(|pm| root.join(pm.lock_file()).is_file())
}

/// Tool detection result
#[derive(Debug, Clone)]
pub struct RuntimeInfo {
    pub name: &'static str,
    pub version: Option<String>,
    pub available: bool,
}

/// Check whether a package manager binary is available
pub fn check_package_manager(manager: PackageManager) -> RuntimeInfo {
    let output = Command::new(manager.binary()).arg("--version").output();

    match output {
        Ok(out) if out.status.success() => {
            let version = String::from_utf8_lossy(&out.stdout).trim().to_string();
            RuntimeInfo {
                name: manager.binary(),
                version: Some(version),
                available: true,
            }
        }
        _ => RuntimeInfo {
            name: manager.binary(),
            version: None,
            available: false,
        },
    }
}
