//! Host project inspection
//!
//! This module provides:
//! - package.json parsing and dependency lookup
//! - Typed/untyped language detection
//! - A best-effort probe summarizing the workspace for the commands

pub mod language;
pub mod manifest;

use crate::config::Conventions;
use crate::error::{minor, Result};
use crate::gateway::Gateway;
use std::path::{Path, PathBuf};

pub use language::{detect_language, LanguageVariant};
pub use manifest::{evaluate_dependencies, find_manifest, Manifest, ModuleType, MANIFEST_FILE};

/// UI framework dependency
pub const REACT: &str = "react";

/// Typed-language dependency
pub const TYPESCRIPT: &str = "typescript";

/// Formatter dependency
pub const PRETTIER: &str = "prettier";

/// File names that mention the formatter but are not its configuration
const NOT_PRETTIER_CONFIG: &[&str] = &[".prettierignore"];

/// What the commands need to know about the workspace
#[derive(Debug, Clone)]
pub struct ProjectContext {
    pub manifest: Option<Manifest>,
    pub language: LanguageVariant,
    pub is_react: bool,
    pub has_prettier_config: bool,
}

impl ProjectContext {
    /// Inspect the workspace; every failure here is minor and only logged
    pub async fn probe<G: Gateway>(
        gateway: &G,
        root: &Path,
        conventions: &Conventions,
        forced: Option<LanguageVariant>,
    ) -> Self {
        let manifest = minor(
            "Load package.json",
            gateway.read_manifest(root, conventions).await,
        )
        .flatten();

        let is_react = manifest
            .as_ref()
            .is_some_and(|m| m.has_runtime_dependency(REACT));

        let config_files = minor(
            "Look for Prettier configuration",
            find_prettier_configs(gateway, root).await,
        )
        .unwrap_or_default();
        let has_prettier_config = !config_files.is_empty()
            || manifest.as_ref().is_some_and(Manifest::has_prettier_key);

        let language = detect_language(root, manifest.as_ref(), forced, conventions);

        tracing::debug!(
            react = is_react,
            prettier_config = has_prettier_config,
            language = %language,
            "probed workspace"
        );

        Self {
            manifest,
            language,
            is_react,
            has_prettier_config,
        }
    }
}

/// Formatter configuration files directly inside `root`
pub async fn find_prettier_configs<G: Gateway>(gateway: &G, root: &Path) -> Result<Vec<PathBuf>> {
    let entries = gateway.list_dir(root).await?;
    Ok(entries
        .into_iter()
        .filter(|path| {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().to_lowercase())
                .unwrap_or_default();
            name.contains(PRETTIER) && !NOT_PRETTIER_CONFIG.contains(&name.as_str()) && path.is_file()
        })
        .collect())
}
