//! The narrow interface between the pipeline and its host
//!
//! Commands only talk to prompts, the file system and the package manager
//! through [`Gateway`]. File-system methods default to the real disk so a
//! gateway only has to supply its prompts; tests swap in a scripted one.

use crate::config::Conventions;
use crate::error::{Result, ScaffoldError};
use crate::project::manifest::{find_manifest, Manifest};
use crate::runtime::{install_dev_dependencies, PackageManager};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A free-text question
#[derive(Debug, Clone, Copy)]
pub struct TextPrompt<'a> {
    pub title: &'a str,
    pub prompt: &'a str,
    pub placeholder: &'a str,
}

#[allow(async_fn_in_trait)]
pub trait Gateway {
    /// Ask for text; `None` when dismissed
    async fn ask_text(&self, prompt: TextPrompt<'_>) -> Result<Option<String>>;

    /// Ask to pick one option; the chosen index, `None` when dismissed
    async fn ask_choice(&self, prompt: &str, options: &[String]) -> Result<Option<usize>>;

    /// Ask whether the existing `path` may be replaced
    async fn confirm_overwrite(&self, label: &str, path: &Path) -> Result<bool>;

    /// Let the user pick a folder, starting at `start`; `None` when dismissed
    async fn browse_folder(&self, start: &Path) -> Result<Option<PathBuf>>;

    fn notify_success(&self, message: &str);

    fn notify_warning(&self, message: &str);

    fn notify_error(&self, message: &str);

    async fn exists(&self, path: &Path) -> bool {
        tokio::fs::try_exists(path).await.unwrap_or(false)
    }

    async fn is_dir(&self, path: &Path) -> bool {
        tokio::fs::metadata(path)
            .await
            .map(|meta| meta.is_dir())
            .unwrap_or(false)
    }

    /// Create `path` and its parents
    async fn ensure_dir(&self, path: &Path) -> Result<()> {
        tokio::fs::create_dir_all(path)
            .await
            .map_err(|e| ScaffoldError::file_write(path, e))
    }

    /// Remove `path` and everything below it
    async fn remove_dir(&self, path: &Path) -> Result<()> {
        tokio::fs::remove_dir_all(path)
            .await
            .map_err(|e| ScaffoldError::file_write(path, e))
    }

    async fn remove_file(&self, path: &Path) -> Result<()> {
        tokio::fs::remove_file(path)
            .await
            .map_err(|e| ScaffoldError::file_write(path, e))
    }

    async fn write_file(&self, path: &Path, content: &str) -> Result<()> {
        tokio::fs::write(path, content)
            .await
            .map_err(|e| ScaffoldError::file_write(path, e))
    }

    /// Entries directly inside `dir`, sorted by name
    async fn list_dir(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let mut reader = tokio::fs::read_dir(dir)
            .await
            .map_err(|e| ScaffoldError::file_write(dir, e))?;
        let mut entries = Vec::new();
        while let Some(entry) = reader
            .next_entry()
            .await
            .map_err(|e| ScaffoldError::file_write(dir, e))?
        {
            entries.push(entry.path());
        }
        entries.sort();
        Ok(entries)
    }

    /// First directory named `name` below `root`, skipping conventional noise
    async fn find_conventional_dir(
        &self,
        root: &Path,
        name: &str,
        conventions: &Conventions,
    ) -> Result<Option<PathBuf>> {
        let found = WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| {
                e.depth() == 0 || !conventions.is_skipped_dir(&e.file_name().to_string_lossy())
            })
            .filter_map(|e| e.ok())
            .find(|e| e.depth() > 0 && e.file_type().is_dir() && e.file_name() == name)
            .map(|e| e.into_path());
        Ok(found)
    }

    /// Read the workspace manifest, `None` when there is none
    async fn read_manifest(
        &self,
        root: &Path,
        conventions: &Conventions,
    ) -> Result<Option<Manifest>> {
        let Some(path) = find_manifest(root, conventions) else {
            return Ok(None);
        };
        let content = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| ScaffoldError::file_write(&path, e))?;
        Manifest::parse(path, &content).map(Some)
    }

    /// Install development dependencies with the given package manager
    async fn install_packages(
        &self,
        root: &Path,
        manager: PackageManager,
        packages: &[&str],
    ) -> Result<()> {
        install_dev_dependencies(root, manager, packages).await
    }
}

/// Ask a yes/no question; a dismissed menu counts as "No"
pub async fn ask_yes_no<G: Gateway>(
    gateway: &G,
    conventions: &Conventions,
    prompt: &str,
) -> Result<bool> {
    let options = vec![
        conventions.yes_label.to_string(),
        conventions.no_label.to_string(),
    ];
    Ok(gateway.ask_choice(prompt, &options).await? == Some(0))
}
