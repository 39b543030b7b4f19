//! Per-project overrides read from the workspace root

use super::conventions::Conventions;
use crate::project::language::LanguageVariant;
use crate::target::Shortcut;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A folder shortcut as written in the project file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortcutEntry {
    /// Menu label
    pub label: String,

    /// Path relative to the workspace root
    pub path: PathBuf,
}

/// Contents of the project settings file (e.g. `.zymble.yaml`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSettings {
    /// Force typed or untyped output instead of detecting it
    #[serde(default)]
    pub language: Option<LanguageVariant>,

    /// Directory name searched for when placing hooks
    #[serde(default)]
    pub hooks_dir: Option<String>,

    /// Extra folder shortcuts offered when placing components
    #[serde(default)]
    pub component_dirs: Vec<ShortcutEntry>,
}

impl ProjectSettings {
    /// Load settings from `<root>/<file_name>`, returning defaults when the file is absent
    pub async fn load(root: &Path, file_name: &str) -> Result<Self> {
        let path = root.join(file_name);
        if !tokio::fs::try_exists(&path).await.unwrap_or(false) {
            return Ok(Self::default());
        }

        let content = tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Layer these settings over the base conventions
    pub fn apply(&self, base: &Conventions, root: &Path) -> Conventions {
        let mut conventions = base.clone();
        if let Some(hooks_dir) = &self.hooks_dir {
            conventions.hooks_dir = hooks_dir.clone();
            conventions.hooks_shortcut = format!("src/{}", hooks_dir);
        }
        conventions
            .component_dirs
            .extend(self.component_dirs.iter().map(|entry| Shortcut {
                label: entry.label.clone(),
                path: root.join(&entry.path),
            }));
        conventions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_settings() {
        let settings = ProjectSettings::parse(
            "language: untyped\nhooks_dir: composables\ncomponent_dirs:\n  - label: ui\n    path: src/ui\n",
        )
        .unwrap();

        assert_eq!(settings.language, Some(LanguageVariant::Untyped));
        assert_eq!(settings.hooks_dir.as_deref(), Some("composables"));
        assert_eq!(settings.component_dirs.len(), 1);
    }

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(ProjectSettings::parse("  \n").unwrap(), ProjectSettings::default());
    }

    #[test]
    fn test_apply_overrides_conventions() {
        let settings = ProjectSettings {
            language: None,
            hooks_dir: Some("composables".to_string()),
            component_dirs: vec![ShortcutEntry {
                label: "ui".to_string(),
                path: PathBuf::from("src/ui"),
            }],
        };
        let conventions = settings.apply(&Conventions::default(), Path::new("/proj"));

        assert_eq!(conventions.hooks_dir, "composables");
        assert_eq!(conventions.hooks_shortcut, "src/composables");
        assert_eq!(conventions.component_dirs[0].path, PathBuf::from("/proj/src/ui"));
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let settings = ProjectSettings::load(dir.path(), ".zymble.yaml").await.unwrap();
        assert_eq!(settings, ProjectSettings::default());
    }

    #[tokio::test]
    async fn test_load_malformed_file() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(dir.path().join(".zymble.yaml"), "language: [oops").unwrap();
        assert!(ProjectSettings::load(dir.path(), ".zymble.yaml").await.is_err());
    }
}
