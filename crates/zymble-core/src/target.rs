//! Destination directory resolution

use crate::config::Conventions;
use crate::error::{minor, Result, ScaffoldError};
use crate::gateway::Gateway;
use std::fmt;
use std::path::{Path, PathBuf};

/// A named folder offered in the target menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortcut {
    pub label: String,
    pub path: PathBuf,
}

/// How a target was chosen; diagnostics only
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    MenuContext,
    FoundConvention,
    UserSelected,
    ActiveFileDir,
    WorkspaceRoot,
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Provenance::MenuContext => "context menu",
            Provenance::FoundConvention => "existing convention",
            Provenance::UserSelected => "user selection",
            Provenance::ActiveFileDir => "active file",
            Provenance::WorkspaceRoot => "workspace root",
        };
        write!(f, "{}", s)
    }
}

/// The resolved destination directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetLocation {
    pub path: PathBuf,
    pub provenance: Provenance,
}

impl TargetLocation {
    fn new(path: impl Into<PathBuf>, provenance: Provenance) -> Self {
        Self {
            path: path.into(),
            provenance,
        }
    }
}

/// The workspace a command runs in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    pub root: PathBuf,
    /// File open in the invoking editor, if any
    pub active_file: Option<PathBuf>,
}

impl Workspace {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            active_file: None,
        }
    }

    pub fn with_active_file(mut self, file: Option<PathBuf>) -> Self {
        self.active_file = file;
        self
    }

    /// Resolve `path` against the root when relative
    pub fn absolute(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}

/// Inputs to target resolution beyond the workspace itself
#[derive(Debug, Clone, Default)]
pub struct TargetQuery<'a> {
    /// Path passed by a context-menu invocation
    pub context_path: Option<&'a Path>,
    /// Directory name to look for before asking
    pub convention_dir: Option<&'a str>,
    /// Extra menu entries
    pub shortcuts: &'a [Shortcut],
    /// Skip the menu and fall back to the workspace root
    pub non_interactive: bool,
}

/// Directory a context-menu path designates: a file's parent, or the folder itself
pub fn context_menu_dir(path: &Path) -> PathBuf {
    if path.is_dir() {
        return path.to_path_buf();
    }
    if path.is_file() || path.extension().is_some() {
        if let Some(parent) = path.parent() {
            return parent.to_path_buf();
        }
    }
    path.to_path_buf()
}

/// Decide where generated files go.
///
/// Precedence: the context-menu path, then an existing conventional
/// directory, then the folder menu (shortcuts, the active file's folder,
/// browsing). Non-interactive runs fall back to the workspace root.
pub async fn resolve_target<G: Gateway>(
    gateway: &G,
    workspace: &Workspace,
    conventions: &Conventions,
    query: TargetQuery<'_>,
) -> Result<TargetLocation> {
    if let Some(path) = query.context_path {
        let dir = context_menu_dir(&workspace.absolute(path));
        return Ok(TargetLocation::new(dir, Provenance::MenuContext));
    }

    if let Some(name) = query.convention_dir {
        let found = minor(
            "Find conventional directory",
            gateway
                .find_conventional_dir(&workspace.root, name, conventions)
                .await,
        )
        .flatten();
        if let Some(dir) = found {
            return Ok(TargetLocation::new(dir, Provenance::FoundConvention));
        }
    }

    if query.non_interactive {
        return Ok(TargetLocation::new(
            &workspace.root,
            Provenance::WorkspaceRoot,
        ));
    }

    let mut options: Vec<String> = query.shortcuts.iter().map(|s| s.label.clone()).collect();
    let current_index = workspace.active_file.as_ref().map(|_| {
        options.push(conventions.current_folder_label.to_string());
        options.len() - 1
    });
    options.push(conventions.select_folder_label.to_string());
    let select_index = options.len() - 1;

    let Some(choice) = gateway
        .ask_choice("Select the target folder", &options)
        .await?
    else {
        return Err(ScaffoldError::NoTargetFolder);
    };

    if choice < query.shortcuts.len() {
        let shortcut = &query.shortcuts[choice];
        return Ok(TargetLocation::new(
            workspace.absolute(&shortcut.path),
            Provenance::UserSelected,
        ));
    }

    if Some(choice) == current_index {
        let dir = workspace
            .active_file
            .as_deref()
            .and_then(Path::parent)
            .map(|p| workspace.absolute(p));
        return Ok(match dir {
            Some(dir) => TargetLocation::new(dir, Provenance::ActiveFileDir),
            None => TargetLocation::new(&workspace.root, Provenance::WorkspaceRoot),
        });
    }

    if choice == select_index {
        return match gateway.browse_folder(&workspace.root).await? {
            Some(folder) => Ok(TargetLocation::new(
                workspace.absolute(&folder),
                Provenance::UserSelected,
            )),
            None => Err(ScaffoldError::NoTargetFolder),
        };
    }

    Ok(TargetLocation::new(
        &workspace.root,
        Provenance::WorkspaceRoot,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Answer, ScriptedGateway};
    use tempfile::TempDir;

    fn hooks_shortcut(root: &Path) -> Vec<Shortcut> {
        vec![Shortcut {
            label: "src/hooks".to_string(),
            path: root.join("src/hooks"),
        }]
    }

    #[tokio::test]
    async fn test_context_path_wins_without_prompting() {
        let gateway = ScriptedGateway::new([]);
        let workspace = Workspace::new("/proj");
        let query = TargetQuery {
            context_path: Some(Path::new("/proj/src/components")),
            convention_dir: Some("hooks"),
            ..TargetQuery::default()
        };

        let target = resolve_target(&gateway, &workspace, &Conventions::default(), query)
            .await
            .unwrap();

        assert_eq!(target.path, PathBuf::from("/proj/src/components"));
        assert_eq!(target.provenance, Provenance::MenuContext);
        assert!(gateway.asked.borrow().is_empty());
    }

    #[test]
    fn test_context_menu_file_uses_parent() {
        assert_eq!(
            context_menu_dir(Path::new("/proj/src/App.tsx")),
            PathBuf::from("/proj/src")
        );
        assert_eq!(
            context_menu_dir(Path::new("/proj/src/widgets")),
            PathBuf::from("/proj/src/widgets")
        );
    }

    #[tokio::test]
    async fn test_finds_conventional_directory() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("node_modules/lib/hooks")).unwrap();
        std::fs::create_dir_all(dir.path().join("app/shared/hooks")).unwrap();

        let gateway = ScriptedGateway::new([]);
        let query = TargetQuery {
            convention_dir: Some("hooks"),
            ..TargetQuery::default()
        };
        let target = resolve_target(
            &gateway,
            &Workspace::new(dir.path()),
            &Conventions::default(),
            query,
        )
        .await
        .unwrap();

        assert_eq!(target.path, dir.path().join("app/shared/hooks"));
        assert_eq!(target.provenance, Provenance::FoundConvention);
    }

    #[tokio::test]
    async fn test_shortcut_selection() {
        let dir = TempDir::new().unwrap();
        let shortcuts = hooks_shortcut(dir.path());
        let gateway = ScriptedGateway::new([Answer::Pick(Some("src/hooks"))]);
        let query = TargetQuery {
            convention_dir: Some("hooks"),
            shortcuts: &shortcuts,
            ..TargetQuery::default()
        };

        let target = resolve_target(
            &gateway,
            &Workspace::new(dir.path()),
            &Conventions::default(),
            query,
        )
        .await
        .unwrap();

        assert_eq!(target.path, dir.path().join("src/hooks"));
        assert_eq!(target.provenance, Provenance::UserSelected);
    }

    #[tokio::test]
    async fn test_current_folder_only_with_active_file() {
        let gateway = ScriptedGateway::new([Answer::Pick(Some("Current Folder"))]);
        let workspace = Workspace::new("/proj")
            .with_active_file(Some(PathBuf::from("/proj/src/pages/Home.tsx")));

        let target = resolve_target(
            &gateway,
            &workspace,
            &Conventions::default(),
            TargetQuery::default(),
        )
        .await
        .unwrap();

        assert_eq!(target.path, PathBuf::from("/proj/src/pages"));
        assert_eq!(target.provenance, Provenance::ActiveFileDir);
    }

    #[tokio::test]
    async fn test_browse_for_folder() {
        let gateway = ScriptedGateway::new([
            Answer::Pick(Some("Select Folder")),
            Answer::Folder(Some(PathBuf::from("lib/ui"))),
        ]);

        let target = resolve_target(
            &gateway,
            &Workspace::new("/proj"),
            &Conventions::default(),
            TargetQuery::default(),
        )
        .await
        .unwrap();

        assert_eq!(target.path, PathBuf::from("/proj/lib/ui"));
    }

    #[tokio::test]
    async fn test_dismissed_menu_fails() {
        let gateway = ScriptedGateway::new([Answer::Pick(None)]);
        let err = resolve_target(
            &gateway,
            &Workspace::new("/proj"),
            &Conventions::default(),
            TargetQuery::default(),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ScaffoldError::NoTargetFolder));

        let gateway = ScriptedGateway::new([Answer::Pick(Some("Select Folder")), Answer::Folder(None)]);
        let err = resolve_target(
            &gateway,
            &Workspace::new("/proj"),
            &Conventions::default(),
            TargetQuery::default(),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ScaffoldError::NoTargetFolder));
    }

    #[tokio::test]
    async fn test_non_interactive_falls_back_to_root() {
        let gateway = ScriptedGateway::new([]);
        let query = TargetQuery {
            non_interactive: true,
            ..TargetQuery::default()
        };
        let target = resolve_target(&gateway, &Workspace::new("/proj"), &Conventions::default(), query)
            .await
            .unwrap();

        assert_eq!(target.path, PathBuf::from("/proj"));
        assert_eq!(target.provenance, Provenance::WorkspaceRoot);
    }
}
