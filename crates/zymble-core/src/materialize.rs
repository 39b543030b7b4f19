//! Directory preparation and file-set writing

use crate::error::{Result, ScaffoldError};
use crate::files::FileSet;
use crate::gateway::Gateway;
use std::path::{Path, PathBuf};

/// Make `path` an empty directory ready for generated files.
///
/// An existing directory is only replaced after confirmation (or when
/// `assume_yes` is set); declining leaves it untouched.
pub async fn ensure_directory<G: Gateway>(
    gateway: &G,
    path: &Path,
    label: &str,
    assume_yes: bool,
) -> Result<()> {
    if gateway.exists(path).await {
        let confirmed = assume_yes
            || gateway.confirm_overwrite(label, path).await?;
        if !confirmed {
            return Err(ScaffoldError::OverwriteDeclined {
                path: path.to_path_buf(),
            });
        }
        if gateway.is_dir(path).await {
            tracing::debug!(path = %path.display(), "replacing existing directory");
            gateway.remove_dir(path).await?;
        } else {
            tracing::debug!(path = %path.display(), "replacing existing file");
            gateway.remove_file(path).await?;
        }
    }

    gateway.ensure_dir(path).await
}

/// Write every entry of `files` into `dir`, returning the written paths.
///
/// Stops at the first failure; files written before it stay on disk.
pub async fn write_file_set<G: Gateway>(
    gateway: &G,
    dir: &Path,
    files: FileSet,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(files.len());

    for entry in files {
        let target_path = dir.join(entry.file_name());
        gateway.write_file(&target_path, entry.content()).await?;
        tracing::debug!(path = %target_path.display(), "wrote file");
        written.push(target_path);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::files::build_file_entry;
    use crate::testing::{Answer, ScriptedGateway};
    use tempfile::TempDir;

    fn file_set(entries: &[(&str, &str, &str)]) -> FileSet {
        let mut set = FileSet::new();
        for (name, ext, content) in entries {
            set.insert(build_file_entry(name, ext, *content).unwrap());
        }
        set
    }

    #[tokio::test]
    async fn test_creates_missing_directory() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("src/components/Button");
        let gateway = ScriptedGateway::new([]);

        ensure_directory(&gateway, &target, "Button", false).await.unwrap();

        assert!(target.is_dir());
        assert!(gateway.asked.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_declined_overwrite_keeps_contents() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("Button");
        std::fs::create_dir_all(&target).unwrap();
        std::fs::write(target.join("Button.tsx"), "original").unwrap();
        let gateway = ScriptedGateway::new([Answer::Confirm(false)]);

        let err = ensure_directory(&gateway, &target, "Button", false)
            .await
            .unwrap_err();

        assert!(matches!(err, ScaffoldError::OverwriteDeclined { .. }));
        assert_eq!(
            std::fs::read_to_string(target.join("Button.tsx")).unwrap(),
            "original"
        );
    }

    #[tokio::test]
    async fn test_confirmed_overwrite_recreates_directory() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("Button");
        std::fs::create_dir_all(&target).unwrap();
        std::fs::write(target.join("stale.txt"), "old").unwrap();
        let gateway = ScriptedGateway::new([Answer::Confirm(true)]);

        ensure_directory(&gateway, &target, "Button", false).await.unwrap();

        assert!(target.is_dir());
        assert!(!target.join("stale.txt").exists());
    }

    #[tokio::test]
    async fn test_confirmed_overwrite_replaces_plain_file() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("Button");
        std::fs::write(&target, "not a folder").unwrap();
        let gateway = ScriptedGateway::new([Answer::Confirm(true)]);

        ensure_directory(&gateway, &target, "Button", false).await.unwrap();

        assert!(target.is_dir());
        assert_eq!(gateway.remaining(), 0);
    }

    #[tokio::test]
    async fn test_assume_yes_skips_confirmation() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("Button");
        std::fs::create_dir_all(&target).unwrap();
        let gateway = ScriptedGateway::new([]);

        ensure_directory(&gateway, &target, "Button", true).await.unwrap();
        assert!(gateway.asked.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_writes_every_entry() {
        let dir = TempDir::new().unwrap();
        let gateway = ScriptedGateway::new([]);
        let files = file_set(&[("a", "ts", "alpha"), ("b", "test.ts", "beta")]);

        let written = write_file_set(&gateway, dir.path(), files).await.unwrap();

        assert_eq!(written.len(), 2);
        assert_eq!(std::fs::read_to_string(dir.path().join("a.ts")).unwrap(), "alpha");
        assert_eq!(std::fs::read_to_string(dir.path().join("b.test.ts")).unwrap(), "beta");
    }

    #[tokio::test]
    async fn test_write_failure_keeps_earlier_files() {
        let dir = TempDir::new().unwrap();
        // A directory squatting on the second file name makes its write fail
        std::fs::create_dir_all(dir.path().join("b.ts")).unwrap();
        let gateway = ScriptedGateway::new([]);
        let files = file_set(&[("a", "ts", "alpha"), ("b", "ts", "beta"), ("c", "ts", "gamma")]);

        let err = write_file_set(&gateway, dir.path(), files).await.unwrap_err();

        assert!(matches!(err, ScaffoldError::FileWrite { .. }));
        assert!(dir.path().join("a.ts").is_file());
        assert!(!dir.path().join("c.ts").exists());
    }
}
