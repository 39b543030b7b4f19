//! package.json inspection

use crate::config::Conventions;
use crate::error::{Result, ScaffoldError};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Manifest file name looked up in the workspace
pub const MANIFEST_FILE: &str = "package.json";

/// JavaScript module system declared by the manifest's `type` field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModuleType {
    #[default]
    CommonJs,
    Module,
}

/// A parsed package.json, kept whole so it can be written back
#[derive(Debug, Clone, PartialEq)]
pub struct Manifest {
    path: PathBuf,
    fields: Map<String, Value>,
}

impl Manifest {
    /// Parse manifest text read from `path`
    pub fn parse(path: impl Into<PathBuf>, content: &str) -> Result<Self> {
        let path = path.into();
        let fields = match serde_json::from_str::<Value>(content) {
            Ok(Value::Object(fields)) => fields,
            Ok(_) => Map::new(),
            Err(source) => return Err(ScaffoldError::Manifest { path, source }),
        };
        Ok(Self { path, fields })
    }

    /// Where the manifest was read from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory holding the manifest
    pub fn dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }

    /// Declared version of `name` from `dependencies`, then `devDependencies`
    pub fn dependency(&self, name: &str) -> Option<&str> {
        ["dependencies", "devDependencies"]
            .iter()
            .filter_map(|section| self.fields.get(*section)?.as_object())
            .find_map(|deps| deps.get(name)?.as_str())
    }

    /// Whether `name` appears in the runtime `dependencies` only
    pub fn has_runtime_dependency(&self, name: &str) -> bool {
        self.fields
            .get("dependencies")
            .and_then(Value::as_object)
            .is_some_and(|deps| deps.contains_key(name))
    }

    pub fn module_type(&self) -> ModuleType {
        match self.fields.get("type").and_then(Value::as_str) {
            Some("module") => ModuleType::Module,
            _ => ModuleType::CommonJs,
        }
    }

    /// Whether the manifest embeds a `prettier` configuration key
    pub fn has_prettier_key(&self) -> bool {
        self.fields.contains_key("prettier")
    }

    /// Drop the embedded `prettier` key, returning whether it was present
    pub fn remove_prettier_key(&mut self) -> bool {
        self.fields.shift_remove("prettier").is_some()
    }

    /// Render the manifest back to disk format (two-space JSON, trailing newline)
    pub fn to_json(&self) -> String {
        let mut out = serde_json::to_string_pretty(&self.fields).unwrap_or_else(|_| "{}".into());
        out.push('\n');
        out
    }
}

/// Look up each dependency name, mapping it to its declared version if any
pub fn evaluate_dependencies<'a>(
    names: &[&'a str],
    manifest: &Manifest,
) -> BTreeMap<&'a str, Option<String>> {
    names
        .iter()
        .map(|name| (*name, manifest.dependency(name).map(str::to_string)))
        .collect()
}

/// Locate the workspace manifest: the root first, then the first one found below it
pub fn find_manifest(root: &Path, conventions: &Conventions) -> Option<PathBuf> {
    let direct = root.join(MANIFEST_FILE);
    if direct.is_file() {
        return Some(direct);
    }

    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| {
            e.depth() == 0
                || !e.file_type().is_dir()
                || !conventions.is_skipped_dir(&e.file_name().to_string_lossy())
        })
        .filter_map(|e| e.ok())
        .find(|e| e.file_type().is_file() && e.file_name() == MANIFEST_FILE)
        .map(|e| e.into_path())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manifest(json: &str) -> Manifest {
        Manifest::parse("/proj/package.json", json).unwrap()
    }

    #[test]
    fn test_dependency_lookup() {
        let m = manifest(
            r#"{"dependencies":{"react":"^18.2.0"},"devDependencies":{"typescript":"5.4.0"}}"#,
        );
        assert_eq!(m.dependency("react"), Some("^18.2.0"));
        assert_eq!(m.dependency("typescript"), Some("5.4.0"));
        assert_eq!(m.dependency("prettier"), None);
        assert!(m.has_runtime_dependency("react"));
        assert!(!m.has_runtime_dependency("typescript"));
    }

    #[test]
    fn test_missing_sections() {
        let m = manifest(r#"{"name":"app"}"#);
        assert_eq!(m.dependency("react"), None);
        assert_eq!(m.module_type(), ModuleType::CommonJs);
    }

    #[test]
    fn test_evaluate_dependencies() {
        let m = manifest(r#"{"dependencies":{"express":"4.17.1"},"devDependencies":{"jest":"26.6.3"}}"#);
        let report = evaluate_dependencies(&["express", "jest", "lodash"], &m);

        assert_eq!(report["express"].as_deref(), Some("4.17.1"));
        assert_eq!(report["jest"].as_deref(), Some("26.6.3"));
        assert_eq!(report["lodash"], None);
        assert!(evaluate_dependencies(&[], &m).is_empty());
    }

    #[test]
    fn test_module_type() {
        assert_eq!(manifest(r#"{"type":"module"}"#).module_type(), ModuleType::Module);
        assert_eq!(manifest(r#"{"type":"commonjs"}"#).module_type(), ModuleType::CommonJs);
    }

    #[test]
    fn test_remove_prettier_key_keeps_order() {
        let mut m = manifest(r#"{"name":"app","prettier":{"semi":false},"version":"1.0.0"}"#);
        assert!(m.has_prettier_key());
        assert!(m.remove_prettier_key());
        assert!(!m.remove_prettier_key());
        assert_eq!(m.to_json(), "{\n  \"name\": \"app\",\n  \"version\": \"1.0.0\"\n}\n");
    }

    #[test]
    fn test_parse_error() {
        let err = Manifest::parse("/proj/package.json", "{not json").unwrap_err();
        assert!(matches!(err, ScaffoldError::Manifest { .. }));
    }

    #[test]
    fn test_find_manifest_skips_node_modules() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("node_modules/pkg")).unwrap();
        std::fs::write(dir.path().join("node_modules/pkg/package.json"), "{}").unwrap();
        assert_eq!(find_manifest(dir.path(), &Conventions::default()), None);

        std::fs::create_dir_all(dir.path().join("web")).unwrap();
        std::fs::write(dir.path().join("web/package.json"), "{}").unwrap();
        assert_eq!(
            find_manifest(dir.path(), &Conventions::default()),
            Some(dir.path().join("web/package.json"))
        );

        std::fs::write(dir.path().join("package.json"), "{}").unwrap();
        assert_eq!(
            find_manifest(dir.path(), &Conventions::default()),
            Some(dir.path().join("package.json"))
        );
    }
}
