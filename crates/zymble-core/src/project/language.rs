//! Typed/untyped language detection

use super::manifest::Manifest;
use crate::config::Conventions;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use walkdir::WalkDir;

/// Marker file whose presence makes a project typed
const TYPED_MARKER: &str = "tsconfig.json";

/// Dependency whose declaration makes a project typed
const TYPED_DEPENDENCY: &str = "typescript";

/// Language flavor of generated files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageVariant {
    Typed,
    Untyped,
}

impl LanguageVariant {
    /// Extension for files containing markup (components, component tests)
    pub fn component_ext(&self) -> &'static str {
        match self {
            LanguageVariant::Typed => "tsx",
            LanguageVariant::Untyped => "jsx",
        }
    }

    /// Extension for plain modules (types, hooks)
    pub fn module_ext(&self) -> &'static str {
        match self {
            LanguageVariant::Typed => "ts",
            LanguageVariant::Untyped => "js",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            LanguageVariant::Typed => "TypeScript",
            LanguageVariant::Untyped => "JavaScript",
        }
    }
}

impl fmt::Display for LanguageVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Decide the language flavor for a workspace.
///
/// Typed wins when forced, when the root holds a `tsconfig.json`, when the
/// manifest declares `typescript`, or when any `.ts`/`.tsx` source exists
/// outside skipped directories.
pub fn detect_language(
    root: &Path,
    manifest: Option<&Manifest>,
    forced: Option<LanguageVariant>,
    conventions: &Conventions,
) -> LanguageVariant {
    if let Some(variant) = forced {
        return variant;
    }

    if root.join(TYPED_MARKER).is_file() {
        tracing::debug!("found {}", TYPED_MARKER);
        return LanguageVariant::Typed;
    }

    if manifest.is_some_and(|m| m.dependency(TYPED_DEPENDENCY).is_some()) {
        tracing::debug!("manifest declares {}", TYPED_DEPENDENCY);
        return LanguageVariant::Typed;
    }

    if has_typed_sources(root, conventions) {
        return LanguageVariant::Typed;
    }

    LanguageVariant::Untyped
}

fn has_typed_sources(root: &Path, conventions: &Conventions) -> bool {
    WalkDir::new(root)
        .into_iter()
        .filter_entry(|e| {
            e.depth() == 0
                || !e.file_type().is_dir()
                || !conventions.is_skipped_dir(&e.file_name().to_string_lossy())
        })
        .filter_map(|e| e.ok())
        .any(|e| {
            e.file_type().is_file()
                && e.path()
                    .extension()
                    .is_some_and(|ext| ext == "ts" || ext == "tsx")
        })
}
