//! File entries and per-request file sets

use crate::config::Conventions;
use crate::error::{Result, ScaffoldError};
use crate::request::{ComponentRequest, HookRequest};
use crate::templates::{component, hook};

/// Base name of the type declaration file in every generated folder
pub const TYPES_FILE: &str = "types";

/// One generated file: `<name>.<extension>` and its content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    file_name: String,
    content: String,
}

impl FileEntry {
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Build the entry `<name>.<extension>`; fails when either part is empty
pub fn build_file_entry(name: &str, extension: &str, content: impl Into<String>) -> Result<FileEntry> {
    if name.is_empty() || extension.is_empty() {
        return Err(ScaffoldError::InvalidFileEntry {
            name: name.to_string(),
            extension: extension.to_string(),
        });
    }
    Ok(FileEntry {
        file_name: format!("{}.{}", name, extension),
        content: content.into(),
    })
}

/// Ordered mapping from file name to content with unique names
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileSet {
    entries: Vec<FileEntry>,
}

impl FileSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry; returns false and keeps the existing one on a name clash
    pub fn insert(&mut self, entry: FileEntry) -> bool {
        if self.get(entry.file_name()).is_some() {
            return false;
        }
        self.entries.push(entry);
        true
    }

    pub fn get(&self, file_name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.file_name == file_name)
            .map(|e| e.content.as_str())
    }

    pub fn file_names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.file_name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FileEntry> {
        self.entries.iter()
    }
}

impl IntoIterator for FileSet {
    type Item = FileEntry;
    type IntoIter = std::vec::IntoIter<FileEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

fn collect(entries: Vec<FileEntry>) -> FileSet {
    let mut set = FileSet::new();
    for entry in entries {
        let inserted = set.insert(entry);
        debug_assert!(inserted, "generated file names collide");
    }
    set
}

/// Component source and test, plus the props type when requested
pub fn assemble_component_files(
    request: &ComponentRequest,
    conventions: &Conventions,
) -> Result<FileSet> {
    let name = request.name();
    let variant = request.variant();
    let has_props = request.options().has_props;

    let mut entries = vec![build_file_entry(
        name,
        variant.component_ext(),
        component::component_source(name, has_props, variant, conventions),
    )?];
    if has_props {
        entries.push(build_file_entry(
            TYPES_FILE,
            variant.module_ext(),
            component::component_props(name, variant),
        )?);
    }
    entries.push(build_file_entry(
        &format!("{}.test", name),
        variant.component_ext(),
        component::component_test(name, conventions),
    )?);

    Ok(collect(entries))
}

/// Hook source, test and return type; the flags only shape the source
pub fn assemble_hook_files(request: &HookRequest, conventions: &Conventions) -> Result<FileSet> {
    let name = request.name();
    let variant = request.variant();
    let options = request.options();
    let ext = variant.module_ext();

    let entries = vec![
        build_file_entry(
            name,
            ext,
            hook::hook_source(name, options.has_state, options.has_effect, variant, conventions),
        )?,
        build_file_entry(&format!("{}.test", name), ext, hook::hook_test(name, conventions))?,
        build_file_entry(TYPES_FILE, ext, hook::hook_types(name, variant))?,
    ];

    Ok(collect(entries))
}
