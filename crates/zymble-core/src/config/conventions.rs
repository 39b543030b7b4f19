//! Naming, labelling and layout conventions applied to every command

use crate::target::Shortcut;

/// Import lines emitted at the top of generated test files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestImports {
    /// Import of the component render helper
    pub render: &'static str,
    /// Import of the hook render helper
    pub render_hook: &'static str,
    /// Import of the test runner globals
    pub runner: &'static str,
}

impl Default for TestImports {
    fn default() -> Self {
        Self {
            render: "import { render } from '@testing-library/react';",
            render_hook: "import { renderHook } from '@testing-library/react-hooks';",
            runner: "import { describe, expect, it } from 'vitest';",
        }
    }
}

/// Immutable conventions built once at start-up and passed to each component
#[derive(Debug, Clone)]
pub struct Conventions {
    /// Affirmative answer in yes/no menus
    pub yes_label: &'static str,

    /// Negative answer in yes/no menus
    pub no_label: &'static str,

    /// Folder menu entry for the active file's directory
    pub current_folder_label: &'static str,

    /// Folder menu entry for browsing to a folder
    pub select_folder_label: &'static str,

    /// Prefix every hook name carries
    pub hook_prefix: &'static str,

    /// Module the UI framework primitives are imported from
    pub ui_module: &'static str,

    /// Directory name searched for when placing hooks
    pub hooks_dir: String,

    /// Fallback hooks location offered in the folder menu, relative to the workspace
    pub hooks_shortcut: String,

    /// Extra folder menu entries offered for components, relative to the workspace
    pub component_dirs: Vec<Shortcut>,

    /// Directory names never descended into while searching the workspace
    pub skip_dirs: Vec<String>,

    /// Test file import lines
    pub test_imports: TestImports,
}

impl Default for Conventions {
    fn default() -> Self {
        Self {
            yes_label: "Yes",
            no_label: "No",
            current_folder_label: "Current Folder",
            select_folder_label: "Select Folder",
            hook_prefix: "use",
            ui_module: "react",
            hooks_dir: "hooks".to_string(),
            hooks_shortcut: "src/hooks".to_string(),
            component_dirs: Vec::new(),
            skip_dirs: vec!["node_modules".to_string()],
            test_imports: TestImports::default(),
        }
    }
}

impl Conventions {
    /// Whether a directory entry should be skipped while walking the workspace
    pub fn is_skipped_dir(&self, name: &str) -> bool {
        name.starts_with('.') || self.skip_dirs.iter().any(|d| d == name)
    }
}
