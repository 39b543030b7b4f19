//! Conventions and per-project settings

pub mod conventions;
pub mod project;

pub use conventions::{Conventions, TestImports};
pub use project::{ProjectSettings, ShortcutEntry};
