//! Zymble Core - Shared library for React scaffolding CLIs
//!
//! This library generates component folders, custom hook folders and
//! Prettier configuration files inside an existing project. It is designed
//! to be driven by a CLI binary that supplies a [`ProductConfig`].
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Name normalization, templates, file sets,
//!   project inspection, package-manager detection
//! - **Layer 2: Workflow Orchestration** - [`commands`] pipelines driven
//!   through the [`Gateway`] trait
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based gateway and
//!   session (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use zymble_core::{files, naming, project::LanguageVariant, request, Conventions};
//!
//! let name = naming::normalize_name("primary button", "Component name")?;
//! let request = request::ComponentRequest::new(
//!     name,
//!     request::ComponentOptions { has_props: true },
//!     LanguageVariant::Typed,
//! )?;
//! let files = files::assemble_component_files(&request, &Conventions::default())?;
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod files;
pub mod gateway;
pub mod materialize;
pub mod naming;
pub mod product;
pub mod project;
pub mod request;
pub mod runtime;
pub mod target;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

#[cfg(test)]
mod testing;

// Re-export main types for convenience
pub use commands::{run_command, Command, Outcome, Session};
pub use config::Conventions;
pub use error::{Result, ScaffoldError, Severity};
pub use gateway::Gateway;
pub use product::ProductConfig;
pub use project::LanguageVariant;
pub use runtime::PackageManager;
pub use templates::ConfigFormat;

#[cfg(feature = "tui")]
pub use tui::run;
