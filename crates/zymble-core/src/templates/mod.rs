//! Source text generators
//!
//! This module provides:
//! - Component templates (source, props type, test)
//! - Hook templates (source, return type, test)
//! - Prettier configuration content in JSON, YAML, or module form
//!
//! Templates are pure string assembly; their exact layout is part of their
//! contract and is asserted verbatim in the tests.

pub mod component;
pub mod hook;
pub mod prettier;

pub use component::{component_props, component_source, component_test};
pub use hook::{hook_source, hook_test, hook_types};
pub use prettier::{render_config, ConfigFormat, PrettierConfig};
