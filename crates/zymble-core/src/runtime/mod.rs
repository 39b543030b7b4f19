//! Package manager detection and dependency installation
//!
//! This module provides:
//! - Package manager detection from lock files (npm, Yarn, pnpm)
//! - Development dependency installation with streamed output

pub mod check;
pub mod installer;

pub use check::{check_package_manager, detect_package_manager, PackageManager, RuntimeInfo};
pub use installer::install_dev_dependencies;
