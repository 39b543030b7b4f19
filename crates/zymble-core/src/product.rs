//! Product configuration trait for CLI binaries
//!
//! A binary implements this trait to give the shared pipeline its identity
//! and the conventions it generates with.

use crate::config::Conventions;

/// Configuration trait for CLI products built on this library
///
/// Each product defines:
/// - Product identity (name, display name)
/// - Documentation link
/// - Environment variable controlling log output
/// - Conventions applied before per-project overrides
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name (used for the CLI command and settings file)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// CLI description shown in help text
    fn cli_description(&self) -> &'static str;

    /// URL for product documentation
    fn docs_url(&self) -> &'static str;

    /// Environment variable holding the log filter (e.g. `ZYMBLE_LOG=debug`)
    fn log_env(&self) -> &'static str;

    /// Per-project settings file looked up in the workspace root
    fn project_config_file(&self) -> String {
        format!(".{}.yaml", self.name())
    }

    /// Conventions before per-project overrides are applied
    fn conventions(&self) -> Conventions {
        Conventions::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct Demo;

    impl ProductConfig for Demo {
        fn name(&self) -> &'static str {
            "demo"
        }

        fn display_name(&self) -> &'static str {
            "Demo"
        }

        fn cli_description(&self) -> &'static str {
            "demo scaffolder"
        }

        fn docs_url(&self) -> &'static str {
            "https://example.invalid/docs"
        }

        fn log_env(&self) -> &'static str {
            "DEMO_LOG"
        }
    }

    #[test]
    fn test_settings_file_follows_name() {
        assert_eq!(Demo.project_config_file(), ".demo.yaml");
        assert_eq!(Demo.conventions().hook_prefix, "use");
    }
}
