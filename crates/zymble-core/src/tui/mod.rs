//! CLI prompts using cliclack (Charm-style inline prompts)
//!
//! This module is optional and only available when the `tui` feature is enabled.

#[cfg(feature = "tui")]
mod gateway;
#[cfg(feature = "tui")]
mod prompts;

#[cfg(feature = "tui")]
pub use gateway::TerminalGateway;
#[cfg(feature = "tui")]
pub use prompts::{install_terminal_guards, run, CliArgs};
