//! Zymble CLI - Scaffolding for React components, hooks and Prettier configs

use anyhow::Result;
use clap::{CommandFactory, FromArgMatches, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use zymble_core::commands::{ComponentArgs, HookArgs, PrettierArgs};
use zymble_core::tui::CliArgs;
use zymble_core::{ConfigFormat, PackageManager, ProductConfig};

/// Zymble product configuration
#[derive(Clone)]
pub struct ZymbleConfig;

impl ProductConfig for ZymbleConfig {
    fn name(&self) -> &'static str {
        "zymble"
    }

    fn display_name(&self) -> &'static str {
        "Zymble"
    }

    fn cli_description(&self) -> &'static str {
        "CLI for scaffolding React components, custom hooks and Prettier configs"
    }

    fn docs_url(&self) -> &'static str {
        "https://github.com/zymble/zymble#readme"
    }

    fn log_env(&self) -> &'static str {
        "ZYMBLE_LOG"
    }
}

#[derive(Parser, Debug)]
#[command(name = "zymble")]
#[command(version)]
pub struct Args {
    /// Workspace root (defaults to the current directory)
    #[arg(short, long, global = true)]
    pub workspace: Option<PathBuf>,

    /// File open in the editor; enables the "Current Folder" target
    #[arg(long = "active-file", global = true)]
    pub active_file: Option<PathBuf>,

    /// Auto-confirm all prompts (non-interactive mode)
    #[arg(short, long, global = true)]
    pub yes: bool,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a component folder
    Component(CliComponentArgs),
    /// Create a custom hook folder
    Hook(CliHookArgs),
    /// Add a Prettier configuration file
    Prettier(CliPrettierArgs),
}

#[derive(Parser, Debug)]
pub struct CliComponentArgs {
    /// Folder (or a file inside it) to create the component in
    pub path: Option<PathBuf>,

    /// Component name
    #[arg(short, long)]
    pub name: Option<String>,

    /// Generate a props type
    #[arg(long, overrides_with = "no_props")]
    pub props: bool,

    /// Do not generate a props type
    #[arg(long = "no-props")]
    pub no_props: bool,
}

#[derive(Parser, Debug)]
pub struct CliHookArgs {
    /// Folder (or a file inside it) to create the hook in
    pub path: Option<PathBuf>,

    /// Hook name (the `use` prefix is added when missing)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Initialize state in the hook
    #[arg(long, overrides_with = "no_state")]
    pub state: bool,

    /// Do not initialize state
    #[arg(long = "no-state")]
    pub no_state: bool,

    /// Register an effect in the hook
    #[arg(long, overrides_with = "no_effect")]
    pub effect: bool,

    /// Do not register an effect
    #[arg(long = "no-effect")]
    pub no_effect: bool,
}

#[derive(Parser, Debug)]
pub struct CliPrettierArgs {
    /// Configuration file format
    #[arg(short, long, value_enum)]
    pub format: Option<FormatArg>,

    /// Package manager used to install Prettier when missing
    #[arg(short = 'm', long = "package-manager", value_enum)]
    pub package_manager: Option<ManagerArg>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum FormatArg {
    Json,
    Yaml,
    Js,
    Cjs,
    Mjs,
}

impl From<FormatArg> for ConfigFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => ConfigFormat::Json,
            FormatArg::Yaml => ConfigFormat::Yaml,
            FormatArg::Js => ConfigFormat::Js,
            FormatArg::Cjs => ConfigFormat::Cjs,
            FormatArg::Mjs => ConfigFormat::Mjs,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum ManagerArg {
    Npm,
    Yarn,
    Pnpm,
}

impl From<ManagerArg> for PackageManager {
    fn from(arg: ManagerArg) -> Self {
        match arg {
            ManagerArg::Npm => PackageManager::Npm,
            ManagerArg::Yarn => PackageManager::Yarn,
            ManagerArg::Pnpm => PackageManager::Pnpm,
        }
    }
}

/// `--flag` / `--no-flag` pair; neither means "ask"
fn toggle(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

impl From<Command> for zymble_core::Command {
    fn from(command: Command) -> Self {
        match command {
            Command::Component(args) => zymble_core::Command::Component(ComponentArgs {
                context_path: args.path,
                name: args.name,
                has_props: toggle(args.props, args.no_props),
            }),
            Command::Hook(args) => zymble_core::Command::Hook(HookArgs {
                context_path: args.path,
                name: args.name,
                has_state: toggle(args.state, args.no_state),
                has_effect: toggle(args.effect, args.no_effect),
            }),
            Command::Prettier(args) => zymble_core::Command::Prettier(PrettierArgs {
                format: args.format.map(Into::into),
                package_manager: args.package_manager.map(Into::into),
            }),
        }
    }
}

/// Clap command with the product's help text
fn cli(config: &ZymbleConfig) -> clap::Command {
    Args::command().about(config.cli_description())
}

fn init_tracing(config: &ZymbleConfig, verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(config.log_env())
        .unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    zymble_core::tui::install_terminal_guards();

    let config = ZymbleConfig;
    let args = Args::from_arg_matches(&cli(&config).get_matches()).unwrap_or_else(|e| e.exit());
    init_tracing(&config, args.verbose);

    let cli_args = CliArgs {
        workspace: args.workspace,
        active_file: args.active_file,
        yes: args.yes,
        command: args.command.map(Into::into),
    };
    tracing::debug!(workspace = ?cli_args.workspace, yes = cli_args.yes, "starting");

    zymble_core::run(&config, cli_args).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_pairs() {
        assert_eq!(toggle(false, false), None);
        assert_eq!(toggle(true, false), Some(true));
        assert_eq!(toggle(false, true), Some(false));
    }

    #[test]
    fn test_help_uses_product_description() {
        let config = ZymbleConfig;
        let about = cli(&config).get_about().map(ToString::to_string);
        assert_eq!(about.as_deref(), Some(config.cli_description()));
    }

    #[test]
    fn test_parse_component_flags() {
        let args = Args::parse_from([
            "zymble", "--yes", "component", "src/ui", "--name", "card", "--no-props",
        ]);
        assert!(args.yes);
        let Some(Command::Component(component)) = args.command else {
            panic!("expected component command");
        };
        assert_eq!(component.path, Some(PathBuf::from("src/ui")));
        assert_eq!(toggle(component.props, component.no_props), Some(false));
    }

    #[test]
    fn test_parse_prettier_args() {
        let args = Args::parse_from(["zymble", "prettier", "--format", "yaml", "-m", "pnpm"]);
        let Some(command) = args.command else {
            panic!("expected prettier command");
        };
        let zymble_core::Command::Prettier(prettier) = zymble_core::Command::from(command) else {
            panic!("expected prettier command");
        };
        assert_eq!(prettier.format, Some(ConfigFormat::Yaml));
        assert_eq!(prettier.package_manager, Some(PackageManager::Pnpm));
    }
}
