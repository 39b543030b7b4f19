//! Charm-style CLI session using cliclack

use super::gateway::TerminalGateway;
use crate::commands::{
    run_command, Command, ComponentArgs, HookArgs, Outcome, PrettierArgs, Session,
};
use crate::error::ScaffoldError;
use crate::product::ProductConfig;
use crate::project::ProjectContext;
use crate::target::Workspace;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// CLI arguments shared by every command
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Workspace root; defaults to the current directory
    pub workspace: Option<PathBuf>,

    /// File open in the invoking editor, offered as "Current Folder"
    pub active_file: Option<PathBuf>,

    /// Auto-confirm all prompts (non-interactive mode)
    pub yes: bool,

    /// Command to run; asked for when absent
    pub command: Option<Command>,
}

/// Restore the terminal cursor on panic and on Ctrl+C
pub fn install_terminal_guards() {
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();
}

/// Run one command with interactive prompts
///
/// Command failures are reported on the terminal and turned into a failing
/// exit code; only setup errors come back as `Err`.
pub async fn run<C: ProductConfig>(config: &C, args: CliArgs) -> Result<ExitCode> {
    cliclack::intro(config.display_name())?;

    let root = match args.workspace {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to read the current directory")?,
    };
    let root = std::path::absolute(&root)
        .with_context(|| format!("Invalid workspace path: {}", root.display()))?;
    if !root.is_dir() {
        anyhow::bail!("Workspace does not exist: {}", root.display());
    }

    let gateway = TerminalGateway::new();
    let workspace = Workspace::new(&root).with_active_file(args.active_file);
    let session = Session::open(
        &gateway,
        workspace,
        &config.conventions(),
        &config.project_config_file(),
        args.yes,
    )
    .await;

    cliclack::log::info(workspace_summary(&root, &session.project))?;

    let command = match args.command {
        Some(command) => command,
        None if args.yes => anyhow::bail!("No command given (required with --yes)"),
        None => match select_command()? {
            Some(command) => command,
            None => {
                cliclack::outro_cancel("Cancelled")?;
                return Ok(ExitCode::SUCCESS);
            }
        },
    };

    let result = run_command(&session, command).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    match &result {
        Ok(outcome) => {
            print_outcome(&root, outcome);
            cliclack::outro("Happy coding!")?;
        }
        // Already shown by the gateway
        Err(_) => cliclack::outro_cancel(format!("See {} for help", config.docs_url()))?,
    }
    Ok(ExitCode::from(exit_status(&result)))
}

fn exit_status(result: &std::result::Result<Outcome, ScaffoldError>) -> u8 {
    match result {
        Ok(_) => 0,
        Err(_) => 1,
    }
}

fn workspace_summary(root: &Path, project: &ProjectContext) -> String {
    let mut summary = format!(
        "Workspace: {} ({})",
        root.display(),
        project.language.display_name()
    );
    if project.has_prettier_config {
        summary.push_str(", Prettier already configured");
    }
    summary
}

fn select_command() -> Result<Option<Command>> {
    let commands = [
        Command::Component(ComponentArgs::default()),
        Command::Hook(HookArgs::default()),
        Command::Prettier(PrettierArgs::default()),
    ];

    let mut select = cliclack::select("What would you like to do?");
    for (idx, command) in commands.iter().enumerate() {
        select = select.item(idx, command.label(), "");
    }

    match select.interact() {
        Ok(idx) => Ok(commands.into_iter().nth(idx)),
        Err(e) if e.kind() == std::io::ErrorKind::Interrupted => Ok(None),
        Err(e) => Err(e.into()),
    }
}

fn print_outcome(root: &Path, outcome: &Outcome) {
    let relative = |path: &Path| {
        path.strip_prefix(root)
            .map(|p| p.display().to_string())
            .unwrap_or_else(|_| path.display().to_string())
    };

    match outcome {
        Outcome::Generated { files, .. } => {
            println!();
            for file in files {
                println!("  {}", console::style(relative(file)).green());
            }
            println!();
        }
        Outcome::Config { path } => {
            println!();
            println!("  {}", console::style(relative(path)).green());
            println!();
        }
    }
}
