//! Top-level commands
//!
//! Each command runs a linear pipeline and stops at the first failure or
//! cancellation:
//!
//! `CollectName -> CollectFlags -> ResolveTarget -> EnsureDirectory ->
//! AssembleFiles -> WriteFiles -> ReportSuccess`
//!
//! [`run_command`] is the error boundary: failures are logged, shown to the
//! user through the gateway and returned.

pub mod component;
pub mod hook;
pub mod prettier;

use crate::config::{Conventions, ProjectSettings};
use crate::error::{minor, Result, ScaffoldError};
use crate::gateway::{ask_yes_no, Gateway, TextPrompt};
use crate::naming::normalize_name;
use crate::project::ProjectContext;
use crate::target::Workspace;
use std::path::PathBuf;

pub use component::{create_component, ComponentArgs};
pub use hook::{create_hook, HookArgs};
pub use prettier::{setup_prettier, PrettierArgs};

/// One invocable action
#[derive(Debug, Clone)]
pub enum Command {
    Component(ComponentArgs),
    Hook(HookArgs),
    Prettier(PrettierArgs),
}

impl Command {
    pub fn label(&self) -> &'static str {
        match self {
            Command::Component(_) => "Create component",
            Command::Hook(_) => "Create hook",
            Command::Prettier(_) => "Add Prettier config",
        }
    }
}

/// What a successful command produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A populated entity folder
    Generated { dir: PathBuf, files: Vec<PathBuf> },
    /// A single configuration file
    Config { path: PathBuf },
}

/// Everything a command needs, assembled once per invocation
pub struct Session<'a, G: Gateway> {
    pub gateway: &'a G,
    pub workspace: Workspace,
    pub conventions: Conventions,
    pub project: ProjectContext,
    /// Answer every question with its default instead of prompting
    pub assume_yes: bool,
}

impl<'a, G: Gateway> Session<'a, G> {
    /// Load project settings and probe the workspace
    pub async fn open(
        gateway: &'a G,
        workspace: Workspace,
        base: &Conventions,
        settings_file: &str,
        assume_yes: bool,
    ) -> Self {
        let settings = minor(
            "Load project settings",
            ProjectSettings::load(&workspace.root, settings_file).await,
        )
        .unwrap_or_default();
        let conventions = settings.apply(base, &workspace.root);
        let project =
            ProjectContext::probe(gateway, &workspace.root, &conventions, settings.language).await;

        Self {
            gateway,
            workspace,
            conventions,
            project,
            assume_yes,
        }
    }

    /// Prompt for (or take) a name and normalize it
    async fn collect_name(
        &self,
        preset: Option<String>,
        prompt: TextPrompt<'_>,
        field: &str,
    ) -> Result<String> {
        let raw = match preset {
            Some(name) => Some(name),
            None if self.assume_yes => None,
            None => self.gateway.ask_text(prompt).await?,
        };
        let raw = raw.ok_or_else(|| ScaffoldError::empty_input(field))?;
        normalize_name(&raw, field)
    }

    /// Take a preset flag, default to "No" when not prompting, else ask.
    /// Dismissing the question stops the command.
    async fn collect_flag(&self, preset: Option<bool>, prompt: &str, field: &str) -> Result<bool> {
        match preset {
            Some(value) => Ok(value),
            None if self.assume_yes => Ok(false),
            None => {
                let options = [
                    self.conventions.yes_label.to_string(),
                    self.conventions.no_label.to_string(),
                ];
                match self.gateway.ask_choice(prompt, &options).await? {
                    Some(choice) => Ok(choice == 0),
                    None => Err(ScaffoldError::empty_input(field)),
                }
            }
        }
    }

    /// Confirmation questions default to "Yes" when not prompting
    async fn confirm(&self, prompt: &str) -> Result<bool> {
        if self.assume_yes {
            return Ok(true);
        }
        ask_yes_no(self.gateway, &self.conventions, prompt).await
    }

    fn warn_unless_react(&self) {
        if !self.project.is_react {
            tracing::warn!("no react dependency in package.json");
            self.gateway
                .notify_warning("This does not look like a React project; generating anyway.");
        }
    }
}

/// Run a command, reporting any failure to the user
pub async fn run_command<G: Gateway>(session: &Session<'_, G>, command: Command) -> Result<Outcome> {
    let label = command.label();
    tracing::debug!(command = label, root = %session.workspace.root.display(), "running");

    let result = match command {
        Command::Component(args) => create_component(session, args).await,
        Command::Hook(args) => create_hook(session, args).await,
        Command::Prettier(args) => setup_prettier(session, args).await,
    };

    if let Err(e) = &result {
        tracing::error!(command = label, severity = %e.severity(), "{}", e);
        session.gateway.notify_error(&e.to_string());
    }
    result
}
