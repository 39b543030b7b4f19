//! `component` command

use super::{Outcome, Session};
use crate::error::Result;
use crate::files::assemble_component_files;
use crate::gateway::{Gateway, TextPrompt};
use crate::materialize::{ensure_directory, write_file_set};
use crate::request::{ComponentOptions, ComponentRequest};
use crate::target::{resolve_target, TargetQuery};
use std::path::PathBuf;

/// Presets for the component pipeline; anything left `None` is asked for
#[derive(Debug, Clone, Default)]
pub struct ComponentArgs {
    /// Folder (or file inside it) the command was invoked on
    pub context_path: Option<PathBuf>,
    pub name: Option<String>,
    pub has_props: Option<bool>,
}

const NAME_PROMPT: TextPrompt<'static> = TextPrompt {
    title: "Component Name",
    prompt: "Enter the component name (alphanumeric only)",
    placeholder: "Button",
};

/// Generate `<target>/<Name>/` with the component, its test and optional props type
pub async fn create_component<G: Gateway>(
    session: &Session<'_, G>,
    args: ComponentArgs,
) -> Result<Outcome> {
    session.warn_unless_react();

    let name = session
        .collect_name(args.name, NAME_PROMPT, "Component name")
        .await?;
    let has_props = session
        .collect_flag(args.has_props, "Should the component contain props?", "Props choice")
        .await?;

    let target = resolve_target(
        session.gateway,
        &session.workspace,
        &session.conventions,
        TargetQuery {
            context_path: args.context_path.as_deref(),
            convention_dir: None,
            shortcuts: &session.conventions.component_dirs,
            non_interactive: session.assume_yes,
        },
    )
    .await?;
    tracing::debug!(path = %target.path.display(), via = %target.provenance, "resolved target");

    let dir = target.path.join(&name);
    ensure_directory(session.gateway, &dir, &name, session.assume_yes).await?;

    let request = ComponentRequest::new(name, ComponentOptions { has_props }, session.project.language)?;
    let files = assemble_component_files(&request, &session.conventions)?;
    let written = write_file_set(session.gateway, &dir, files).await?;

    session
        .gateway
        .notify_success(&format!("Component {} created successfully!", request.name()));

    Ok(Outcome::Generated {
        dir,
        files: written,
    })
}
