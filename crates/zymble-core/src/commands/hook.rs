//! `hook` command

use super::{Outcome, Session};
use crate::error::Result;
use crate::files::assemble_hook_files;
use crate::gateway::{Gateway, TextPrompt};
use crate::materialize::{ensure_directory, write_file_set};
use crate::naming::hook_name;
use crate::request::{HookOptions, HookRequest};
use crate::target::{resolve_target, Shortcut, TargetQuery};
use std::path::PathBuf;

/// Presets for the hook pipeline; anything left `None` is asked for
#[derive(Debug, Clone, Default)]
pub struct HookArgs {
    /// Folder (or file inside it) the command was invoked on
    pub context_path: Option<PathBuf>,
    pub name: Option<String>,
    pub has_state: Option<bool>,
    pub has_effect: Option<bool>,
}

const NAME_PROMPT: TextPrompt<'static> = TextPrompt {
    title: "Hook Name",
    prompt: "Enter Hook Name. (eg. State)",
    placeholder: "WindowSize",
};

/// Generate `<target>/<useName>/` with the hook, its test and return type
pub async fn create_hook<G: Gateway>(session: &Session<'_, G>, args: HookArgs) -> Result<Outcome> {
    let conventions = &session.conventions;

    let normalized = session
        .collect_name(args.name, NAME_PROMPT, "Hook name")
        .await?;
    let name = hook_name(&normalized, conventions.hook_prefix);

    let has_state = session
        .collect_flag(args.has_state, "Do you want to include state?", "State choice")
        .await?;
    let has_effect = session
        .collect_flag(args.has_effect, "Do you want to include an effect?", "Effect choice")
        .await?;

    let shortcuts = [Shortcut {
        label: conventions.hooks_shortcut.clone(),
        path: session.workspace.root.join(&conventions.hooks_shortcut),
    }];
    let target = resolve_target(
        session.gateway,
        &session.workspace,
        conventions,
        TargetQuery {
            context_path: args.context_path.as_deref(),
            convention_dir: Some(&conventions.hooks_dir),
            shortcuts: &shortcuts,
            non_interactive: session.assume_yes,
        },
    )
    .await?;
    tracing::debug!(path = %target.path.display(), via = %target.provenance, "resolved target");

    let dir = target.path.join(&name);
    ensure_directory(session.gateway, &dir, &name, session.assume_yes).await?;

    let request = HookRequest::new(
        name,
        HookOptions {
            has_state,
            has_effect,
        },
        session.project.language,
    )?;
    let files = assemble_hook_files(&request, conventions)?;
    let written = write_file_set(session.gateway, &dir, files).await?;

    session
        .gateway
        .notify_success(&format!("Custom hook {} created successfully!", request.name()));

    Ok(Outcome::Generated {
        dir,
        files: written,
    })
}
