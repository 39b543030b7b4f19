//! Gateway backed by cliclack prompts on the terminal

use crate::error::{Result, ScaffoldError};
use crate::gateway::{Gateway, TextPrompt};
use std::io;
use std::path::{Path, PathBuf};

/// Prompts on stdin/stderr; file-system access uses the trait defaults
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalGateway;

impl TerminalGateway {
    pub fn new() -> Self {
        Self
    }
}

/// Ctrl+C / Esc in a prompt is a dismissal, anything else a failure
fn dismissed<T>(result: io::Result<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.kind() == io::ErrorKind::Interrupted => Ok(None),
        Err(source) => Err(ScaffoldError::Prompt { source }),
    }
}

impl Gateway for TerminalGateway {
    async fn ask_text(&self, prompt: TextPrompt<'_>) -> Result<Option<String>> {
        let _ = cliclack::log::step(prompt.title);
        dismissed(
            cliclack::input(prompt.prompt)
                .placeholder(prompt.placeholder)
                .interact(),
        )
    }

    async fn ask_choice(&self, prompt: &str, options: &[String]) -> Result<Option<usize>> {
        let mut select = cliclack::select(prompt);
        for (idx, option) in options.iter().enumerate() {
            select = select.item(idx, option, "");
        }
        dismissed(select.interact())
    }

    async fn confirm_overwrite(&self, label: &str, path: &Path) -> Result<bool> {
        let question = format!(
            "{} already exists at {}. Overwrite it?",
            label,
            console::style(path.display()).cyan()
        );
        let answer = dismissed(
            cliclack::confirm(question)
                .initial_value(false)
                .interact(),
        )?;
        Ok(answer.unwrap_or(false))
    }

    async fn browse_folder(&self, start: &Path) -> Result<Option<PathBuf>> {
        let base = start.to_path_buf();
        let validation_base = base.clone();
        let input = dismissed(
            cliclack::input("Folder path (relative to the workspace)")
                .placeholder(".")
                .default_input(".")
                .validate(move |input: &String| {
                    if validation_base.join(input).is_dir() {
                        Ok(())
                    } else {
                        Err("Folder does not exist")
                    }
                })
                .interact::<String>(),
        )?;
        Ok(input.map(|folder| base.join(folder)))
    }

    fn notify_success(&self, message: &str) {
        let _ = cliclack::log::success(message);
    }

    fn notify_warning(&self, message: &str) {
        let _ = cliclack::log::warning(message);
    }

    fn notify_error(&self, message: &str) {
        let _ = cliclack::log::error(message);
    }
}
