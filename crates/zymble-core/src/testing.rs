//! Scripted gateway for pipeline tests

use crate::error::Result;
use crate::gateway::{Gateway, TextPrompt};
use crate::runtime::PackageManager;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};

/// A canned answer, consumed in order
#[derive(Debug, Clone)]
pub enum Answer {
    Text(Option<String>),
    /// Pick the option with this label; `None` dismisses the menu
    Pick(Option<&'static str>),
    Confirm(bool),
    Folder(Option<PathBuf>),
}

/// Answers prompts from a queue, uses the real disk, records everything else
#[derive(Debug, Default)]
pub struct ScriptedGateway {
    answers: RefCell<VecDeque<Answer>>,
    pub asked: RefCell<Vec<String>>,
    pub notices: RefCell<Vec<String>>,
    pub installs: RefCell<Vec<(PackageManager, Vec<String>)>>,
}

impl ScriptedGateway {
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            answers: RefCell::new(answers.into_iter().collect()),
            ..Self::default()
        }
    }

    fn next(&self, question: &str) -> Answer {
        self.asked.borrow_mut().push(question.to_string());
        self.answers
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| panic!("no scripted answer for {:?}", question))
    }

    pub fn remaining(&self) -> usize {
        self.answers.borrow().len()
    }
}

impl Gateway for ScriptedGateway {
    async fn ask_text(&self, prompt: TextPrompt<'_>) -> Result<Option<String>> {
        match self.next(prompt.prompt) {
            Answer::Text(text) => Ok(text),
            other => panic!("expected text answer for {:?}, got {:?}", prompt.prompt, other),
        }
    }

    async fn ask_choice(&self, prompt: &str, options: &[String]) -> Result<Option<usize>> {
        match self.next(prompt) {
            Answer::Pick(None) => Ok(None),
            Answer::Pick(Some(label)) => {
                let index = options
                    .iter()
                    .position(|o| o == label)
                    .unwrap_or_else(|| panic!("{:?} not among {:?}", label, options));
                Ok(Some(index))
            }
            other => panic!("expected pick for {:?}, got {:?}", prompt, other),
        }
    }

    async fn confirm_overwrite(&self, label: &str, _path: &Path) -> Result<bool> {
        match self.next(label) {
            Answer::Confirm(yes) => Ok(yes),
            other => panic!("expected confirmation for {:?}, got {:?}", label, other),
        }
    }

    async fn browse_folder(&self, _start: &Path) -> Result<Option<PathBuf>> {
        match self.next("browse") {
            Answer::Folder(folder) => Ok(folder),
            other => panic!("expected folder, got {:?}", other),
        }
    }

    fn notify_success(&self, message: &str) {
        self.notices.borrow_mut().push(format!("success: {}", message));
    }

    fn notify_warning(&self, message: &str) {
        self.notices.borrow_mut().push(format!("warning: {}", message));
    }

    fn notify_error(&self, message: &str) {
        self.notices.borrow_mut().push(format!("error: {}", message));
    }

    async fn install_packages(
        &self,
        _root: &Path,
        manager: PackageManager,
        packages: &[&str],
    ) -> Result<()> {
        self.installs.borrow_mut().push((
            manager,
            packages.iter().map(|p| p.to_string()).collect(),
        ));
        Ok(())
    }
}
