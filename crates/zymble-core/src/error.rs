//! Error taxonomy shared by every scaffolding command

use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result alias used across the core pipeline
pub type Result<T, E = ScaffoldError> = std::result::Result<T, E>;

/// Failures that terminate a scaffolding command
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// A prompt was left blank or dismissed
    #[error("{field} cannot be empty")]
    EmptyInput { field: String },

    /// A name reached the generator without being normalized
    #[error("Invalid name {name:?}: only letters and digits are allowed")]
    InvalidName { name: String },

    /// The user declined a step the command cannot continue without
    #[error("{reason}. Operation cancelled.")]
    Cancelled { reason: String },

    /// No destination directory could be resolved
    #[error("Target folder not found. Operation cancelled.")]
    NoTargetFolder,

    /// The destination already exists and the user declined to replace it
    #[error("{} already exists. Operation cancelled.", path.display())]
    OverwriteDeclined { path: PathBuf },

    /// Writing or preparing a file on disk failed
    #[error("Failed to write {}: {source}", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// No package.json under the workspace
    #[error("package.json not found in {}", root.display())]
    ManifestNotFound { root: PathBuf },

    /// A package.json exists but cannot be parsed
    #[error("Failed to parse {}: {source}", path.display())]
    Manifest {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A file entry was requested without a name or extension
    #[error("Create file entry error: missing file name or extension (name: {name:?}, extension: {extension:?})")]
    InvalidFileEntry { name: String, extension: String },

    /// Generated content could not be serialized
    #[error("Failed to render {what}: {detail}")]
    Render { what: String, detail: String },

    /// The terminal failed while prompting
    #[error("Prompt failed: {source}")]
    Prompt {
        #[source]
        source: io::Error,
    },

    /// A package-manager invocation failed
    #[error("`{command}` failed: {detail}")]
    Install { command: String, detail: String },
}

impl ScaffoldError {
    pub fn empty_input(field: impl Into<String>) -> Self {
        Self::EmptyInput {
            field: field.into(),
        }
    }

    pub fn file_write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::FileWrite {
            path: path.into(),
            source,
        }
    }

    /// Errors raised as `ScaffoldError` always abort the running command.
    /// Minor diagnostics never reach this type; see [`minor`].
    pub fn severity(&self) -> Severity {
        Severity::Severe
    }
}

/// How a failure affects the running command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Logged, the command continues
    Minor,
    /// Logged and propagated, the command stops
    Severe,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Minor => write!(f, "minor"),
            Severity::Severe => write!(f, "severe"),
        }
    }
}

/// Log a best-effort step's failure and carry on without its value
pub fn minor<T, E: fmt::Display>(context: &str, result: std::result::Result<T, E>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(severity = %Severity::Minor, "{}: {}", context, e);
            None
        }
    }
}
