use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

use crate::constants::exit_codes;

/// A single file that could not be rendered or written during generation.
#[derive(Debug)]
pub struct FileFailure {
    pub path: PathBuf,
    pub error: Error,
}

impl fmt::Display for FileFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.error)
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse JSON. Original error: {0}")]
    JSONParseError(#[from] serde_json::Error),

    #[error("Failed to parse ignore pattern. Original error: {0}")]
    GlobSetParseError(#[from] globset::Error),

    #[error("Failed to fetch template: {0}.")]
    Fetch(String),

    #[error("Failed to render '{template}'. Original error: {source}")]
    Render {
        template: String,
        #[source]
        source: minijinja::Error,
    },

    #[error("Invalid template configuration: {0}.")]
    Config(String),

    #[error("Invalid project name: \"{name}\"\n{}", .problems.join("\n"))]
    InvalidName { name: String, problems: Vec<String> },

    #[error("Prompt aborted by user.")]
    PromptAborted,

    #[error("Operation cancelled.")]
    ConflictCancelled,

    #[error("Cannot proceed: target directory '{output_dir}' already exists. Use --on-conflict to choose an action.")]
    OutputDirectoryExists { output_dir: String },

    #[error("Cannot proceed: template directory '{template_dir}' does not exist.")]
    TemplateDoesNotExistsError { template_dir: String },

    #[error("Generation finished with {} failed file(s):\n{}", .failures.len(), format_failures(.failures))]
    Generation { failures: Vec<FileFailure> },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

fn format_failures(failures: &[FileFailure]) -> String {
    failures.iter().map(|failure| format!("  {failure}")).collect::<Vec<_>>().join("\n")
}

impl Error {
    /// Exit status the process should terminate with for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::ConflictCancelled => exit_codes::SUCCESS,
            _ => exit_codes::FAILURE,
        }
    }
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        match err {
            dialoguer::Error::IO(e) if e.kind() == std::io::ErrorKind::Interrupted => {
                Error::PromptAborted
            }
            dialoguer::Error::IO(e) => Error::IoError(e),
        }
    }
}

/// Convenience type alias for Results with the crate error type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Default error handler that prints the error and exits the program.
///
/// A cancelled conflict resolution is a clean exit and prints nothing.
pub fn default_error_handler(err: Error) {
    let code = err.exit_code();
    if !matches!(err, Error::ConflictCancelled) {
        eprintln!("{err}");
    }
    std::process::exit(code);
}
