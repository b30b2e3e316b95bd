//! Error types for readmegen.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for readmegen operations.
#[derive(Error, Debug)]
pub enum ReadmeError {
    /// User provided invalid arguments or the system is in an invalid state.
    #[error("{0}")]
    UserError(String),

    /// No remote of the worktree points at github.com.
    #[error("no GitHub remote found in '{0}'")]
    NoRemote(String),

    /// Git (or another shell command) failed to run or exited non-zero.
    #[error("Git operation failed: {0}")]
    GitError(String),

    /// The README template could not be rendered.
    #[error("Template rendering failed: {0}")]
    TemplateError(String),

    /// The rendered README could not be written.
    #[error("Write failed: {0}")]
    WriteError(String),
}

impl ReadmeError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            ReadmeError::UserError(_) => exit_codes::USER_ERROR,
            ReadmeError::NoRemote(_) => exit_codes::NO_REMOTE,
            ReadmeError::GitError(_) => exit_codes::GIT_FAILURE,
            ReadmeError::WriteError(_) => exit_codes::WRITE_FAILURE,
            ReadmeError::TemplateError(_) => exit_codes::TEMPLATE_FAILURE,
        }
    }
}

impl From<crate::readme::TemplateError> for ReadmeError {
    fn from(err: crate::readme::TemplateError) -> Self {
        ReadmeError::TemplateError(err.to_string())
    }
}

/// Result type alias for readmegen operations.
pub type Result<T> = std::result::Result<T, ReadmeError>;
