//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    Filesystem { path: PathBuf, reason: String },

    /// An external command exited non-zero or could not be started.
    #[error("Command '{program}' failed: {reason}")]
    CommandFailed { program: String, reason: String },

    /// Standard input was closed or unreadable mid-prompt.
    #[error("Failed to read user input: {reason}")]
    Input { reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Filesystem { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::CommandFailed { program, .. } => vec![
                format!("Ensure '{}' is installed and in your PATH", program),
                "Check the command output above for details".into(),
            ],
            Self::Input { .. } => vec![
                "Stacksmith is interactive and needs a terminal on stdin".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Filesystem { .. } | Self::CommandFailed { .. } | Self::Input { .. } => {
                ErrorCategory::Internal
            }
        }
    }
}
