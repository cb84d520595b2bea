use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (for retry logic)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    #[error("'{url}' does not look like a repository URL")]
    InvalidRemoteUrl { url: String },

    #[error("No \"scripts\" block found in {path}")]
    ScriptBlockNotFound { path: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidProjectName { name, reason } => vec![
                format!("Project name '{}' is invalid: {}", name, reason),
                "Use alphanumeric characters, hyphens, and underscores".into(),
                "Examples: my-project, my_app, project123".into(),
            ],
            Self::InvalidRemoteUrl { url } => vec![
                format!("'{}' was rejected by the URL shape check", url),
                "Expected something like https://host/path or git://host/path.git".into(),
            ],
            Self::ScriptBlockNotFound { path } => vec![
                format!("{} has no `\"scripts\": {{` stanza to extend", path),
                "Add the script entry by hand, or re-run the package manager init".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidProjectName { .. } | Self::InvalidRemoteUrl { .. } => {
                ErrorCategory::Validation
            }
            Self::ScriptBlockNotFound { .. } => ErrorCategory::NotFound,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
