use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;
use uuid::Uuid;

use crate::domain::{error::DomainError, validation};

/// A validated project name.
///
/// Guaranteed non-empty, free of path separators, and not a dotfile, so it
/// is always usable as a directory name on the host. The name is fixed at
/// construction and never re-read from the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectName(String);

impl ProjectName {
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        validation::validate_project_name(&name)?;
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The database name derived from the project: `<name>_db`.
    pub fn db_name(&self) -> String {
        format!("{}_db", self.0)
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<Path> for ProjectName {
    fn as_ref(&self) -> &Path {
        Path::new(&self.0)
    }
}

/// One wizard run.
///
/// Created once the project root exists; destroyed at exit. The layout
/// flags gate the frontend/backend steps, `bun_initialized` is purely
/// observational.
#[derive(Debug, Clone)]
pub struct Session {
    id: Uuid,
    name: ProjectName,
    root: PathBuf,
    pub frontend_selected: bool,
    pub backend_selected: bool,
    pub bun_initialized: bool,
}

impl Session {
    /// Start a session rooted at the freshly created project directory.
    ///
    /// `root` must be absolute: it is the path every descending step
    /// restores the workspace cursor to.
    pub fn new(name: ProjectName, root: PathBuf) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            root,
            frontend_selected: false,
            backend_selected: false,
            bun_initialized: false,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &ProjectName {
        &self.name
    }

    /// The project root the workspace cursor returns to after every step.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
