//! In-memory workspace adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Component, Path, PathBuf},
    sync::{Arc, RwLock},
};

use stacksmith_core::{
    application::{ApplicationError, ports::Workspace},
    error::SetupResult,
};

/// In-memory workspace for testing.
///
/// Models the two properties the pipeline depends on: a current-directory
/// cursor that relative paths resolve against, and write-fails-without-
/// parent semantics. The root `/` always exists and is the initial cursor.
#[derive(Debug, Clone)]
pub struct MemoryWorkspace {
    inner: Arc<RwLock<MemoryWorkspaceInner>>,
}

#[derive(Debug)]
struct MemoryWorkspaceInner {
    cwd: PathBuf,
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
    modes: HashMap<PathBuf, u32>,
}

impl Default for MemoryWorkspaceInner {
    fn default() -> Self {
        let mut directories = HashSet::new();
        directories.insert(PathBuf::from("/"));
        Self {
            cwd: PathBuf::from("/"),
            files: HashMap::new(),
            directories,
            modes: HashMap::new(),
        }
    }
}

impl MemoryWorkspace {
    /// Create a new empty memory workspace rooted at `/`.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryWorkspaceInner::default())),
        }
    }

    /// Mode bits a file was written with (testing helper).
    pub fn mode_of(&self, path: &Path) -> Option<u32> {
        let inner = self.inner.read().unwrap();
        let resolved = resolve(&inner.cwd, path);
        inner.modes.get(&resolved).copied()
    }

    /// `true` if the path resolves to a directory (not a file).
    pub fn has_dir(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap();
        let resolved = resolve(&inner.cwd, path);
        inner.directories.contains(&resolved)
    }

    /// List all files (testing helper).
    pub fn list_files(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap();
        inner.files.keys().cloned().collect()
    }
}

impl Default for MemoryWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve `path` against `cwd` and normalize `.` / `..` components.
fn resolve(cwd: &Path, path: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    };

    let mut out = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::ParentDir => {
                out.pop();
            }
            Component::CurDir => {}
            other => out.push(other),
        }
    }
    out
}

fn fs_error(path: &Path, reason: &str) -> stacksmith_core::error::SetupError {
    ApplicationError::Filesystem {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
    .into()
}

impl Workspace for MemoryWorkspace {
    fn mkdir(&self, path: &Path) -> SetupResult<()> {
        let mut inner = self.inner.write().unwrap();
        let resolved = resolve(&inner.cwd, path);

        if inner.directories.contains(&resolved) || inner.files.contains_key(&resolved) {
            return Err(fs_error(&resolved, "already exists"));
        }
        if let Some(parent) = resolved.parent() {
            if !inner.directories.contains(parent) {
                return Err(fs_error(&resolved, "parent directory does not exist"));
            }
        }

        inner.directories.insert(resolved);
        Ok(())
    }

    fn set_current_dir(&self, path: &Path) -> SetupResult<()> {
        let mut inner = self.inner.write().unwrap();
        let resolved = resolve(&inner.cwd, path);

        if !inner.directories.contains(&resolved) {
            return Err(fs_error(&resolved, "no such directory"));
        }
        inner.cwd = resolved;
        Ok(())
    }

    fn current_dir(&self) -> SetupResult<PathBuf> {
        Ok(self.inner.read().unwrap().cwd.clone())
    }

    fn write_file(&self, path: &Path, contents: &str, mode: u32) -> SetupResult<()> {
        let mut inner = self.inner.write().unwrap();
        let resolved = resolve(&inner.cwd, path);

        if let Some(parent) = resolved.parent() {
            if !inner.directories.contains(parent) {
                return Err(fs_error(&resolved, "containing directory does not exist"));
            }
        }

        inner.files.insert(resolved.clone(), contents.to_string());
        inner.modes.insert(resolved, mode);
        Ok(())
    }

    fn read_file(&self, path: &Path) -> SetupResult<String> {
        let inner = self.inner.read().unwrap();
        let resolved = resolve(&inner.cwd, path);
        inner
            .files
            .get(&resolved)
            .cloned()
            .ok_or_else(|| fs_error(&resolved, "no such file"))
    }

    fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap();
        let resolved = resolve(&inner.cwd, path);
        inner.files.contains_key(&resolved) || inner.directories.contains(&resolved)
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_paths_resolve_against_the_cursor() {
        let ws = MemoryWorkspace::new();
        ws.mkdir(Path::new("demo")).unwrap();
        ws.set_current_dir(Path::new("demo")).unwrap();
        ws.mkdir(Path::new("backend")).unwrap();

        assert!(ws.has_dir(Path::new("/demo/backend")));
        assert_eq!(ws.current_dir().unwrap(), PathBuf::from("/demo"));
    }

    #[test]
    fn parent_dir_components_normalize() {
        let ws = MemoryWorkspace::new();
        ws.mkdir(Path::new("demo")).unwrap();
        ws.set_current_dir(Path::new("demo")).unwrap();
        ws.set_current_dir(Path::new("..")).unwrap();
        assert_eq!(ws.current_dir().unwrap(), PathBuf::from("/"));
    }

    #[test]
    fn mkdir_fails_on_existing_path() {
        let ws = MemoryWorkspace::new();
        ws.mkdir(Path::new("demo")).unwrap();
        assert!(ws.mkdir(Path::new("demo")).is_err());
    }

    #[test]
    fn mkdir_fails_without_parent() {
        let ws = MemoryWorkspace::new();
        assert!(ws.mkdir(Path::new("a/b")).is_err());
    }

    #[test]
    fn write_requires_the_containing_directory() {
        let ws = MemoryWorkspace::new();
        assert!(
            ws.write_file(Path::new("demo/file"), "x", 0o644).is_err()
        );
        ws.mkdir(Path::new("demo")).unwrap();
        ws.write_file(Path::new("demo/file"), "x", 0o644).unwrap();
        assert_eq!(ws.read_file(Path::new("demo/file")).unwrap(), "x");
        assert_eq!(ws.mode_of(Path::new("demo/file")), Some(0o644));
    }

    #[test]
    fn chdir_to_a_missing_directory_fails() {
        let ws = MemoryWorkspace::new();
        assert!(ws.set_current_dir(Path::new("nope")).is_err());
    }

    #[test]
    fn exists_sees_files_and_directories() {
        let ws = MemoryWorkspace::new();
        ws.mkdir(Path::new("demo")).unwrap();
        ws.write_file(Path::new("demo/x"), "1", 0o644).unwrap();
        assert!(ws.exists(Path::new("demo")));
        assert!(ws.exists(Path::new("demo/x")));
        assert!(!ws.exists(Path::new("demo/y")));
    }
}
