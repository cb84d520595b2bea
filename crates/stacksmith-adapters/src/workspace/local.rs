//! Local filesystem workspace using std::fs and the process cwd.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use stacksmith_core::{
    application::ports::{DIR_MODE, Workspace},
    error::SetupResult,
};

/// Production workspace over the real filesystem.
///
/// The cursor is the process-wide current working directory; the pipeline
/// is the only caller, and it owns the restore discipline.
#[derive(Debug, Clone, Copy)]
pub struct LocalWorkspace;

impl LocalWorkspace {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

impl Workspace for LocalWorkspace {
    fn mkdir(&self, path: &Path) -> SetupResult<()> {
        let mut builder = fs::DirBuilder::new();
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(DIR_MODE);
        }
        builder
            .create(path)
            .map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn set_current_dir(&self, path: &Path) -> SetupResult<()> {
        std::env::set_current_dir(path).map_err(|e| map_io_error(path, e, "change directory"))
    }

    fn current_dir(&self) -> SetupResult<PathBuf> {
        std::env::current_dir().map_err(|e| map_io_error(Path::new("."), e, "read cwd"))
    }

    fn write_file(&self, path: &Path, contents: &str, mode: u32) -> SetupResult<()> {
        fs::write(path, contents).map_err(|e| map_io_error(path, e, "write file"))?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(path, fs::Permissions::from_mode(mode))
                .map_err(|e| map_io_error(path, e, "set permissions"))?;
        }
        #[cfg(windows)]
        {
            // Windows has no mode bits to apply
            let _ = mode;
        }
        Ok(())
    }

    fn read_file(&self, path: &Path) -> SetupResult<String> {
        fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> stacksmith_core::error::SetupError {
    use stacksmith_core::application::ApplicationError;

    ApplicationError::Filesystem {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use stacksmith_core::application::ports::FILE_MODE;
    use tempfile::TempDir;

    #[test]
    fn mkdir_creates_a_fresh_directory() {
        let temp = TempDir::new().unwrap();
        let ws = LocalWorkspace::new();
        let dir = temp.path().join("frontend");

        ws.mkdir(&dir).unwrap();
        assert!(dir.is_dir());
    }

    #[test]
    fn mkdir_fails_when_the_directory_exists() {
        let temp = TempDir::new().unwrap();
        let ws = LocalWorkspace::new();
        assert!(ws.mkdir(temp.path()).is_err());
    }

    #[test]
    fn mkdir_fails_without_a_parent() {
        let temp = TempDir::new().unwrap();
        let ws = LocalWorkspace::new();
        assert!(ws.mkdir(&temp.path().join("a/b/c")).is_err());
    }

    #[test]
    fn write_then_read_round_trips() {
        let temp = TempDir::new().unwrap();
        let ws = LocalWorkspace::new();
        let file = temp.path().join("README.md");

        ws.write_file(&file, "# demo", FILE_MODE).unwrap();
        assert_eq!(ws.read_file(&file).unwrap(), "# demo");
        assert!(ws.exists(&file));
    }

    #[test]
    fn write_fails_when_the_containing_directory_is_missing() {
        let temp = TempDir::new().unwrap();
        let ws = LocalWorkspace::new();
        let file = temp.path().join("missing/README.md");
        assert!(ws.write_file(&file, "x", FILE_MODE).is_err());
    }

    #[test]
    #[cfg(unix)]
    fn written_files_carry_the_requested_mode() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let ws = LocalWorkspace::new();
        let file = temp.path().join("env");

        ws.write_file(&file, "PORT=3000", 0o644).unwrap();
        let mode = std::fs::metadata(&file).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o644);
    }

}
