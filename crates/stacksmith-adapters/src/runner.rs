//! Subprocess runner adapter.

use std::process::Command;

use tracing::debug;

use stacksmith_core::{
    application::{ApplicationError, ports::CommandRunner},
    error::SetupResult,
};

/// Production command runner using `std::process::Command`.
///
/// The child inherits the parent's stdin/stdout/stderr (the default for
/// `status()`), so interactive tools like `npm create` and `git commit`
/// editors keep working. Output is never captured.
#[derive(Debug, Clone, Copy)]
pub struct ShellRunner;

impl ShellRunner {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ShellRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for ShellRunner {
    fn run(&self, program: &str, args: &[&str]) -> SetupResult<()> {
        debug!(program, ?args, "spawning command");

        let status = Command::new(program)
            .args(args)
            .status()
            .map_err(|e| ApplicationError::CommandFailed {
                program: program.to_string(),
                reason: e.to_string(),
            })?;

        if !status.success() {
            let reason = match status.code() {
                Some(code) => format!("exited with status {code}"),
                None => "terminated by a signal".to_string(),
            };
            return Err(ApplicationError::CommandFailed {
                program: program.to_string(),
                reason,
            }
            .into());
        }

        debug!(program, "command succeeded");
        Ok(())
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use stacksmith_core::error::SetupError;

    #[test]
    fn missing_executable_folds_into_command_failed() {
        let runner = ShellRunner::new();
        let err = runner
            .run("stacksmith-definitely-not-a-real-binary", &[])
            .unwrap_err();
        match err {
            SetupError::Application(ApplicationError::CommandFailed { program, .. }) => {
                assert_eq!(program, "stacksmith-definitely-not-a-real-binary");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    #[cfg(unix)]
    fn non_zero_exit_is_an_error_with_the_status() {
        let runner = ShellRunner::new();
        let err = runner.run("false", &[]).unwrap_err();
        assert!(err.to_string().contains("exited with status 1"));
    }

    #[test]
    #[cfg(unix)]
    fn zero_exit_is_ok() {
        let runner = ShellRunner::new();
        assert!(runner.run("true", &[]).is_ok());
    }
}
