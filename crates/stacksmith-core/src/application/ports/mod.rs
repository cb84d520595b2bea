//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the pipeline needs from external systems.
//! The `stacksmith-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use crate::error::SetupResult;

/// Mode for every file the wizard writes.
pub const FILE_MODE: u32 = 0o644;

/// Mode for every directory the wizard creates.
pub const DIR_MODE: u32 = 0o755;

// ── Prompt ────────────────────────────────────────────────────────────────────

/// Port for interactive terminal input.
///
/// Implemented by:
/// - `stacksmith_adapters::terminal::StdinPrompt` (production)
/// - `stacksmith_adapters::scripted::ScriptedPrompt` (testing)
///
/// Adapters supply only [`ask_line`](Prompt::ask_line) (print the prompt,
/// read one trimmed line) and [`notify`](Prompt::notify) (print a retry or
/// menu line). The higher-level primitives are provided methods so their
/// re-prompt semantics live in one place and are testable against a
/// scripted `ask_line`.
pub trait Prompt: Send + Sync {
    /// Print `prompt`, read one line from the input, and return it with
    /// surrounding whitespace stripped.
    fn ask_line(&self, prompt: &str) -> SetupResult<String>;

    /// Print an informational line (retry messages, menu entries).
    fn notify(&self, message: &str);

    /// Ask until the answer is non-empty.
    fn ask_non_empty(&self, prompt: &str) -> SetupResult<String> {
        loop {
            let answer = self.ask_line(prompt)?;
            if answer.is_empty() {
                self.notify("Input cannot be empty. Please try again.");
                continue;
            }
            return Ok(answer);
        }
    }

    /// Ask a yes/no question. Empty input means yes (default-accept);
    /// anything other than y/yes/n/no re-prompts.
    fn ask_yes_no(&self, prompt: &str) -> SetupResult<bool> {
        let prompt = format!("{prompt} (y/n): ");
        loop {
            let answer = self.ask_line(&prompt)?.to_lowercase();
            match answer.as_str() {
                "" | "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => self.notify("Invalid input"),
            }
        }
    }

    /// Present a 1-based numbered menu and ask until the answer is an
    /// in-range integer. There is no default choice.
    fn ask_choice(&self, prompt: &str, options: &[&str]) -> SetupResult<usize> {
        loop {
            self.notify(prompt);
            for (index, option) in options.iter().enumerate() {
                self.notify(&format!("  {}) {option}", index + 1));
            }
            let answer = self.ask_line("Enter a number: ")?;
            match answer.parse::<usize>() {
                Ok(choice) if (1..=options.len()).contains(&choice) => return Ok(choice),
                _ => self.notify("Please enter one of the listed numbers."),
            }
        }
    }
}

// ── Command runner ────────────────────────────────────────────────────────────

/// Port for invoking external programs.
///
/// Implemented by:
/// - `stacksmith_adapters::runner::ShellRunner` (production)
/// - `stacksmith_adapters::scripted::RecordingRunner` (testing)
///
/// The child inherits the parent's stdin/stdout/stderr so interactive
/// tools keep working; output is never captured or parsed. Non-zero exit,
/// a missing executable, and spawn I/O errors all fold into
/// `ApplicationError::CommandFailed`.
pub trait CommandRunner: Send + Sync {
    fn run(&self, program: &str, args: &[&str]) -> SetupResult<()>;
}

// ── Workspace ─────────────────────────────────────────────────────────────────

/// Port for filesystem access and the working-directory cursor.
///
/// Implemented by:
/// - `stacksmith_adapters::workspace::LocalWorkspace` (production)
/// - `stacksmith_adapters::workspace::MemoryWorkspace` (testing)
///
/// The cursor (current working directory) is mutated only through this
/// port; the pipeline owns the restore discipline.
#[cfg_attr(test, mockall::automock)]
pub trait Workspace: Send + Sync {
    /// Create a single directory with [`DIR_MODE`]. Fails if it exists.
    fn mkdir(&self, path: &Path) -> SetupResult<()>;

    /// Move the cursor.
    fn set_current_dir(&self, path: &Path) -> SetupResult<()>;

    /// Where the cursor currently points (absolute).
    fn current_dir(&self) -> SetupResult<PathBuf>;

    /// Create or truncate a file. Fails when the containing directory is
    /// missing.
    fn write_file(&self, path: &Path, contents: &str, mode: u32) -> SetupResult<()>;

    /// Read a file to a string.
    fn read_file(&self, path: &Path) -> SetupResult<String>;

    /// Check if path exists (relative to the cursor).
    fn exists(&self, path: &Path) -> bool;
}

// ── Reporter ──────────────────────────────────────────────────────────────────

/// Port for user-facing step messages.
///
/// Implemented by:
/// - `stacksmith_cli::output::OutputManager` (production)
/// - `stacksmith_adapters::scripted::RecordingReporter` (testing)
///
/// `warning` and `error` must reach the user even in quiet mode (the CLI
/// routes them to stderr); `info` and `success` may be suppressed.
#[cfg_attr(test, mockall::automock)]
pub trait Reporter: Send + Sync {
    fn info(&self, message: &str);
    fn success(&self, message: &str);
    fn warning(&self, message: &str);
    fn error(&self, message: &str);
}

// ── tests ─────────────────────────────────────────────────────────────────────
