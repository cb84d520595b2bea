//! Infrastructure adapters for Stacksmith.
//!
//! This crate implements the ports defined in
//! `stacksmith-core::application::ports`. It contains all external
//! dependencies and I/O operations: the terminal, subprocesses, and the
//! filesystem. The `scripted` module holds the in-memory doubles the
//! integration tests drive the pipeline with.

pub mod runner;
pub mod scripted;
pub mod terminal;
pub mod workspace;

// Re-export commonly used adapters
pub use runner::ShellRunner;
pub use scripted::{RecordingReporter, RecordingRunner, ScriptedPrompt};
pub use terminal::StdinPrompt;
pub use workspace::{LocalWorkspace, MemoryWorkspace};
