//! Stacksmith Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Stacksmith
//! interactive scaffolding wizard, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │        stacksmith-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Service             │
//! │            (SetupService)               │
//! │      Drives the wizard pipeline         │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Prompt, CommandRunner, Workspace,      │
//! │  Reporter)                              │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   stacksmith-adapters (Infrastructure)  │
//! │ (StdinPrompt, ShellRunner,              │
//! │  LocalWorkspace, MemoryWorkspace, etc)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Domain Layer (Pure Logic)         │
//! │ (Session, StepOutcome, templates,       │
//! │  validation, manifest editing)          │
//! │       No External Dependencies          │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```text
//! use stacksmith_core::application::SetupService;
//!
//! // Wire adapters (prompt, runner, workspace, reporter) into the service
//! let service = SetupService::new(prompt, runner, workspace, reporter);
//!
//! // Run the interactive pipeline; the summary lists every step outcome
//! let summary = service.run()?;
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        SetupService, SetupSummary, StepReport,
        ports::{CommandRunner, FILE_MODE, Prompt, Reporter, Workspace},
    };
    pub use crate::domain::{Layout, ProjectName, Session, Step, StepOutcome};
    pub use crate::error::{SetupError, SetupResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
