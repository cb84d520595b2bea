//! Application services.
//!
//! One driving service: the wizard pipeline.

pub mod setup_service;

pub use setup_service::{SetupService, SetupSummary, StepReport};
