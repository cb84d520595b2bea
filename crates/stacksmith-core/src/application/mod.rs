//! Application layer - pipeline orchestration.
//!
//! The domain stays pure; everything that talks to the outside world goes
//! through the ports defined in [`ports`]. [`SetupService`] is the single
//! driving service: it runs the wizard's fixed step sequence against
//! whatever adapters were injected.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use services::{SetupService, SetupSummary, StepReport};
