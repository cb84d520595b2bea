//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! A declarative config file for the scaffold itself is deliberately out
//! of scope — all wizard input is interactive.  What remains here are the
//! output defaults, resolved from built-in values plus the environment:
//!
//! | Variable               | Effect                         |
//! |------------------------|--------------------------------|
//! | `STACKSMITH_NO_COLOR`  | boolean; disable ANSI colours  |
//! | `NO_COLOR`             | handled at the clap layer      |

use serde::{Deserialize, Serialize};

use crate::error::{CliError, CliResult};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output: OutputConfig { no_color: false },
        }
    }
}

impl AppConfig {
    /// Load configuration: built-in defaults merged with the environment.
    pub fn load() -> CliResult<Self> {
        let mut config = Self::default();

        if let Some(raw) = std::env::var_os("STACKSMITH_NO_COLOR") {
            let raw = raw.to_string_lossy();
            config.output.no_color =
                parse_bool(&raw).ok_or_else(|| CliError::ConfigError {
                    message: format!("STACKSMITH_NO_COLOR must be a boolean, got '{raw}'"),
                    source: None,
                })?;
        }

        Ok(config)
    }
}

/// Lenient boolean parsing for environment variables.
fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
