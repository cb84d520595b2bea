//! Terminal prompt adapter reading from stdin.

use std::io::{self, Write};

use stacksmith_core::{
    application::{ApplicationError, ports::Prompt},
    error::SetupResult,
};

/// Production prompt implementation over the process's stdin/stdout.
///
/// The higher-level primitives (yes/no, menus, non-empty) are provided
/// methods on the `Prompt` port; this adapter only reads lines and prints
/// notices.
#[derive(Debug, Clone, Copy)]
pub struct StdinPrompt;

impl StdinPrompt {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdinPrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompt for StdinPrompt {
    fn ask_line(&self, prompt: &str) -> SetupResult<String> {
        if !prompt.is_empty() {
            print!("{prompt}");
            io::stdout().flush().map_err(|e| ApplicationError::Input {
                reason: format!("failed to flush stdout: {e}"),
            })?;
        }

        let mut input = String::new();
        let read = io::stdin()
            .read_line(&mut input)
            .map_err(|e| ApplicationError::Input {
                reason: e.to_string(),
            })?;

        // read_line returns Ok(0) on EOF; re-prompting would spin forever
        // on a closed stdin, so surface it as an input error instead.
        if read == 0 {
            return Err(ApplicationError::Input {
                reason: "unexpected end of input".into(),
            }
            .into());
        }

        Ok(input.trim().to_string())
    }

    fn notify(&self, message: &str) {
        println!("{message}");
    }
}
