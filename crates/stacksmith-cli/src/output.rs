//! Output management and formatting.
//!
//! [`OutputManager`] is both the CLI's formatter and the implementation of
//! the core `Reporter` port: the pipeline's step messages flow through the
//! same quiet/colour logic as everything else. Warnings and errors write
//! to stderr so they survive stdout redirection and quiet mode.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;

use stacksmith_core::application::ports::Reporter;

use crate::cli::global::GlobalArgs;
use crate::config::AppConfig;

/// Manages CLI output based on configuration.
#[derive(Clone)]
pub struct OutputManager {
    quiet: bool,
    no_color: bool,
    out: Term,
    err: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        // Colour off when requested, or when stdout is piped/redirected.
        let no_color =
            args.no_color || config.output.no_color || !io::stdout().is_terminal();

        Self {
            quiet: args.quiet,
            no_color,
            out: Term::stdout(),
            err: Term::stderr(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.out.write_line(msg)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}") // ✓
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.out.write_line(&line)
    }

    /// Error indicator: `✗ <msg>` on stderr.  *Not* suppressed in quiet
    /// mode — errors must always be visible.
    pub fn error(&self, msg: &str) -> io::Result<()> {
        let line = if self.no_color {
            format!("\u{2717} {msg}") // ✗
        } else {
            format!("{} {}", "\u{2717}".red().bold(), msg.red())
        };
        self.err.write_line(&line)
    }

    /// Warning indicator: `⚠ <msg>` on stderr.  Skip messages from the
    /// pipeline arrive here, so this is not suppressed either.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        let line = if self.no_color {
            format!("\u{26a0} {msg}") // ⚠
        } else {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        };
        self.err.write_line(&line)
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2139} {msg}") // ℹ
        } else {
            format!("{} {}", "\u{2139}".blue().bold(), msg.blue())
        };
        self.out.write_line(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.out.write_line(&line)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// `true` if ANSI colours are enabled.
    pub fn supports_color(&self) -> bool {
        !self.no_color
    }

    /// `true` if quiet mode suppresses most output.
    pub fn is_quiet(&self) -> bool {
        self.quiet
    }
}

// ── Reporter port ─────────────────────────────────────────────────────────────

/// Terminal writes have no recovery path mid-wizard; failures are dropped
/// rather than surfaced through the pipeline.
impl Reporter for OutputManager {
    fn info(&self, message: &str) {
        let _ = self.print(message);
    }

    fn success(&self, message: &str) {
        let _ = OutputManager::success(self, message);
    }

    fn warning(&self, message: &str) {
        let _ = OutputManager::warning(self, message);
    }

    fn error(&self, message: &str) {
        let _ = OutputManager::error(self, message);
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn make_manager(quiet: bool, no_color: bool) -> OutputManager {
        let args = GlobalArgs {
            verbose: 0,
            quiet,
            no_color,
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    #[test]
    fn quiet_suppresses_print() {
        let out = make_manager(true, true);
        // write_line on Term::stdout() in tests is harmless; we just verify
        // the method returns Ok without panicking.
        assert!(out.print("hello").is_ok());
    }

    #[test]
    fn error_not_suppressed_in_quiet_mode() {
        // error() must always write — calling it in quiet mode should not
        // silently drop the message.
        let out = make_manager(true, true);
        assert!(out.error("something went wrong").is_ok());
    }

    #[test]
    fn no_color_flag_reported() {
        let no_color = make_manager(false, true);
        assert!(!no_color.supports_color());
    }

    #[test]
    fn quiet_accessor_reflects_flag() {
        assert!(make_manager(true, false).is_quiet());
        assert!(!make_manager(false, false).is_quiet());
    }

    #[test]
    fn reporter_port_is_exercisable() {
        let out = make_manager(true, true);
        // Through the port: info/success are quiet-suppressed, warning and
        // error still write to stderr. None of these may panic.
        Reporter::info(&out, "i");
        Reporter::success(&out, "s");
        Reporter::warning(&out, "w");
        Reporter::error(&out, "e");
    }
}
