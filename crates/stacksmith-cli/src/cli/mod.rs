//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names and
//! help text. The wizard itself takes no flags and no positionals - all
//! scaffolding input is interactive - so the surface is just the global
//! observability flags plus clap's automatic `--help` / `--version`.

use clap::Parser;

pub mod global;
pub use global::GlobalArgs;

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "stacksmith",
    bin_name = "stacksmith",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{2692} Interactive full-stack project scaffolding",
    long_about = "Stacksmith walks you through a short series of prompts \
                  and produces a ready-to-hack full-stack project skeleton: \
                  git repository, Vite frontend, Express+TypeScript backend, \
                  PostgreSQL container, Prisma ORM, and an optional remote.",
    after_help = "EXAMPLES:\n\
        \x20 stacksmith          # start the wizard\n\
        \x20 stacksmith -v       # with progress logging\n\
        \x20 stacksmith -q       # errors only",
)]
pub struct Cli {
    /// Flags available on every invocation.
    #[command(flatten)]
    pub global: GlobalArgs,
}

// ── tests ─────────────────────────────────────────────────────────────────────
