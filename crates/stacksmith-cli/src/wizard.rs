//! Wires the real adapters into the core pipeline and renders the result.
//!
//! Responsibility: adapter construction, service invocation, and the
//! closing summary. No wizard logic lives here.

use tracing::{info, instrument};

use stacksmith_adapters::{LocalWorkspace, ShellRunner, StdinPrompt};
use stacksmith_core::application::{SetupService, SetupSummary};

use crate::{
    cli::global::GlobalArgs,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Run the interactive wizard end to end.
#[instrument(skip_all)]
pub fn execute(_global: GlobalArgs, _config: AppConfig, output: OutputManager) -> CliResult<()> {
    output.header("Stacksmith")?;

    let service = SetupService::new(
        Box::new(StdinPrompt::new()),
        Box::new(ShellRunner::new()),
        Box::new(LocalWorkspace::new()),
        Box::new(output.clone()),
    );

    let summary = service.run()?;
    info!(
        project = %summary.session.name(),
        failures = summary.failures(),
        "wizard finished"
    );

    show_summary(&summary, &output)?;
    Ok(())
}

/// Render the per-step outcome table.
fn show_summary(summary: &SetupSummary, out: &OutputManager) -> CliResult<()> {
    if out.is_quiet() {
        return Ok(());
    }

    out.print("")?;
    out.header("Summary")?;
    out.print(&format!("  Project:  {}", summary.session.name()))?;
    out.print(&format!(
        "  Location: {}",
        summary.session.root().display()
    ))?;
    for report in &summary.reports {
        out.print(&format!("  {:<10} {}", report.step.label(), report.outcome))?;
    }

    if summary.failures() > 0 {
        out.warning(&format!(
            "{} step(s) failed; see the messages above to finish by hand.",
            summary.failures()
        ))?;
    }

    out.print("")?;
    out.print("Next steps:")?;
    out.print(&format!("  cd {}", summary.session.name()))?;
    out.print("  # Start building!")?;

    Ok(())
}
