// ============================================================
// Layer 1 — Presentation Layer
// ============================================================
// The entry point for the one thing the program does. There are
// no subcommands and no flags: the input path and the limits are
// process-wide constants (PipelineConfig::default), so this
// layer only runs the pipeline, prints the report line, and
// picks the exit code. All business logic lives in Layer 2.
//
// stdout discipline: the single report line is the ONLY thing
// this program ever writes to stdout. Diagnostics go to stderr
// through tracing, configured in main.
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

// Renders the report lines
pub mod report;

use std::process::ExitCode;

use crate::application::average_use_case::{AverageUseCase, PipelineConfig};

/// Run the pipeline once and report the outcome.
/// Success prints the value and exits 0; any failure prints the
/// fixed error line and exits 1. The two failure kinds look the
/// same on stdout — the distinction only reaches the stderr log.
pub fn run() -> ExitCode {
    let use_case = AverageUseCase::new(PipelineConfig::default());

    match use_case.execute() {
        Ok(average) => {
            println!("{}", report::success_line(average));
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!("Run failed: {}", err);
            println!("{}", report::error_line());
            ExitCode::FAILURE
        }
    }
}
