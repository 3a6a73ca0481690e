mod analysis;
mod application;
mod cli;
mod data;
mod domain;

use std::process::ExitCode;

fn main() -> ExitCode {
    // Diagnostics go to stderr: stdout is reserved for the single
    // report line and must never carry log output
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("seqdelta=warn".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();

    cli::run()
}
