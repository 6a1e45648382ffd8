//! Entry point for the `configurator` binary.
#![forbid(unsafe_code)]

use std::process::ExitCode;

use configurator_cli::{CliError, run};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    init_tracing();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::ArgumentParsing(err)) if !err.use_stderr() => err.exit(),
        Err(err) => report(&err),
    }
}

/// Route `log` records to stderr, filtered by `RUST_LOG` (default `warn`).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[expect(
    clippy::print_stderr,
    reason = "the binary reports fatal errors to the terminal"
)]
fn report(err: &CliError) -> ExitCode {
    eprintln!("configurator: {err}");
    ExitCode::FAILURE
}
