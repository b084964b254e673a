//! CLI runner shared by the `gztree` binary and the integration tests.

use crate::cli;
use crate::error::UnpackError;
use crate::progress::ProgressReporter;
use crate::tree;

/// Public entry for running the CLI logic.
pub fn run_cli_app() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::run()?;
    let config = args.config()?;

    let mut reporter = ProgressReporter::stdout(!args.quiet);
    tree::run_with_progress(&config, |event| {
        reporter.report(event).map_err(|source| UnpackError::Io {
            source,
            path: event.output.clone(),
        })
    })?;

    Ok(())
}

/// Installs the stderr log subscriber. `RUST_LOG` overrides the default `warn` level.
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
