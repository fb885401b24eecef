//! # rawline Main Entry Point
//!
//! Reads a JSON request descriptor and prints the raw request text.

use anyhow::{Context, Result};
use rawline::cmd_args::CommandLineArgs;
use rawline::{config, source};
use tracing_subscriber::{fmt::time::ChronoLocal, EnvFilter};

#[tracing::instrument]
fn main() -> Result<()> {
    let cmd_args = CommandLineArgs::parse();
    init_tracing_subscriber(cmd_args.verbose());

    tracing::debug!(
        "Loading request descriptor from '{}'",
        cmd_args.input()
    );
    let descriptor = source::load_descriptor(cmd_args.input())?;

    let raw = rawline::build(&descriptor).context("Failed to build raw request")?;

    source::write_raw_request(cmd_args.output(), &raw)
}

fn init_tracing_subscriber(verbose: bool) {
    let level = if verbose {
        config::VERBOSE_LOG_LEVEL.to_string()
    } else {
        config::get_log_level()
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level))
        .with_writer(std::io::stderr)
        .with_timer(ChronoLocal::rfc_3339())
        .init();
}
