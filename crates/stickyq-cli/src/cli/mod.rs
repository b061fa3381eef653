//! # CLI Behavior
//!
//! One possible client for stickyq. Only this layer knows about stdin, stdout,
//! exit codes and log output.
//!
//! ## Module Structure
//!
//! - `setup`: Argument parsing via clap
//! - `commands`: Per-command handlers that call the library and print results

mod commands;
pub mod setup;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

pub fn run() -> Result<()> {
    let cli = setup::parse_cli();
    init_logging(cli.verbose);
    commands::dispatch(cli)
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
