// debuglog-sink - main.rs
// Bootstrap: tracing to stderr, then hand off to the CLI

use clap::Parser;
use debuglog_sink::cli::{run, Cli};
use tracing_subscriber::EnvFilter;

fn main() {
    // stdout is reserved for committed log lines
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("❌ {e:#}");
        std::process::exit(1);
    }
}
