use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::SinkConfig;
use crate::config_loader::load_config;

/// Top-level CLI interface for the debug log sink
#[derive(Parser, Debug)]
#[command(
    name = "debuglog-sink",
    version,
    about = "HTTP sink that appends browser log messages to a local file"
)]
pub struct Cli {
    /// TOML config file (defaults to ./debuglog.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve the logging endpoint (default)
    Serve(ServeArgs),

    /// Print the resolved configuration as TOML
    ShowConfig(ServeArgs),
}

#[derive(clap::Args, Debug, Default, Clone)]
pub struct ServeArgs {
    /// Host/IP to bind
    #[arg(long)]
    pub host: Option<String>,
    /// Port to bind
    #[arg(long)]
    pub port: Option<u16>,
    /// File records are appended to
    #[arg(long)]
    pub log_file: Option<PathBuf>,
    /// Directory served for GET requests
    #[arg(long)]
    pub static_root: Option<PathBuf>,
    /// Disable static file serving
    #[arg(long)]
    pub no_static: bool,
}

impl ServeArgs {
    /// Command-line flags win over file and environment settings
    pub fn apply(&self, mut config: SinkConfig) -> SinkConfig {
        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(path) = &self.log_file {
            config.log_file_path = path.clone();
        }
        if let Some(root) = &self.static_root {
            config.static_root = root.clone();
        }
        if self.no_static {
            config.serve_static = false;
        }
        config
    }
}

pub fn resolve_config(cli_config: Option<&PathBuf>, args: &ServeArgs) -> anyhow::Result<SinkConfig> {
    let base = load_config(cli_config.map(PathBuf::as_path))?;
    let config = args.apply(base);
    config.validate()?;
    Ok(config)
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command.unwrap_or_else(|| Commands::Serve(ServeArgs::default())) {
        Commands::Serve(args) => {
            let config = resolve_config(cli.config.as_ref(), &args)?;

            let rt = tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()?;

            rt.block_on(crate::server::serve(config))
        }
        Commands::ShowConfig(args) => {
            let config = resolve_config(cli.config.as_ref(), &args)?;
            print!("{}", toml::to_string_pretty(&config)?);
            Ok(())
        }
    }
}
