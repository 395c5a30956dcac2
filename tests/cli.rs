use clap::Parser;
use debuglog_sink::cli::{Cli, Commands, ServeArgs};
use debuglog_sink::SinkConfig;
use std::path::PathBuf;

#[test]
fn serve_flags_override_config() {
    let cli = Cli::try_parse_from([
        "debuglog-sink",
        "serve",
        "--port",
        "9001",
        "--log-file",
        "/tmp/browser.log",
        "--no-static",
    ])
    .unwrap();

    let Some(Commands::Serve(args)) = cli.command else {
        panic!("expected serve subcommand");
    };
    let cfg = args.apply(SinkConfig::default());
    assert_eq!(cfg.port, 9001);
    assert_eq!(cfg.log_file_path, PathBuf::from("/tmp/browser.log"));
    assert!(!cfg.serve_static);
    assert_eq!(cfg.host, "0.0.0.0");
}

#[test]
fn no_subcommand_means_serve_with_defaults() {
    let cli = Cli::try_parse_from(["debuglog-sink"]).unwrap();
    assert!(cli.command.is_none());
    assert_eq!(ServeArgs::default().apply(SinkConfig::default()), SinkConfig::default());
}

#[test]
fn global_config_flag_is_accepted_after_subcommand() {
    let cli = Cli::try_parse_from(["debuglog-sink", "show-config", "--config", "alt.toml"]).unwrap();
    assert_eq!(cli.config, Some(PathBuf::from("alt.toml")));
    assert!(matches!(cli.command, Some(Commands::ShowConfig(_))));
}
