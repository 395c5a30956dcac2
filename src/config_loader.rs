use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use std::path::Path;

use crate::config::SinkConfig;

pub const DEFAULT_CONFIG_FILE: &str = "debuglog.toml";
pub const ENV_PREFIX: &str = "DEBUGLOG_";

/// Layer defaults, the TOML file and `DEBUGLOG_*` variables, in that order.
pub fn figment(path: Option<&Path>) -> Figment {
    let toml = match path {
        Some(p) => Toml::file(p),
        None => Toml::file(DEFAULT_CONFIG_FILE),
    };

    Figment::from(Serialized::defaults(SinkConfig::default()))
        .merge(toml)
        .merge(Env::prefixed(ENV_PREFIX))
}

pub fn load_config(path: Option<&Path>) -> Result<SinkConfig, figment::Error> {
    let config: SinkConfig = figment(path).extract()?;

    config
        .validate()
        .map_err(|e| figment::Error::from(e.to_string()))?;

    Ok(config)
}
