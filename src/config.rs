// config.rs
// Purpose: Explicit runtime configuration for the log sink server

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::errors::{SinkError, SinkResult};

pub const DEFAULT_PORT: u16 = 8001;
pub const DEFAULT_LOG_FILE: &str = "debug.log";
pub const DEFAULT_MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SinkConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_log_file")]
    pub log_file_path: PathBuf,
    /// Directory answered for GET requests outside `/log`
    #[serde(default = "default_static_root")]
    pub static_root: PathBuf,
    #[serde(default = "default_serve_static")]
    pub serve_static: bool,
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_log_file() -> PathBuf {
    PathBuf::from(DEFAULT_LOG_FILE)
}

fn default_static_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_serve_static() -> bool {
    true
}

fn default_max_body_bytes() -> usize {
    DEFAULT_MAX_BODY_BYTES
}

impl Default for SinkConfig {
    fn default() -> Self {
        SinkConfig {
            host: default_host(),
            port: default_port(),
            log_file_path: default_log_file(),
            static_root: default_static_root(),
            serve_static: default_serve_static(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

impl SinkConfig {
    /// Reject settings the server cannot start with
    pub fn validate(&self) -> SinkResult<()> {
        if self.log_file_path.as_os_str().is_empty() {
            return Err(SinkError::config("log_file_path cannot be empty"));
        }
        if self.port == 0 {
            return Err(SinkError::config("port must be non-zero"));
        }
        if self.host.trim().is_empty() {
            return Err(SinkError::config("host cannot be empty"));
        }
        if self.max_body_bytes == 0 {
            return Err(SinkError::config("max_body_bytes must be non-zero"));
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
