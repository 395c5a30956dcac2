use std::path::PathBuf;
use std::sync::Arc;

use crate::config::SinkConfig;
use crate::log_sink::LogSink;

/// Shared state handed to every request handler
#[derive(Clone)]
pub struct AppState {
    pub sink: Arc<LogSink>,
    /// `None` disables static file serving
    pub static_root: Option<PathBuf>,
    pub max_body_bytes: usize,
}

impl AppState {
    pub fn new(sink: Arc<LogSink>, static_root: Option<PathBuf>, max_body_bytes: usize) -> Self {
        Self {
            sink,
            static_root,
            max_body_bytes,
        }
    }

    /// State for a config, echoing committed lines to stdout
    pub fn from_config(config: &SinkConfig) -> Self {
        let sink = Arc::new(LogSink::new(config.log_file_path.clone()));
        let static_root = config.serve_static.then(|| config.static_root.clone());
        Self::new(sink, static_root, config.max_body_bytes)
    }
}
