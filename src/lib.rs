//! Library root for the `debuglog-sink` crate
//! HTTP endpoint that timestamps submitted log messages and appends them to a file

// Core error handling
pub mod errors;
pub mod api_errors;

// Records and the append-only sink
pub mod log_record;
pub mod log_sink;

// Configuration & CLI
pub mod cli;
pub mod config;
pub mod config_loader;

// Web server interface
pub mod app_state;
pub mod dispatcher;
pub mod server;


pub use app_state::AppState;
pub use config::SinkConfig;
pub use dispatcher::build_router;
pub use errors::{SinkError, SinkResult};
pub use log_record::LogRecord;
pub use log_sink::LogSink;
