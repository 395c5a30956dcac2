// log_sink.rs
// Purpose: Commit log records to the append-only file and the console without interleaving

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::errors::{SinkError, SinkResult};
use crate::log_record::{timestamp_now, LogRecord};

/// Console destination for committed lines.
pub type ConsoleWriter = Box<dyn Write + Send>;

/// LogSink owns the log file path and the console stream.
///
/// All commits go through one mutex that also guards the console writer, so
/// format, console echo and file append happen as a single unit. The file is
/// opened and closed inside every commit.
pub struct LogSink {
    path: PathBuf,
    console: Mutex<ConsoleWriter>,
}

impl LogSink {
    /// Sink echoing to standard output.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_console(path, Box::new(std::io::stdout()))
    }

    pub fn with_console(path: impl Into<PathBuf>, console: ConsoleWriter) -> Self {
        Self {
            path: path.into(),
            console: Mutex::new(console),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Format, echo and append one record.
    pub fn commit(&self, level: &str, message: &str) -> SinkResult<LogRecord> {
        self.commit_with(|timestamp| Ok(LogRecord::new(level, message, timestamp)))
    }

    /// Decode a request body and commit it. Nothing is written when decoding fails.
    pub fn commit_payload(&self, body: &[u8]) -> SinkResult<LogRecord> {
        self.commit_with(|timestamp| LogRecord::from_json(body, timestamp))
    }

    fn commit_with<F>(&self, build: F) -> SinkResult<LogRecord>
    where
        F: FnOnce(String) -> SinkResult<LogRecord>,
    {
        let mut console = self
            .console
            .lock()
            .map_err(|_| SinkError::mutex_poisoned("log sink"))?;

        // stamped under the lock: file order and timestamp order agree
        let record = build(timestamp_now())?;
        let line = record.formatted();

        writeln!(console, "{}", line.trim())
            .and_then(|_| console.flush())
            .map_err(|e| SinkError::write("console echo", e))?;

        self.append(&line)?;
        tracing::debug!(path = %self.path.display(), level = %record.level, "record committed");
        Ok(record)
    }

    fn append(&self, line: &str) -> SinkResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| SinkError::write(format!("open {}", self.path.display()), e))?;

        // one write_all per record; the handle is dropped on return
        file.write_all(line.as_bytes())
            .map_err(|e| SinkError::write(format!("append to {}", self.path.display()), e))
    }
}
