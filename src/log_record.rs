// log_record.rs
// Purpose: Build one log record from a submitted JSON body and render it as a file line

use chrono::Local;
use serde_json::Value;

use crate::errors::{SinkError, SinkResult};

/// Level used when the payload omits `level`
pub const DEFAULT_LEVEL: &str = "INFO";

/// Second-resolution local wall clock format used in every line
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Current local time as written into the log file.
pub fn timestamp_now() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// LogRecord is one `{level, message, timestamp}` tuple submitted for logging.
///
/// Level and message are kept verbatim. A message containing `\n` will span
/// several physical lines once written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub timestamp: String,
    pub level: String,
    pub message: String,
}

impl LogRecord {
    pub fn new(level: impl Into<String>, message: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            timestamp: timestamp.into(),
            level: level.into(),
            message: message.into(),
        }
    }

    /// Decode a request body into a record stamped with `timestamp`.
    ///
    /// The body must be UTF-8 JSON holding an object. Missing or `null`
    /// fields fall back to `INFO` and the empty string.
    pub fn from_json(body: &[u8], timestamp: impl Into<String>) -> SinkResult<Self> {
        let text = std::str::from_utf8(body)
            .map_err(|e| SinkError::parse(format!("body is not valid UTF-8: {e}")))?;
        let value: Value = serde_json::from_str(text)?;

        let Value::Object(fields) = value else {
            return Err(SinkError::parse("body must be a JSON object"));
        };

        let level = field_text(fields.get("level")).unwrap_or_else(|| DEFAULT_LEVEL.to_string());
        let message = field_text(fields.get("message")).unwrap_or_default();

        Ok(Self::new(level, message, timestamp))
    }

    /// `[<timestamp>] <LEVEL>: <message>\n`
    pub fn formatted(&self) -> String {
        format!("[{}] {}: {}\n", self.timestamp, self.level, self.message)
    }

    /// Recover a record from a line previously produced by `formatted`.
    ///
    /// Returns `None` for lines that do not carry the `[ts] LEVEL: ` prefix,
    /// e.g. continuation lines of a message with embedded newlines.
    /// The level ends at the first `": "`, so a level that itself contains
    /// `": "` comes back split between level and message.
    pub fn parse_line(line: &str) -> Option<Self> {
        let line = line.strip_suffix('\n').unwrap_or(line);
        let rest = line.strip_prefix('[')?;
        let (timestamp, rest) = rest.split_once("] ")?;
        chrono::NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT).ok()?;
        let (level, message) = rest.split_once(": ").or_else(|| {
            // empty message: the trailing space was trimmed away
            rest.strip_suffix(':').map(|level| (level, ""))
        })?;
        Some(Self::new(level, message, timestamp))
    }
}

fn field_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
