//! Structured JSON logger
//!
//! - One log line = one event
//! - Synchronous, no buffering
//! - Deterministic key ordering: `event` first, `severity` second, then
//!   caller fields alphabetically

use std::fmt;
use std::io::{self, Write};

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Debug-level detail
    Trace = 0,
    /// Normal operations
    Info = 1,
    /// Recoverable issues
    Warn = 2,
    /// Operation failures
    Error = 3,
    /// Unrecoverable conditions
    Fatal = 4,
}

impl Severity {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Trace => "TRACE",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Synchronous structured logger.
///
/// Every call renders one complete JSON object and writes it with a single
/// `write_all` followed by a flush. Logging failures are swallowed: a log
/// line must never fail an engine operation.
pub struct Logger;

impl Logger {
    /// Log an event to stdout
    pub fn log(severity: Severity, event: &str, fields: &[(&str, &str)]) {
        let line = Self::render(severity, event, fields);
        let mut out = io::stdout();
        let _ = out.write_all(line.as_bytes());
        let _ = out.flush();
    }

    /// Log an event to stderr
    pub fn log_stderr(severity: Severity, event: &str, fields: &[(&str, &str)]) {
        let line = Self::render(severity, event, fields);
        let mut err = io::stderr();
        let _ = err.write_all(line.as_bytes());
        let _ = err.flush();
    }

    /// Renders one newline-terminated JSON log line.
    fn render(severity: Severity, event: &str, fields: &[(&str, &str)]) -> String {
        let mut line = String::with_capacity(128);
        line.push('{');
        Self::push_pair(&mut line, "event", event);
        line.push(',');
        Self::push_pair(&mut line, "severity", severity.as_str());

        let mut ordered: Vec<&(&str, &str)> = fields.iter().collect();
        ordered.sort_by_key(|(key, _)| *key);
        for (key, value) in ordered {
            line.push(',');
            Self::push_pair(&mut line, key, value);
        }

        line.push('}');
        line.push('\n');
        line
    }

    fn push_pair(line: &mut String, key: &str, value: &str) {
        line.push('"');
        Self::push_escaped(line, key);
        line.push_str("\":\"");
        Self::push_escaped(line, value);
        line.push('"');
    }

    fn push_escaped(line: &mut String, raw: &str) {
        for c in raw.chars() {
            match c {
                '"' => line.push_str("\\\""),
                '\\' => line.push_str("\\\\"),
                '\n' => line.push_str("\\n"),
                '\r' => line.push_str("\\r"),
                '\t' => line.push_str("\\t"),
                c if c.is_control() => {
                    line.push_str(&format!("\\u{:04x}", c as u32));
                }
                c => line.push(c),
            }
        }
    }
}
