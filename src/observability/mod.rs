//! Observability subsystem for chainsel
//!
//! # Principles
//!
//! 1. Observability is read-only and has no effect on engine results
//! 2. Logs are synchronous, unbuffered, one JSON object per line
//! 3. Field ordering is deterministic
//! 4. No async, no background threads
//!
//! The engine core (selection, algebra, recombine, cursor) is pure and logs
//! nothing; the snapshot layer emits lifecycle events through this module.

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

/// Log a lifecycle event
pub fn log_event(event: Event) {
    log_event_with_fields(event, &[]);
}

/// Log a lifecycle event with fields.
///
/// Fatal events go to stderr, everything else to stdout.
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    if event.is_fatal() {
        Logger::log_stderr(Severity::Fatal, event.as_str(), fields);
    } else {
        Logger::log(Severity::Info, event.as_str(), fields);
    }
}
