//! Structured logging and the log sanitization pipeline
//!
//! [`structured`] wires up the tracing subscriber (console + optional JSON
//! file); [`record`] defines the [`LogRecord`] shape and the
//! [`LogSanitizer`] that every record passes through before the transport.

pub mod record;
pub mod structured;

pub use record::{LogLevel, LogRecord, LogSanitizer};
pub use structured::{init_logging, parse_log_level, LoggingGuard};
