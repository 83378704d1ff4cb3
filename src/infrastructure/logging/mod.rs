//! Logging infrastructure
//!
//! Structured logging using tracing and tracing-subscriber:
//! - JSON or pretty formatting, always on stderr
//! - `RUST_LOG` overrides the configured level
//! - Secret redaction for values that end up in log fields

pub mod logger;
pub mod redact;

pub use logger::LoggerImpl;
pub use redact::redact;
