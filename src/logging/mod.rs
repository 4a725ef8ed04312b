//! Structured JSON logging for pipeline diagnostics.

mod format;

pub use format::{LogEvent, StructuredLogger};
