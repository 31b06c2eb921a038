//! Diagnostic Sinks
//!
//! Destinations for reported diagnostics:
//! - Tracing: `warn`-level events through the `tracing` facade
//! - Terminal: human-readable lines with optional ANSI color
//! - JSON: one object per line for log shippers
//! - Memory: captured records for inspection
//! - Fanout: several sinks at once
//!
//! Every sink implements [`DiagnosticSink`]. A sink is shared across
//! threads, so `record` takes `&self` and writer-backed sinks serialize
//! their writes internally.

mod fanout;
mod json;
mod memory;
mod terminal;
mod trace;

pub use fanout::Fanout;
pub use json::JsonSink;
pub use memory::{MemorySink, Record};
pub use terminal::{ColorMode, TerminalSink};
pub use trace::TracingSink;

use std::fmt::Write;
use std::sync::Arc;

use crate::Detail;

/// Capability for recording a warning-level diagnostic.
///
/// Implementations must not fail or panic: reporting is a terminal step, so
/// I/O errors are dropped. A single `record` call produces one complete
/// write that concurrent calls cannot interleave with.
pub trait DiagnosticSink: Send + Sync {
    /// Record a message and its detail, in that order.
    fn record(&self, message: &str, detail: &Detail);

    /// Flush any buffered output.
    fn flush(&self) {}
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for Arc<S> {
    fn record(&self, message: &str, detail: &Detail) {
        (**self).record(message, detail);
    }

    fn flush(&self) {
        (**self).flush();
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for Box<S> {
    fn record(&self, message: &str, detail: &Detail) {
        (**self).record(message, detail);
    }

    fn flush(&self) {
        (**self).flush();
    }
}

/// Escape a string for JSON output.
pub(crate) fn escape_json(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '"' => result.push_str("\\\""),
            '\\' => result.push_str("\\\\"),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(result, "\\u{:04x}", c as u32);
            }
            c => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests;
