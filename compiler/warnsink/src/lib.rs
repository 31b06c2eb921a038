//! Warning-level diagnostic reporting.
//!
//! A single narrow entry point, [`report`], takes a message and an optional
//! [`Detail`] and hands both to a [`DiagnosticSink`]. When the detail is
//! omitted, [`DEFAULT_DETAIL`] is recorded in its place so consumers never
//! see a missing second field.
//!
//! Reporting is a terminal step: it returns nothing and never fails. Sink
//! I/O errors are swallowed.
//!
//! # Sinks
//!
//! - [`TracingSink`]: `tracing::warn!` events (the default)
//! - [`TerminalSink`]: human-readable lines with optional ANSI color
//! - [`JsonSink`]: one JSON object per line
//! - [`MemorySink`]: in-memory capture
//! - [`Fanout`]: forwards to several sinks
//!
//! ```text
//! warnsink::report("Validation failed", None);
//! warnsink::report_error("Network timeout", err);
//!
//! // Swap the destination without touching call sites
//! warnsink::install(Reporter::new(JsonSink::stderr()))?;
//! ```

mod detail;
mod global;
mod reporter;
pub mod sink;
mod tracing_init;

pub use detail::{Detail, SharedError, DEFAULT_DETAIL};
pub use global::{global, install, report, report_error, InstallError};
pub use reporter::{OutputFormat, Reporter, ReporterConfig};
pub use sink::{
    ColorMode, DiagnosticSink, Fanout, JsonSink, MemorySink, Record, TerminalSink, TracingSink,
};
pub use tracing_init::init_tracing;
