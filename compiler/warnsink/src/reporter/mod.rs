//! The reporter: one narrow entry point in front of a swappable sink.

use std::error::Error;
use std::fmt;
use std::sync::Arc;

use crate::sink::{ColorMode, DiagnosticSink, JsonSink, TerminalSink, TracingSink};
use crate::Detail;

/// Where a configured reporter writes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    /// `tracing` warn events.
    #[default]
    Tracing,
    /// Human-readable lines on stderr.
    Terminal,
    /// JSON lines on stderr.
    Json,
}

/// Configuration for building a [`Reporter`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ReporterConfig {
    /// Output destination and format.
    pub format: OutputFormat,
    /// Color handling for `OutputFormat::Terminal`; ignored otherwise.
    pub color: ColorMode,
}

impl ReporterConfig {
    /// Human-readable stderr output with the given color mode.
    pub fn terminal(color: ColorMode) -> Self {
        ReporterConfig {
            format: OutputFormat::Terminal,
            color,
        }
    }

    /// JSON lines on stderr.
    pub fn json() -> Self {
        ReporterConfig {
            format: OutputFormat::Json,
            color: ColorMode::Never,
        }
    }
}

/// Reports warning-level diagnostics to a sink.
///
/// Cloning is cheap; clones share the sink.
///
/// # Example
///
/// ```text
/// let reporter = Reporter::new(TerminalSink::stderr(ColorMode::Auto, is_tty));
/// reporter.report("Validation failed", None);
/// reporter.report_error("Network timeout", err);
/// ```
#[derive(Clone)]
pub struct Reporter {
    sink: Arc<dyn DiagnosticSink>,
}

impl Default for Reporter {
    fn default() -> Self {
        Reporter::new(TracingSink)
    }
}

impl fmt::Debug for Reporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reporter").finish_non_exhaustive()
    }
}

impl Reporter {
    /// Create a reporter that owns `sink`.
    pub fn new(sink: impl DiagnosticSink + 'static) -> Self {
        Reporter {
            sink: Arc::new(sink),
        }
    }

    /// Create a reporter over a sink shared with other owners.
    pub fn from_shared(sink: Arc<dyn DiagnosticSink>) -> Self {
        Reporter { sink }
    }

    /// Build the sink described by `config`.
    ///
    /// `is_tty` is whether stderr is a terminal; it only matters for
    /// `ColorMode::Auto` with terminal output.
    pub fn from_config(config: ReporterConfig, is_tty: bool) -> Self {
        match config.format {
            OutputFormat::Tracing => Reporter::new(TracingSink),
            OutputFormat::Terminal => Reporter::new(TerminalSink::stderr(config.color, is_tty)),
            OutputFormat::Json => Reporter::new(JsonSink::stderr()),
        }
    }

    /// Report `message` with an optional detail.
    ///
    /// An omitted detail is recorded as [`DEFAULT_DETAIL`](crate::DEFAULT_DETAIL).
    /// Explicit details, empty text and `Detail::Null` included, are recorded
    /// unmodified.
    pub fn report(&self, message: &str, detail: Option<Detail>) {
        let detail = detail.unwrap_or_default();
        self.sink.record(message, &detail);
    }

    /// Report `message` with `err` as the detail.
    ///
    /// The sink receives the error value itself, not a rendering of it.
    pub fn report_error<E: Error + Send + Sync + 'static>(&self, message: &str, err: E) {
        self.sink.record(message, &Detail::from_error(err));
    }

    /// Flush the underlying sink.
    pub fn flush(&self) {
        self.sink.flush();
    }
}
