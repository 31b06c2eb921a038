//! Forwarding to several sinks at once.

use std::fmt;
use std::sync::Arc;

use crate::Detail;

use super::DiagnosticSink;

/// Sends every record to each of its sinks, in the order they were added.
///
/// Lets a remote error-tracking sink be added next to the console one
/// without changing any call site.
#[derive(Clone, Default)]
pub struct Fanout {
    sinks: Vec<Arc<dyn DiagnosticSink>>,
}

impl Fanout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sink.
    #[must_use]
    pub fn with(mut self, sink: impl DiagnosticSink + 'static) -> Self {
        self.sinks.push(Arc::new(sink));
        self
    }

    /// Add a sink that is shared with other owners.
    #[must_use]
    pub fn with_shared(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sinks.push(sink);
        self
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}

impl fmt::Debug for Fanout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fanout")
            .field("sinks", &self.sinks.len())
            .finish()
    }
}

impl DiagnosticSink for Fanout {
    fn record(&self, message: &str, detail: &Detail) {
        for sink in &self.sinks {
            sink.record(message, detail);
        }
    }

    fn flush(&self) {
        for sink in &self.sinks {
            sink.flush();
        }
    }
}
