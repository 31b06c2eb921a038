//! Tracing Sink
//!
//! Emits each record as a `WARN` event through whatever `tracing` subscriber
//! the host installed. With no subscriber the record goes nowhere.
//! Error details add an `error` field holding the error's `Debug` form.

use crate::Detail;

use super::DiagnosticSink;

/// Target attached to every event, for filtering with `RUST_LOG`.
pub(crate) const TARGET: &str = "warnsink";

/// Sink backed by `tracing::warn!`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn record(&self, message: &str, detail: &Detail) {
        match detail {
            Detail::Error(err) => {
                tracing::warn!(target: TARGET, detail = %detail, error = ?err, "{message}");
            }
            _ => tracing::warn!(target: TARGET, detail = %detail, "{message}"),
        }
    }
}
