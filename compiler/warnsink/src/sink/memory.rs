//! In-memory sink that keeps every record in arrival order.

use parking_lot::Mutex;

use crate::Detail;

use super::DiagnosticSink;

/// A recorded `(message, detail)` pair.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Record {
    pub message: String,
    pub detail: Detail,
}

impl Record {
    pub fn new(message: impl Into<String>, detail: Detail) -> Self {
        Record {
            message: message.into(),
            detail,
        }
    }
}

/// Collects records instead of writing them anywhere.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<Record>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far.
    pub fn records(&self) -> Vec<Record> {
        self.records.lock().clone()
    }

    /// Drain the recorded diagnostics, leaving the sink empty.
    pub fn take(&self) -> Vec<Record> {
        std::mem::take(&mut *self.records.lock())
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }
}

impl DiagnosticSink for MemorySink {
    fn record(&self, message: &str, detail: &Detail) {
        self.records.lock().push(Record::new(message, detail.clone()));
    }
}
