//! JSON Sink
//!
//! Machine-readable output, one JSON object per line. Error details also
//! carry the error's `Debug` form, so fields missing from its `Display`
//! still reach the log.
//!
//! ```text
//! {"severity":"warning","message":"Validation failed","detail":{"kind":"text","text":"No stack trace provided"}}
//! ```

use std::fmt::Write as _;
use std::io::{self, Write};

use parking_lot::Mutex;

use crate::Detail;

use super::{escape_json, DiagnosticSink};

/// JSON-lines sink for log shippers and tooling.
pub struct JsonSink<W: Write> {
    writer: Mutex<W>,
}

impl<W: Write> JsonSink<W> {
    /// Create a new JSON sink.
    pub fn new(writer: W) -> Self {
        JsonSink {
            writer: Mutex::new(writer),
        }
    }

    /// Consume the sink and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl JsonSink<io::Stderr> {
    /// Create a JSON sink for stderr.
    pub fn stderr() -> Self {
        JsonSink::new(io::stderr())
    }
}

/// Render one record as a single line, newline included.
fn render(message: &str, detail: &Detail) -> String {
    let mut out = String::with_capacity(message.len() + 64);
    let _ = write!(
        out,
        "{{\"severity\":\"warning\",\"message\":\"{}\",\"detail\":{{\"kind\":\"{}\"",
        escape_json(message),
        detail.kind()
    );

    match detail {
        Detail::Text(text) => {
            let _ = write!(out, ",\"text\":\"{}\"", escape_json(text));
        }
        Detail::Error(err) => {
            let _ = write!(
                out,
                ",\"message\":\"{}\",\"causes\":[",
                escape_json(&err.to_string())
            );
            for (i, cause) in detail.causes().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                let _ = write!(out, "\"{}\"", escape_json(&cause.to_string()));
            }
            let _ = write!(out, "],\"debug\":\"{}\"", escape_json(&format!("{err:?}")));
        }
        Detail::Null => {}
    }

    out.push_str("}}\n");
    out
}

impl<W: Write + Send> DiagnosticSink for JsonSink<W> {
    fn record(&self, message: &str, detail: &Detail) {
        let line = render(message, detail);
        let mut writer = self.writer.lock();
        let _ = writer.write_all(line.as_bytes());
    }

    fn flush(&self) {
        let _ = self.writer.lock().flush();
    }
}
