//! Terminal Sink
//!
//! Human-readable warning output with optional ANSI color support.
//!
//! ```text
//! warning: Network timeout
//!   = detail: fetch failed
//!   = caused by: connection reset by peer
//! ```

use std::fmt::Write as _;
use std::io::{self, Write};

use parking_lot::Mutex;

use crate::Detail;

use super::DiagnosticSink;

/// ANSI color codes for terminal output.
mod colors {
    pub const WARNING: &str = "\x1b[1;33m"; // Bold yellow
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
}

/// Prefix for the continuation lines of a multi-line value.
const CONTINUATION: &str = "    ";

/// Append `text` and a newline, indenting every line after the first so it
/// stays inside its `=` block. One trailing newline is absorbed.
fn push_indented(out: &mut String, text: &str) {
    let text = text.strip_suffix('\n').unwrap_or(text);
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
            out.push_str(CONTINUATION);
        }
        out.push_str(line);
    }
    out.push('\n');
}

/// Color output mode for the terminal sink.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColorMode {
    /// Automatically detect based on terminal capabilities.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorMode {
    /// Resolve to a boolean based on terminal detection.
    ///
    /// For `Auto` mode, `is_tty` determines whether colors should be used.
    /// This parameter is ignored for `Always` and `Never` modes.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Terminal sink with optional color support.
pub struct TerminalSink<W: Write> {
    writer: Mutex<W>,
    colors: bool,
}

impl<W: Write> TerminalSink<W> {
    /// Create a terminal sink with explicit color mode.
    ///
    /// # Arguments
    ///
    /// * `writer` - The output writer
    /// * `mode` - Color mode selection
    /// * `is_tty` - Whether output is a TTY (used for `ColorMode::Auto`)
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalSink {
            writer: Mutex::new(writer),
            colors: mode.should_use_colors(is_tty),
        }
    }

    /// Consume the sink and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }

    fn paint(&self, out: &mut String, text: &str, color: &str) {
        if self.colors {
            let _ = write!(out, "{color}{text}{}", colors::RESET);
        } else {
            out.push_str(text);
        }
    }

    /// Render one record into a complete block of lines.
    fn render(&self, message: &str, detail: &Detail) -> String {
        let mut out = String::new();

        self.paint(&mut out, "warning", colors::WARNING);
        out.push_str(": ");
        push_indented(&mut out, message);

        out.push_str("  = ");
        self.paint(&mut out, "detail", colors::BOLD);
        out.push_str(": ");
        match detail {
            Detail::Text(text) => push_indented(&mut out, text),
            Detail::Null => out.push_str("null\n"),
            Detail::Error(err) => {
                push_indented(&mut out, &err.to_string());
                for cause in detail.causes() {
                    out.push_str("  = ");
                    self.paint(&mut out, "caused by", colors::BOLD);
                    out.push_str(": ");
                    push_indented(&mut out, &cause.to_string());
                }
            }
        }

        out
    }
}

impl TerminalSink<io::Stderr> {
    /// Create a terminal sink for stderr with explicit color mode.
    ///
    /// # Arguments
    ///
    /// * `mode` - Color mode selection (`Auto`, `Always`, or `Never`)
    /// * `is_tty` - Whether stderr is a TTY (used for `ColorMode::Auto`)
    pub fn stderr(mode: ColorMode, is_tty: bool) -> Self {
        TerminalSink::with_color_mode(io::stderr(), mode, is_tty)
    }
}

impl<W: Write + Send> DiagnosticSink for TerminalSink<W> {
    fn record(&self, message: &str, detail: &Detail) {
        let block = self.render(message, detail);
        let mut writer = self.writer.lock();
        let _ = writer.write_all(block.as_bytes());
    }

    fn flush(&self) {
        let _ = self.writer.lock().flush();
    }
}
