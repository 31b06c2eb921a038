//! The secondary value that accompanies a reported message.
//!
//! Callers may hand over free-form text (often a stack trace), an error
//! value, or an explicit null. Nothing stricter is assumed about its shape.
//! Errors travel to the sink as the error itself, so a sink can read its
//! `Debug` form, walk its sources or downcast it.

use std::error::Error;
use std::fmt;
use std::sync::Arc;

/// Recorded in place of a detail the caller did not supply.
pub const DEFAULT_DETAIL: &str = "No stack trace provided";

/// An error value shared between the reporter and its sinks.
pub type SharedError = Arc<dyn Error + Send + Sync + 'static>;

/// Detail attached to a reported message.
#[derive(Clone, Debug)]
pub enum Detail {
    /// Free-form text, recorded as-is (empty text included).
    Text(String),
    /// The caller's error, untouched.
    Error(SharedError),
    /// An explicitly supplied null-like value.
    Null,
}

impl Default for Detail {
    fn default() -> Self {
        Detail::Text(DEFAULT_DETAIL.to_string())
    }
}

impl Detail {
    /// Create a text detail.
    pub fn text(text: impl Into<String>) -> Self {
        Detail::Text(text.into())
    }

    /// Take ownership of an error.
    pub fn from_error<E: Error + Send + Sync + 'static>(err: E) -> Self {
        Detail::Error(Arc::new(err))
    }

    /// Wrap an error that is also held elsewhere.
    pub fn from_shared(err: SharedError) -> Self {
        Detail::Error(err)
    }

    /// Short tag naming the variant, used by machine-readable sinks.
    pub fn kind(&self) -> &'static str {
        match self {
            Detail::Text(_) => "text",
            Detail::Error(_) => "error",
            Detail::Null => "null",
        }
    }

    /// The error, for `Error` details.
    pub fn as_error(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        match self {
            Detail::Error(err) => Some(&**err),
            _ => None,
        }
    }

    /// The error's `source()` chain, outermost first. Empty for non-errors.
    pub fn causes(&self) -> impl Iterator<Item = &(dyn Error + 'static)> {
        let first = self.as_error().and_then(|err| err.source());
        std::iter::successors(first, |&err| err.source())
    }
}

/// Errors compare by identity: two details are equal when they hold the
/// same error value.
impl PartialEq for Detail {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Detail::Text(a), Detail::Text(b)) => a == b,
            (Detail::Error(a), Detail::Error(b)) => Arc::ptr_eq(a, b),
            (Detail::Null, Detail::Null) => true,
            _ => false,
        }
    }
}

impl Eq for Detail {}

/// Renders on one line. Error causes are joined with `": "`.
impl fmt::Display for Detail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Detail::Text(text) => f.write_str(text),
            Detail::Error(err) => {
                write!(f, "{err}")?;
                for cause in self.causes() {
                    write!(f, ": {cause}")?;
                }
                Ok(())
            }
            Detail::Null => f.write_str("null"),
        }
    }
}

impl From<&str> for Detail {
    fn from(text: &str) -> Self {
        Detail::Text(text.to_string())
    }
}

impl From<String> for Detail {
    fn from(text: String) -> Self {
        Detail::Text(text)
    }
}

impl From<SharedError> for Detail {
    fn from(err: SharedError) -> Self {
        Detail::Error(err)
    }
}

impl From<Box<dyn Error + Send + Sync + 'static>> for Detail {
    fn from(err: Box<dyn Error + Send + Sync + 'static>) -> Self {
        Detail::Error(Arc::from(err))
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
