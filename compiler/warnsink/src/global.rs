//! The process-wide reporter behind the free [`report`] functions.

use std::error::Error;
use std::sync::OnceLock;

use crate::{Detail, Reporter};

static GLOBAL: OnceLock<Reporter> = OnceLock::new();

/// Failure to install the process-wide reporter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum InstallError {
    /// A reporter was already installed, or the default one was already in
    /// use when `install` was called.
    #[error("a process-wide reporter is already in place")]
    AlreadyInstalled,
}

/// Install the process-wide reporter.
///
/// Succeeds at most once per process, and only before the first call to
/// [`report`], [`report_error`] or [`global`]; after that the reporter in
/// place is left untouched.
pub fn install(reporter: Reporter) -> Result<(), InstallError> {
    GLOBAL
        .set(reporter)
        .map_err(|_| InstallError::AlreadyInstalled)
}

/// The process-wide reporter, falling back to a [`TracingSink`](crate::TracingSink)
/// reporter when none was installed.
pub fn global() -> &'static Reporter {
    GLOBAL.get_or_init(Reporter::default)
}

/// Report a warning through the process-wide reporter.
///
/// An omitted detail is recorded as [`DEFAULT_DETAIL`](crate::DEFAULT_DETAIL).
pub fn report(message: &str, detail: Option<Detail>) {
    global().report(message, detail);
}

/// Report a warning with `err` as the detail.
pub fn report_error<E: Error + Send + Sync + 'static>(message: &str, err: E) {
    global().report_error(message, err);
}
