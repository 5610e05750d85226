// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by counting, sampling, and the scc delegate.
///
/// A bad `--limit` value is deliberately absent: it is corrected to the
/// default at parse time and never reaches the caller.
#[derive(Debug, Error)]
pub enum WcError {
    /// I/O failure during a scanning pass, named after the operation that
    /// was running so partial counts are never mistaken for results.
    #[error("{operation} failed: {source}")]
    Scan {
        operation: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot open '{path}': {source}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("scc is not installed. Please install it from https://github.com/boyter/scc")]
    DelegateMissing,

    #[error("failed to run scc: {reason}")]
    DelegateFailed { reason: String },

    #[error("failed to parse scc output: {details}")]
    DelegateOutput { details: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, WcError>;
