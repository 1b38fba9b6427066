//! Error types for uberfind.
//!
//! Only run-fatal conditions live here. A file that cannot be opened or
//! decoded as text is a per-file condition: it surfaces as the `io::Error`
//! from `scan_file` and is swallowed by the driver loop, which moves on to
//! the next file.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using the crate's Error.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("search path not found or not a directory: {0}")]
    PathNotFound(PathBuf),

    #[error("invalid keyword pattern \"{pattern}\": {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("failed to create results file {path}: {source}")]
    ReportCreate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write results: {0}")]
    ReportWrite(#[from] io::Error),
}
