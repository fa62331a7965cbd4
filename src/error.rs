//! Error types for report output and import rewriting
//!
//! A missing report root is not an error here: `generate_report` turns it
//! into sentinel report text. Traversal failures are logged by the walker and
//! never surface as values.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures around producing and saving a directory report.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("could not write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not locate the executable's directory: {0}")]
    DefaultRoot(#[source] io::Error),
}

/// Failures of the import rewriter. Per-file variants are reported for that
/// file only; the batch carries on.
#[derive(Error, Debug)]
pub enum RewriteError {
    #[error("the directory '{}' does not exist", .0.display())]
    RootNotDirectory(PathBuf),

    #[error("invalid rule '{rule}': {reason}")]
    InvalidRule { rule: String, reason: String },

    #[error("failed to read file: {0}")]
    Read(#[source] io::Error),

    #[error("failed to write file: {0}")]
    Write(#[source] io::Error),
}
