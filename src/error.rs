// src/error.rs

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can abort a run. One variant per failure class;
/// each is terminal for the invocation, there are no retry paths.
///
/// Lines with fewer than six fields and non-numeric time tokens are
/// deliberately NOT here: the first is a silent filter, the second
/// degrades to NaN (see snapshot.rs).
#[derive(Debug, Error)]
pub enum RankError {
    #[error("{0}")]
    Usage(String),

    #[error("cannot read snapshot {}: {source}", .path.display())]
    Resource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("different entry count: {left} != {right}")]
    LengthMismatch { left: usize, right: usize },

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("{what} not found in page")]
    Extract { what: &'static str },

    #[error("path exists but is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
