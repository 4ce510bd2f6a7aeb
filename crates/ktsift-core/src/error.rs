use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by a classification scan.
///
/// Malformed text is never an error: file contents are decoded lossily, so a
/// file with invalid UTF-8 still gets classified. Only the filesystem can
/// fail a scan.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The scan root is missing or not a readable directory. Fatal before
    /// any output is produced.
    #[error("cannot scan root {path:?}: {source}")]
    Path {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An individual file could not be read. Aborts the whole scan; there is
    /// no partial-failure recovery.
    #[error("failed to read {path:?}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
