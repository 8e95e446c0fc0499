//! Document extraction errors.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to turn one document into a record.
///
/// Any of these aborts the whole run.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("failed to read document `{path}`")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("document `{path}` has no `<main>` block")]
    MissingMain { path: PathBuf },

    /// The platform or filesystem cannot report the file's creation time.
    #[error("cannot read creation time of `{path}`")]
    Timestamp {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
