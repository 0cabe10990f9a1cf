//! Error taxonomy for the tag-selection pipeline.

use std::path::PathBuf;

/// citags pipeline errors.
///
/// Every variant is fatal: there is no local recovery anywhere in the
/// pipeline, and each failure surfaces to the top level. Empty results
/// (no changed paths, no changed modules, no matching tags) are not
/// errors; they are reported as [`crate::pipeline::Outcome`] values.
#[derive(Debug, thiserror::Error)]
pub enum CitagsError {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("io error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("process error: {0}")]
    Process(String),

    #[error("parse error in {path}: {message}")]
    Parse { path: PathBuf, message: String },
}

/// Result type for citags operations.
pub type Result<T> = std::result::Result<T, CitagsError>;
