//! Error types for configuration loading.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for loader operations.
pub type Result<T> = std::result::Result<T, LoadError>;

/// Errors that can occur while resolving or parsing a configuration file.
///
/// A missing file is never an error; loaders report it as a `None` outcome.
/// An empty file is a policy outcome as well (see `LoadResult`). Everything
/// below is fatal and propagates to the caller unmodified: no retry, no
/// fallback to another candidate once content has been read.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The file could not be read for a reason other than not existing
    /// (permission denied, a directory in the way, invalid encoding).
    #[error("failed to read config file at {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Malformed strict-JSON content.
    #[error("malformed JSON in {path}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Malformed YAML content.
    #[error("malformed YAML in {path}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// Script compilation or evaluation failed.
    #[error("failed to evaluate config script at {path}: {message}")]
    Eval { path: PathBuf, message: String },
}
