//! Strict-JSON and YAML parsing with path-carrying errors.

use std::path::Path;

use serde_json::Value;

use crate::error::{LoadError, Result};

/// Parse `content` as strict JSON, naming `path` in the error on failure.
pub(crate) fn parse_json(content: &str, path: &Path) -> Result<Value> {
    serde_json::from_str(content).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse `content` as YAML. YAML accepts JSON as a subset, so this also
/// covers loose JSON.
pub(crate) fn parse_yaml(content: &str, path: &Path) -> Result<Value> {
    serde_yaml::from_str(content).map_err(|source| LoadError::Yaml {
        path: path.to_path_buf(),
        source,
    })
}
