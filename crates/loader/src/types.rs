//! Result and option types shared by the loaders.
//!
//! Responsibilities:
//! - Define `LoadOptions` (per-call loading policy) and `LoadResult` (a
//!   successfully resolved configuration source).
//! - Hold the one content-to-result decision every loader and every fallback
//!   candidate goes through, so the async and blocking paths cannot drift.
//!
//! Does NOT handle:
//! - File I/O (see `reader`).
//! - Format-specific parsing (see `parser` and the loaders).
//!
//! Invariants:
//! - `is_empty == true` implies `config == None`.
//! - A result names the path its content was actually read from, which for
//!   fallback candidates differs from the path the caller asked about.

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::Result;

/// Per-call loading policy.
///
/// The default treats an empty file as a real (empty) result, parses
/// extensionless content as YAML, and never looks past the given path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// Treat an existing zero-length file as "no configuration here"
    /// instead of producing an empty result.
    pub ignore_empty: bool,
    /// Parse extensionless content as strict JSON instead of YAML.
    pub strict_json: bool,
    /// When the extensionless read finds nothing, retry with known
    /// extensions appended (`.json`, `.yaml`, `.yml`, `.rhai`, in order).
    pub extension_fallback: bool,
}

/// A successfully resolved configuration source.
///
/// Constructed fresh per call and owned by the caller; loaders keep no
/// reference to it.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadResult {
    /// The parsed configuration value. `None` only for an empty file the
    /// caller chose not to ignore.
    pub config: Option<Value>,
    /// The path the content was actually read from.
    pub filepath: PathBuf,
    /// True when the source file existed with zero-length content.
    pub is_empty: bool,
}

impl LoadResult {
    fn parsed(config: Value, filepath: &Path) -> Self {
        Self {
            config: Some(config),
            filepath: filepath.to_path_buf(),
            is_empty: false,
        }
    }

    fn empty(filepath: &Path) -> Self {
        Self {
            config: None,
            filepath: filepath.to_path_buf(),
            is_empty: true,
        }
    }

    /// The shared disposition of raw file content.
    ///
    /// `content` is `None` when the file does not exist. Missing files and
    /// ignored empty files yield `Ok(None)` so callers can move on to the
    /// next candidate; a non-ignored empty file becomes an empty result;
    /// everything else goes through `parse`, whose failure propagates.
    pub(crate) fn from_content<F>(
        content: Option<String>,
        filepath: &Path,
        ignore_empty: bool,
        parse: F,
    ) -> Result<Option<Self>>
    where
        F: FnOnce(&str, &Path) -> Result<Value>,
    {
        let Some(content) = content else {
            return Ok(None);
        };
        if content.is_empty() {
            if ignore_empty {
                tracing::debug!(path = %filepath.display(), "ignoring empty config file");
                return Ok(None);
            }
            return Ok(Some(Self::empty(filepath)));
        }
        let config = parse(&content, filepath)?;
        Ok(Some(Self::parsed(config, filepath)))
    }
}
