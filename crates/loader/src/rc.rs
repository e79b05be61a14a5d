//! Extensionless "rc" file loading with extension fallback.
//!
//! Responsibilities:
//! - Resolve an extensionless config path to parsed content, first from the
//!   path itself (YAML or strict JSON), then, when enabled, from the fixed
//!   candidate chain `.json`, `.yaml`, `.yml`, `.rhai`.
//! - Keep the async and blocking paths behaviorally identical.
//!
//! Does NOT handle:
//! - Deciding which path to look at; directory search is the caller's job.
//! - Merging multiple sources; the first usable candidate wins outright.
//!
//! Invariants:
//! - Candidates are consulted strictly in chain order and only while earlier
//!   candidates produced nothing; a parse failure anywhere aborts the whole
//!   chain.
//! - A present-but-empty extensionless file ends resolution immediately,
//!   while an ignored empty fallback candidate advances the chain.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{LoadError, Result};
use crate::parser;
use crate::reader;
use crate::script::{Evaluate, RhaiEvaluator};
use crate::types::{LoadOptions, LoadResult};

/// Content format of a resolution candidate.
#[derive(Debug, Clone, Copy)]
enum RcFormat {
    StrictJson,
    Yaml,
    Script,
}

/// Fallback candidates, in resolution order.
const FALLBACK_CHAIN: &[(&str, RcFormat)] = &[
    ("json", RcFormat::StrictJson),
    ("yaml", RcFormat::Yaml),
    ("yml", RcFormat::Yaml),
    ("rhai", RcFormat::Script),
];

/// Loads extensionless configuration files.
#[derive(Debug, Default)]
pub struct RcLoader<E = RhaiEvaluator> {
    evaluator: E,
}

impl RcLoader<RhaiEvaluator> {
    pub fn new() -> Self {
        Self {
            evaluator: RhaiEvaluator::new(),
        }
    }
}

impl<E: Evaluate> RcLoader<E> {
    /// Use a custom evaluation engine for `.rhai` fallback candidates.
    pub fn with_evaluator(evaluator: E) -> Self {
        Self { evaluator }
    }

    /// Load the configuration at `path`.
    ///
    /// The path itself is read first and parsed as YAML, or as strict JSON
    /// under `options.strict_json`. When nothing usable is there (missing
    /// file, or empty file under `options.ignore_empty`) and
    /// `options.extension_fallback` is set, the candidates `path.json`,
    /// `path.yaml`, `path.yml` and `path.rhai` are tried in order; the first
    /// one producing a result wins and its path becomes the result's
    /// `filepath`. Returns `Ok(None)` when no candidate produced anything.
    pub async fn load(&self, path: &Path, options: LoadOptions) -> Result<Option<LoadResult>> {
        let content = reader::read(path).await.map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        if let Some(result) = self.resolve(content, path, direct_format(options), options)? {
            return Ok(Some(result));
        }
        if !options.extension_fallback {
            return Ok(None);
        }

        tracing::debug!(path = %path.display(), "no extensionless config, trying fallback extensions");
        for &(extension, format) in FALLBACK_CHAIN {
            let candidate = append_extension(path, extension);
            let content = reader::read(&candidate)
                .await
                .map_err(|source| LoadError::Read {
                    path: candidate.clone(),
                    source,
                })?;
            if let Some(result) = self.resolve(content, &candidate, format, options)? {
                return Ok(Some(result));
            }
        }
        Ok(None)
    }

    /// Blocking variant of [`load`](Self::load), identical in behavior.
    pub fn load_sync(&self, path: &Path, options: LoadOptions) -> Result<Option<LoadResult>> {
        let content = reader::read_sync(path).map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        if let Some(result) = self.resolve(content, path, direct_format(options), options)? {
            return Ok(Some(result));
        }
        if !options.extension_fallback {
            return Ok(None);
        }

        tracing::debug!(path = %path.display(), "no extensionless config, trying fallback extensions");
        for &(extension, format) in FALLBACK_CHAIN {
            let candidate = append_extension(path, extension);
            let content = reader::read_sync(&candidate).map_err(|source| LoadError::Read {
                path: candidate.clone(),
                source,
            })?;
            if let Some(result) = self.resolve(content, &candidate, format, options)? {
                return Ok(Some(result));
            }
        }
        Ok(None)
    }

    fn resolve(
        &self,
        content: Option<String>,
        filepath: &Path,
        format: RcFormat,
        options: LoadOptions,
    ) -> Result<Option<LoadResult>> {
        LoadResult::from_content(content, filepath, options.ignore_empty, |content, path| {
            self.parse(format, content, path)
        })
    }

    fn parse(&self, format: RcFormat, content: &str, path: &Path) -> Result<Value> {
        match format {
            RcFormat::StrictJson => parser::parse_json(content, path),
            RcFormat::Yaml => parser::parse_yaml(content, path),
            RcFormat::Script => self.evaluator.evaluate(content, path),
        }
    }
}

/// Parsing format for the extensionless path itself.
fn direct_format(options: LoadOptions) -> RcFormat {
    if options.strict_json {
        RcFormat::StrictJson
    } else {
        RcFormat::Yaml
    }
}

/// `path` with `.extension` appended. `Path::with_extension` would replace
/// an existing suffix after a dot, which rc names like `app.conf` must keep.
fn append_extension(path: &Path, extension: &str) -> PathBuf {
    let mut appended = OsString::from(path.as_os_str());
    appended.push(".");
    appended.push(extension);
    PathBuf::from(appended)
}
