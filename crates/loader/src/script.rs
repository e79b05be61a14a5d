//! Script-based configuration via an embedded rhai engine.
//!
//! Responsibilities:
//! - Define the `Evaluate` seam turning script source text into a config
//!   value.
//! - Provide `RhaiEvaluator`, the default engine-backed implementation.
//! - Provide `ScriptLoader`, resolving a script file on disk to a
//!   `LoadResult` in both async and blocking modes.
//!
//! Does NOT handle:
//! - Extension fallback (see `rc`); a script path is loaded exactly as
//!   given.
//!
//! Invariants:
//! - Compile and runtime failures propagate as `LoadError::Eval`; they are
//!   never swallowed or downgraded to a missing-file outcome.
//! - Running a config script executes caller-supplied code. The caller owns
//!   that trust decision; the loader only reports the path it ran.

use std::path::Path;

use rhai::{Dynamic, Engine};
use serde_json::Value;

use crate::error::{LoadError, Result};
use crate::reader;
use crate::types::{LoadOptions, LoadResult};

/// Turns script source text into a configuration value.
///
/// `path` is the script's source identity, used in diagnostics only.
pub trait Evaluate {
    fn evaluate(&self, content: &str, path: &Path) -> Result<Value>;
}

/// Default evaluator backed by an embedded [`rhai`] engine.
///
/// The script's final expression becomes the configuration value, converted
/// through rhai's serde bridge: object maps become JSON objects, arrays stay
/// arrays, scalars map to their JSON counterparts.
pub struct RhaiEvaluator {
    engine: Engine,
}

impl RhaiEvaluator {
    pub fn new() -> Self {
        Self {
            engine: Engine::new(),
        }
    }
}

impl Default for RhaiEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RhaiEvaluator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RhaiEvaluator").finish_non_exhaustive()
    }
}

impl Evaluate for RhaiEvaluator {
    fn evaluate(&self, content: &str, path: &Path) -> Result<Value> {
        let eval_error = |message: String| LoadError::Eval {
            path: path.to_path_buf(),
            message,
        };

        let mut ast = self
            .engine
            .compile(content)
            .map_err(|err| eval_error(err.to_string()))?;
        ast.set_source(path.to_string_lossy().into_owned());

        let value: Dynamic = self
            .engine
            .eval_ast(&ast)
            .map_err(|err| eval_error(err.to_string()))?;
        rhai::serde::from_dynamic(&value).map_err(|err| eval_error(err.to_string()))
    }
}

/// Loads a path known to contain a configuration script.
#[derive(Debug, Default)]
pub struct ScriptLoader<E = RhaiEvaluator> {
    evaluator: E,
}

impl ScriptLoader<RhaiEvaluator> {
    pub fn new() -> Self {
        Self {
            evaluator: RhaiEvaluator::new(),
        }
    }
}

impl<E: Evaluate> ScriptLoader<E> {
    /// Use a custom evaluation engine instead of the default rhai engine.
    pub fn with_evaluator(evaluator: E) -> Self {
        Self { evaluator }
    }

    /// Load and evaluate the script at `path`.
    ///
    /// Returns `Ok(None)` when the file does not exist, or when it is empty
    /// and `options.ignore_empty` is set. Only `ignore_empty` is consulted
    /// here; the rc-specific options have no effect.
    pub async fn load(&self, path: &Path, options: LoadOptions) -> Result<Option<LoadResult>> {
        let content = reader::read(path).await.map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        self.resolve(content, path, options)
    }

    /// Blocking variant of [`load`](Self::load), identical in behavior.
    pub fn load_sync(&self, path: &Path, options: LoadOptions) -> Result<Option<LoadResult>> {
        let content = reader::read_sync(path).map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        self.resolve(content, path, options)
    }

    fn resolve(
        &self,
        content: Option<String>,
        path: &Path,
        options: LoadOptions,
    ) -> Result<Option<LoadResult>> {
        LoadResult::from_content(content, path, options.ignore_empty, |content, path| {
            self.evaluator.evaluate(content, path)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn object_map_becomes_json_object() {
        let evaluator = RhaiEvaluator::new();
        let value = evaluator
            .evaluate(r#"#{ name: "svc", port: 8080 }"#, Path::new("config.rhai"))
            .unwrap();
        assert_eq!(value, json!({"name": "svc", "port": 8080}));
    }

    #[test]
    fn scalar_result_becomes_json_scalar() {
        let evaluator = RhaiEvaluator::new();
        let value = evaluator
            .evaluate("40 + 2", Path::new("config.rhai"))
            .unwrap();
        assert_eq!(value, json!(42));
    }

    #[test]
    fn thrown_error_reports_the_script_path() {
        let evaluator = RhaiEvaluator::new();
        let err = evaluator
            .evaluate(r#"throw "bad config";"#, Path::new("config.rhai"))
            .unwrap_err();
        match err {
            LoadError::Eval { path, message } => {
                assert_eq!(path, Path::new("config.rhai"));
                assert!(message.contains("bad config"));
            }
            other => panic!("expected an Eval error, got {other:?}"),
        }
    }

    #[test]
    fn syntax_error_is_an_eval_error() {
        let evaluator = RhaiEvaluator::new();
        let err = evaluator
            .evaluate("#{ unterminated", Path::new("config.rhai"))
            .unwrap_err();
        assert!(matches!(err, LoadError::Eval { .. }));
    }
}
