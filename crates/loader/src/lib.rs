//! Resolution and parsing of extensionless configuration files.
//!
//! This crate loads application configuration from a known filesystem path,
//! covering the two source shapes that cannot be dispatched on a file
//! extension: extensionless "rc" files (YAML, loose JSON, or strict JSON)
//! and script files whose evaluated value is the configuration.
//!
//! Every loader comes in an asynchronous and a blocking variant with
//! identical semantics. A missing file is an ordinary `None` outcome, never
//! an error; malformed content always is.

mod error;
mod parser;
mod rc;
pub mod reader;
mod script;
mod types;

pub use error::{LoadError, Result};
pub use rc::RcLoader;
pub use script::{Evaluate, RhaiEvaluator, ScriptLoader};
pub use types::{LoadOptions, LoadResult};
