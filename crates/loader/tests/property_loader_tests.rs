//! Property-based tests for loader mode equivalence.
//!
//! These tests verify that the async and blocking entry points return
//! identical results for generated JSON documents, in both the YAML and
//! strict-JSON parsing modes, and that the parsed value matches what the
//! reference parser produced the document from.

use std::fs;

use proptest::prelude::*;
use serde_json::Value;
use tempfile::tempdir;

use runcom_loader::{LoadOptions, RcLoader};

/// Strategy for generating JSON documents: scalars at the leaves, arrays
/// and objects up to a small depth.
fn json_value_strategy() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        "[a-z0-9 ]{0,12}".prop_map(Value::from),
    ];
    leaf.prop_recursive(3, 24, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::from),
            prop::collection::btree_map("[a-z][a-z0-9_]{0,8}", inner, 0..6)
                .prop_map(|entries| Value::Object(entries.into_iter().collect())),
        ]
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn async_and_blocking_loads_agree_on_json_documents(
        value in json_value_strategy(),
        strict_json in any::<bool>(),
    ) {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".apprc");
        fs::write(&path, serde_json::to_string_pretty(&value).unwrap()).unwrap();

        let options = LoadOptions {
            strict_json,
            ..LoadOptions::default()
        };
        let loader = RcLoader::new();

        let from_sync = loader
            .load_sync(&path, options)
            .unwrap()
            .expect("written document resolves");
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let from_async = runtime
            .block_on(loader.load(&path, options))
            .unwrap()
            .expect("written document resolves");

        prop_assert_eq!(&from_sync, &from_async);
        prop_assert_eq!(from_sync.config.as_ref(), Some(&value));
        prop_assert_eq!(&from_sync.filepath, &path);
    }
}
