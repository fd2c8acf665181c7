//! Test fixture loader for archetype synthesis.
//!
//! Fixtures are LCIA methods stored as JSON under `methods/`: the flows the
//! method touches (as a flow directory would return them) and the raw
//! `(flow_key, value)` records (as a method source would return them).

use std::path::PathBuf;

use archetype_core::traits::{InMemoryFlowDirectory, StaticMethodSource};
use archetype_core::{FlowKey, FlowRecord, RawCfValue};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Root directory of the test-fixtures crate.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// A flow entry of a method fixture.
#[derive(Debug, Clone, Deserialize)]
pub struct FlowFixture {
    pub key: FlowKey,
    #[serde(flatten)]
    pub record: FlowRecord,
}

/// An LCIA method with the flows it characterises.
#[derive(Debug, Clone, Deserialize)]
pub struct MethodFixture {
    pub name: Vec<String>,
    pub unit: String,
    #[serde(default)]
    pub description: String,
    pub flows: Vec<FlowFixture>,
    pub cfs: Vec<(FlowKey, RawCfValue)>,
}

impl MethodFixture {
    pub fn source(&self) -> StaticMethodSource {
        StaticMethodSource::new(self.cfs.clone())
    }

    pub fn directory(&self) -> InMemoryFlowDirectory {
        self.flows
            .iter()
            .map(|flow| (flow.key.clone(), flow.record.clone()))
            .collect()
    }

    /// Key of the flow with the given categories.
    ///
    /// # Panics
    /// Panics if no flow of the fixture has them.
    pub fn key_for(&self, categories: &[&str]) -> FlowKey {
        self.flows
            .iter()
            .find(|flow| flow.record.categories == categories)
            .map(|flow| flow.key.clone())
            .unwrap_or_else(|| panic!("no fixture flow with categories {categories:?}"))
    }
}

/// Load a method fixture by file stem, e.g. `pm25_one_unspecified`.
pub fn load_method(stem: &str) -> MethodFixture {
    load_fixture(&format!("methods/{stem}.json"))
}
