//! Test fixtures for the Taxo workspace: a stub classifier engine and a
//! loader for the golden JSON datasets under `golden/`.

use std::path::PathBuf;
use std::sync::Mutex;

use serde::de::DeserializeOwned;
use taxo_core::category::{Classification, RawCategory};
use taxo_core::config::EngineConfig;
use taxo_core::errors::TaxoResult;
use taxo_core::traits::IClassifierEngine;

// ── Stub engine ───────────────────────────────────────────────────────────

/// Canned-output classifier engine.
///
/// Returns a fixed weight-descending stream truncated to `k`, and records
/// which lifecycle operations were invoked so bootstrap paths can be
/// asserted.
pub struct StubEngine {
    categories: Vec<RawCategory>,
    invocations: Mutex<Vec<&'static str>>,
}

impl StubEngine {
    pub fn with_categories(categories: Vec<RawCategory>) -> Self {
        Self {
            categories,
            invocations: Mutex::new(Vec::new()),
        }
    }

    /// An engine that classifies nothing.
    pub fn empty() -> Self {
        Self::with_categories(Vec::new())
    }

    /// Lifecycle operations invoked so far, in order.
    pub fn invocations(&self) -> Vec<&'static str> {
        self.invocations.lock().unwrap().clone()
    }

    fn record(&self, op: &'static str) {
        self.invocations.lock().unwrap().push(op);
    }
}

impl IClassifierEngine for StubEngine {
    fn init(&self, _config: &EngineConfig) -> TaxoResult<()> {
        self.record("init");
        Ok(())
    }

    fn load(&self, _config: &EngineConfig) -> TaxoResult<()> {
        self.record("load");
        Ok(())
    }

    fn classify(&self, _text: &str, k: usize) -> TaxoResult<Classification> {
        self.record("classify");
        Ok(Classification {
            categories: self.categories.iter().take(k).cloned().collect(),
        })
    }
}

/// Shorthand for building raw categories in tests.
pub fn raw(path: &str, weight: f64) -> RawCategory {
    RawCategory::new(path, weight)
}

// ── Golden fixture loading ────────────────────────────────────────────────

/// Absolute path to a fixture file under this crate.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(relative_path)
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixture_path(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a fixture file as a raw JSON value.
pub fn load_fixture_value(relative_path: &str) -> serde_json::Value {
    load_fixture(relative_path)
}

/// List all JSON files in a fixture subdirectory, sorted by name.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixture_path(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut paths: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                Some(path)
            } else {
                None
            }
        })
        .collect();
    paths.sort();
    paths
}
