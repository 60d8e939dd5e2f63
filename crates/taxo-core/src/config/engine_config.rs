use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Classifier engine configuration.
///
/// Handed through to the engine's `load`/`init` operations; the core never
/// interprets these beyond checking whether the persisted model exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Path to the persisted classifier model.
    pub classifier_path: PathBuf,
    /// Path to the full reference taxonomy used to build a fresh model.
    pub taxonomy_path: PathBuf,
    /// Minimum documents a category needs to participate in a fresh build.
    pub min_category_docs: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            classifier_path: PathBuf::from("taxo-classifier.bin"),
            taxonomy_path: PathBuf::from("taxonomy.rdf"),
            min_category_docs: defaults::DEFAULT_MIN_CATEGORY_DOCS,
        }
    }
}
