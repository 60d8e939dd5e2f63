use serde::{Deserialize, Serialize};

use super::defaults;

/// Ranking pipeline configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    /// Minimum acceptable weight. Because engine output is weight-sorted
    /// descending, the first entry below this ends processing of the stream.
    pub cutoff_similarity: f64,
    /// Multiplier on the requested result count when querying the engine.
    pub overfetch_factor: usize,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            cutoff_similarity: defaults::DEFAULT_CUTOFF_SIMILARITY,
            overfetch_factor: defaults::DEFAULT_OVERFETCH_FACTOR,
        }
    }
}
