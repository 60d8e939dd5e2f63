//! RankingEngine: orchestrates the full post-processing pipeline.
//!
//! classify: engine query (over-fetched) → filter/cutoff → canonicalize →
//! group/dedup → bounded, weight-sorted output groups.

use std::sync::Arc;

use taxo_core::category::{CleanedCategory, OutputGroup, RawCategory};
use taxo_core::config::{PolicyTable, RankingConfig, TaxoConfig};
use taxo_core::constants::ROOT_PREFIX;
use taxo_core::errors::TaxoResult;
use taxo_core::traits::IClassifierEngine;
use tracing::{debug, info};

use crate::canonicalize::Canonicalizer;
use crate::filter::{FilterVerdict, PolicyFilter};
use crate::grouping::GroupAccumulator;

/// The category ranker. Holds the injected classifier engine handle and the
/// immutable policy tables; each call is a stateless transformation, so
/// concurrent calls are safe as long as the engine's reads are.
pub struct RankingEngine {
    engine: Arc<dyn IClassifierEngine>,
    canonicalizer: Canonicalizer,
    blacklist: Vec<String>,
    config: RankingConfig,
}

impl RankingEngine {
    /// Wrap an engine whose model is already loaded.
    pub fn new(engine: Arc<dyn IClassifierEngine>, policy: PolicyTable, config: RankingConfig) -> Self {
        Self {
            engine,
            canonicalizer: Canonicalizer::new(policy.partials),
            blacklist: policy.blacklist,
            config,
        }
    }

    /// Construct the ranker, restoring the engine's model from disk when a
    /// persisted copy exists and building a fresh one otherwise. Engine
    /// failures here abort construction.
    pub fn bootstrap(
        engine: Arc<dyn IClassifierEngine>,
        config: &TaxoConfig,
        policy: PolicyTable,
    ) -> TaxoResult<Self> {
        if config.engine.classifier_path.exists() {
            engine.load(&config.engine)?;
            info!(path = %config.engine.classifier_path.display(), "restored persisted classifier model");
        } else {
            engine.init(&config.engine)?;
            info!(taxonomy = %config.engine.taxonomy_path.display(), "built fresh classifier model");
        }
        Ok(Self::new(engine, policy, config.ranking.clone()))
    }

    /// Classify `text` into at most `max_cats` deduplicated output groups,
    /// using the configured cutoff. `max_cats == 0` yields an empty result.
    pub fn classify(&self, text: &str, max_cats: usize) -> TaxoResult<Vec<OutputGroup>> {
        self.classify_with_cutoff(text, max_cats, self.config.cutoff_similarity)
    }

    /// Classify with an explicit cutoff overriding the configured one.
    pub fn classify_with_cutoff(
        &self,
        text: &str,
        max_cats: usize,
        cutoff: f64,
    ) -> TaxoResult<Vec<OutputGroup>> {
        if max_cats == 0 {
            return Ok(Vec::new());
        }

        // Over-fetch: filtering and deduplication eat most raw entries. If
        // this window cannot fill max_cats groups, fewer are returned; the
        // engine is never re-queried.
        let k = self.config.overfetch_factor.saturating_mul(max_cats);
        let classification = self.engine.classify(text, k)?;
        debug!(candidates = classification.categories.len(), k, "engine returned candidates");

        let filter = PolicyFilter::new(&self.blacklist, cutoff);
        let mut accumulator = GroupAccumulator::new(max_cats);
        let mut kept = 0usize;

        for raw in &classification.categories {
            match filter.evaluate(raw) {
                FilterVerdict::Halt => break,
                FilterVerdict::Drop => continue,
                FilterVerdict::Keep => {
                    kept += 1;
                    let cleaned = self.canonicalizer.clean(raw);
                    accumulator.absorb(raw, &cleaned.category);
                }
            }
        }

        let groups = accumulator.finish();
        info!(kept, groups = groups.len(), max_cats, "post-processing complete");
        Ok(groups)
    }

    /// The single best category, canonicalized but not grouped. Zero engine
    /// results degrade to the bare root path.
    pub fn classify_top(&self, text: &str) -> TaxoResult<CleanedCategory> {
        let classification = self.engine.classify(text, 1)?;
        let top = classification
            .categories
            .into_iter()
            .next()
            .unwrap_or_else(|| RawCategory::new(ROOT_PREFIX, 0.0));
        Ok(self.canonicalizer.clean(&top))
    }
}
