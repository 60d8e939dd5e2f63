use crate::category::Classification;
use crate::config::EngineConfig;
use crate::errors::TaxoResult;

/// External taxonomy classification engine.
///
/// The engine is an opaque collaborator: model building, persistence, and the
/// scoring algorithm are its concern. The ranker only requires ordered
/// (path, weight) output and injects the engine at construction, which keeps
/// the post-processing pipeline testable against a stub.
pub trait IClassifierEngine: Send + Sync {
    /// Build a fresh model from the full reference taxonomy.
    fn init(&self, config: &EngineConfig) -> TaxoResult<()>;

    /// Restore a previously persisted model.
    fn load(&self, config: &EngineConfig) -> TaxoResult<()>;

    /// Score `text` against the taxonomy. Returns at most `k` categories,
    /// sorted by descending weight.
    fn classify(&self, text: &str, k: usize) -> TaxoResult<Classification>;
}
