/// Classifier engine boundary errors.
///
/// Load and init failures are fatal at construction time; there is no retry.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("model load failed from {path}: {reason}")]
    LoadFailed { path: String, reason: String },

    #[error("model initialization failed: {reason}")]
    InitFailed { reason: String },

    #[error("classification failed: {reason}")]
    ClassifyFailed { reason: String },
}
