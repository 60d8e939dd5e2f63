//! Error taxonomy for the Taxo workspace.
//!
//! Every fallible operation returns [`TaxoResult`]. Per-subsystem errors live
//! in their own files and fold into [`TaxoError`] via `#[from]`.

mod config_error;
mod engine_error;

pub use config_error::ConfigError;
pub use engine_error::EngineError;

/// Top-level error type for the workspace.
#[derive(Debug, thiserror::Error)]
pub enum TaxoError {
    #[error("engine error: {0}")]
    Engine(#[from] EngineError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

/// Workspace-wide result alias.
pub type TaxoResult<T> = Result<T, TaxoError>;
