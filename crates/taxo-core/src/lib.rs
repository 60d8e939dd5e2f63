//! # taxo-core
//!
//! Foundation crate for the Taxo category ranking system.
//! Defines the domain types, the classifier engine trait, errors, config,
//! and constants. Every other crate in the workspace depends on this.

pub mod category;
pub mod config;
pub mod constants;
pub mod errors;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use category::{Classification, CleanedCategory, OutputGroup, RawCategory};
pub use config::{EngineConfig, PartialRule, PolicyTable, RankingConfig, TaxoConfig};
pub use errors::{TaxoError, TaxoResult};
pub use traits::IClassifierEngine;
