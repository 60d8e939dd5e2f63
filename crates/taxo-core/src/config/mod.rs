//! Configuration for the engine boundary and the ranking pipeline.
//!
//! All structs deserialize with `#[serde(default)]` so a partial TOML file
//! (or none at all) yields working defaults.

mod engine_config;
mod policy;
mod ranking_config;

pub mod defaults;

pub use engine_config::EngineConfig;
pub use policy::{PartialRule, PolicyTable};
pub use ranking_config::RankingConfig;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, TaxoResult};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxoConfig {
    pub engine: EngineConfig,
    pub ranking: RankingConfig,
}

impl TaxoConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> TaxoResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(config)
    }
}
