//! Operator policy tables: the partial-path rewrite table and the blacklist.
//!
//! The rewrite table is line-oriented text maintained by operators: one rule
//! per line, `prefix*suffix`. Lines without a `*` are ignored.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, TaxoResult};

/// One partial-match rewrite rule.
///
/// A path matches when it starts with `prefix` and ends with `suffix`.
/// On match the suffix text itself becomes the entire replacement label;
/// nothing is extracted from the matched path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialRule {
    pub prefix: String,
    pub suffix: String,
}

impl PartialRule {
    /// Parse one rewrite-table line. Splits at the first `*`; lines without
    /// one carry no rule.
    pub fn parse(line: &str) -> Option<Self> {
        let (prefix, suffix) = line.split_once('*')?;
        Some(Self {
            prefix: prefix.to_string(),
            suffix: suffix.to_string(),
        })
    }
}

/// The two static policy inputs, parsed and immutable for the ranker's
/// lifetime.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PolicyTable {
    /// Rewrite rules, applied in order; first match wins.
    pub partials: Vec<PartialRule>,
    /// Path prefixes excluded from output. Empty by default.
    pub blacklist: Vec<String>,
}

impl PolicyTable {
    /// Parse a rewrite table from its line-oriented text form.
    pub fn parse(rewrite_table: &str, blacklist: Vec<String>) -> Self {
        let partials = rewrite_table.lines().filter_map(PartialRule::parse).collect();
        Self { partials, blacklist }
    }

    /// Read and parse a rewrite-table file. Unreadable files are fatal.
    pub fn load(path: &Path, blacklist: Vec<String>) -> TaxoResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(&content, blacklist))
    }
}
