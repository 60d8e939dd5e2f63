//! Domain types for classifier output and post-processed results.

use serde::{Deserialize, Serialize};

use crate::constants::GROUP_DEPTH;

/// One raw (path, weight) pair as returned by the external engine.
///
/// `path` is slash-delimited and rooted at the fixed top segment.
/// `weight` is the classifier's confidence score, not guaranteed normalized;
/// the engine returns entries in non-increasing weight order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawCategory {
    pub path: String,
    pub weight: f64,
}

impl RawCategory {
    pub fn new(path: impl Into<String>, weight: f64) -> Self {
        Self {
            path: path.into(),
            weight,
        }
    }
}

/// Ordered classifier output for one document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub categories: Vec<RawCategory>,
}

/// A category after canonicalization: the full path replaced by a short
/// presentable label, weight passed through unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanedCategory {
    pub category: String,
    pub weight: f64,
}

/// The unit of deduplicated output.
///
/// A group is keyed by the first [`GROUP_DEPTH`] segments of the raw path
/// and anchored on the first entry that lands in it: because the input
/// stream is weight-sorted descending, that entry carries the group's
/// highest weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputGroup {
    /// Group identity: the first three path segments joined by '/'.
    pub name: String,
    /// Presentable label, taken from the anchoring entry's canonical form.
    pub category: String,
    /// Weight of the anchoring (first-seen, highest) entry.
    pub weight: f64,
    /// Every raw path that collapsed into this group, in encounter order.
    pub full_categories: Vec<String>,
}

impl OutputGroup {
    /// Group identity for a raw path: root plus the top two levels.
    ///
    /// Paths shorter than the group depth use all of their segments.
    pub fn name_for(path: &str) -> String {
        path.split('/').take(GROUP_DEPTH).collect::<Vec<_>>().join("/")
    }

    /// Create a group anchored on its first member.
    pub fn anchor(name: String, category: String, weight: f64, path: String) -> Self {
        Self {
            name,
            category,
            weight,
            full_categories: vec![path],
        }
    }

    /// A new version of this group with `path` appended to the audit trail.
    /// The anchor weight and category label are never altered.
    pub fn with_member(&self, path: String) -> Self {
        let mut full_categories = self.full_categories.clone();
        full_categories.push(path);
        Self {
            name: self.name.clone(),
            category: self.category.clone(),
            weight: self.weight,
            full_categories,
        }
    }
}
