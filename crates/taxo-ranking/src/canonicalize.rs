//! Path canonicalizer: raw taxonomy path → short presentable label.
//!
//! Scans the rewrite table in order; the first rule whose prefix and suffix
//! both match wins, and the rule's suffix text becomes the whole label.
//! With no match, the fixed root prefix is stripped.

use taxo_core::category::{CleanedCategory, RawCategory};
use taxo_core::config::PartialRule;
use taxo_core::constants::ROOT_PREFIX;

/// Stateless label rewriter over an immutable rule table.
pub struct Canonicalizer {
    partials: Vec<PartialRule>,
}

impl Canonicalizer {
    pub fn new(partials: Vec<PartialRule>) -> Self {
        Self { partials }
    }

    /// Canonical label for one path. Total: a path with no matching rule and
    /// no root prefix is already canonical and passes through unchanged.
    pub fn canonical_label(&self, path: &str) -> String {
        for rule in &self.partials {
            // The rule's own suffix text is the replacement label. This is
            // the documented contract of the rewrite table, not a substring
            // extraction from the path.
            if path.starts_with(&rule.prefix) && path.ends_with(&rule.suffix) {
                return rule.suffix.clone();
            }
        }
        path.strip_prefix(ROOT_PREFIX).unwrap_or(path).to_string()
    }

    /// Canonicalize one raw category. Weight passes through unchanged.
    pub fn clean(&self, raw: &RawCategory) -> CleanedCategory {
        CleanedCategory {
            category: self.canonical_label(&raw.path),
            weight: raw.weight,
        }
    }
}
