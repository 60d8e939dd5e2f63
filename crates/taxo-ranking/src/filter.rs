//! Policy filter: weight cutoff and path-prefix blacklist.

use taxo_core::category::RawCategory;

/// What to do with one entry of the weight-descending candidate stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterVerdict {
    /// Entry survives into grouping.
    Keep,
    /// Entry is excluded; the stream continues.
    Drop,
    /// Entry fell below the cutoff; because input is weight-sorted, every
    /// later entry is below it too and the stream ends here.
    Halt,
}

/// Per-call view over the blacklist and cutoff.
///
/// Blacklisted entries are removed from the candidate stream before grouping.
/// Earlier revisions of this pipeline checked the blacklist without
/// enforcing it; the drop here is deliberate policy.
pub struct PolicyFilter<'a> {
    blacklist: &'a [String],
    cutoff: f64,
}

impl<'a> PolicyFilter<'a> {
    pub fn new(blacklist: &'a [String], cutoff: f64) -> Self {
        Self { blacklist, cutoff }
    }

    pub fn evaluate(&self, raw: &RawCategory) -> FilterVerdict {
        if raw.weight < self.cutoff {
            return FilterVerdict::Halt;
        }
        if self.blacklist.iter().any(|prefix| raw.path.starts_with(prefix.as_str())) {
            return FilterVerdict::Drop;
        }
        FilterVerdict::Keep
    }
}
