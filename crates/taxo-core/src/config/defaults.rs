//! Default values shared between config structs.

/// Entries with weight strictly below this are cut off.
pub const DEFAULT_CUTOFF_SIMILARITY: f64 = 0.0;

/// Raw results requested per final result slot. Assumes at most one in
/// seven raw entries survives filtering and deduplication.
pub const DEFAULT_OVERFETCH_FACTOR: usize = 7;

/// Minimum documents per category when building a fresh model.
pub const DEFAULT_MIN_CATEGORY_DOCS: usize = 100;
