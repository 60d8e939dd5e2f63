/// Taxo system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Name of the fixed root segment every taxonomy path starts from.
pub const ROOT_CATEGORY: &str = "Top";

/// Root segment plus its separator, stripped when no rewrite rule applies.
pub const ROOT_PREFIX: &str = "Top/";

/// Number of leading path segments that form an output group's identity.
pub const GROUP_DEPTH: usize = 3;
