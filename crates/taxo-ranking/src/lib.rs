//! # taxo-ranking
//!
//! Post-processing pipeline over raw classifier output:
//! canonicalize (1:1) → filter/cutoff (1:0-or-1) → group/dedup/rank
//! (N:1 collapsing, bounded).
//!
//! The pipeline is a synchronous pure transformation; the only external
//! collaborator is the injected [`taxo_core::IClassifierEngine`].

pub mod canonicalize;
pub mod engine;
pub mod filter;
pub mod grouping;

pub use canonicalize::Canonicalizer;
pub use engine::RankingEngine;
pub use filter::{FilterVerdict, PolicyFilter};
pub use grouping::GroupAccumulator;
