//! Trait seams for external collaborators.

mod engine;

pub use engine::IClassifierEngine;
