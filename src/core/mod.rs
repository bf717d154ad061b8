// mod.rs - Core logic module

pub mod links;

// Re-export main types for convenience
pub use links::{build_links, CoordinateMode, Link, LinkFilter, LinkSet, DEFAULT_MIN_ALIGNMENT_LENGTH};
