//! Neighbor adjacency patterns and their canonical enumeration

/// Deduplicated, deterministically ordered set of all canonical patterns
pub mod enumeration;
/// Normalized 8-neighbor adjacency descriptor
pub mod neighborhood;

pub use enumeration::{CANONICAL_PATTERN_COUNT, canonical_neighborhoods};
pub use neighborhood::{Direction, Neighborhood};
