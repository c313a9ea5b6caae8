//! Enumeration of every distinct canonical neighbor pattern

use super::neighborhood::Neighborhood;
use std::collections::HashSet;

/// Number of distinct patterns once normalization collapses hidden diagonals
pub const CANONICAL_PATTERN_COUNT: usize = 47;

/// All canonical neighborhoods in sheet order
///
/// Every 8-bit raw encoding is normalized and deduplicated by canonical key,
/// then sorted ascending by neighbor count with ties broken by the key
/// itself. Downstream consumers map sheet cells back to patterns through this
/// ordering, so it must stay identical across runs and platforms.
pub fn canonical_neighborhoods() -> Vec<Neighborhood> {
    let mut seen = HashSet::new();
    let mut patterns: Vec<Neighborhood> = (0..=u8::MAX)
        .map(Neighborhood::from_bits)
        .filter(|neighborhood| seen.insert(neighborhood.bits()))
        .collect();

    patterns.sort_unstable_by_key(|neighborhood| {
        (neighborhood.neighbor_count(), neighborhood.bits())
    });
    patterns
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enumeration_starts_empty_and_ends_full() {
        let patterns = canonical_neighborhoods();
        assert_eq!(patterns.first().map(|n| n.bits()), Some(0));
        assert_eq!(patterns.last().map(|n| n.bits()), Some(0xFF));
    }
}
