//! Validates neighborhood normalization and canonical pattern enumeration

use autotile::TilesetError;
use autotile::pattern::{
    CANONICAL_PATTERN_COUNT, Direction, Neighborhood, canonical_neighborhoods,
};
use std::collections::HashSet;

#[test]
fn test_all_raw_encodings_collapse_to_canonical_set() {
    let keys: HashSet<u8> = (0..=u8::MAX)
        .map(|raw| Neighborhood::from_bits(raw).bits())
        .collect();

    assert_eq!(
        keys.len(),
        CANONICAL_PATTERN_COUNT,
        "256 raw encodings should collapse to exactly 47 canonical patterns"
    );
}

#[test]
fn test_normalization_is_idempotent() {
    for raw in 0..=u8::MAX {
        let normalized = Neighborhood::from_bits(raw);
        let renormalized = Neighborhood::from_bits(normalized.bits());
        assert_eq!(
            normalized, renormalized,
            "normalizing a canonical pattern must be a no-op"
        );
    }
}

#[test]
fn test_enumeration_is_ordered_and_deterministic() {
    let patterns = canonical_neighborhoods();
    assert_eq!(patterns.len(), CANONICAL_PATTERN_COUNT);

    for pair in patterns.windows(2) {
        let (first, second) = (pair[0], pair[1]);
        let first_key = (first.neighbor_count(), first.bits());
        let second_key = (second.neighbor_count(), second.bits());
        assert!(
            first_key < second_key,
            "patterns must be strictly ordered by neighbor count, then key"
        );
    }

    assert_eq!(
        patterns,
        canonical_neighborhoods(),
        "repeated enumeration must produce the identical sequence"
    );
}

#[test]
fn test_diagonal_without_orthogonals_is_cleared() {
    // An upper-left neighbor with neither the upper nor left neighbor present
    // renders identically to empty space.
    let lone_diagonal = Neighborhood::from_bits(0b1000_0000);
    assert_eq!(lone_diagonal, Neighborhood::from_bits(0));
    assert!(!lone_diagonal.contains(Direction::UpperLeft));
}

#[test]
fn test_diagonal_with_single_orthogonal_is_cleared() {
    // upper + upper-left, no left: collapses to upper alone
    let diagonal_and_upper = Neighborhood::from_bits(0b1100_0000);
    let upper_only = Neighborhood::from_bits(0b0100_0000);
    assert_eq!(diagonal_and_upper, upper_only);
}

#[test]
fn test_diagonal_with_both_orthogonals_survives() {
    let full_corner = Neighborhood::from_bits(0b1101_0000);
    assert!(full_corner.contains(Direction::UpperLeft));
    assert!(full_corner.contains(Direction::Upper));
    assert!(full_corner.contains(Direction::Left));
    assert_eq!(full_corner.neighbor_count(), 3);
}

#[test]
fn test_from_flags_matches_bit_order() {
    // upper-left, upper, left set: the diagonal has both orthogonals and
    // survives normalization
    let flags = [true, true, false, true, false, false, false, false];
    let neighborhood = Neighborhood::from_flags(&flags).unwrap();
    assert_eq!(neighborhood.bits(), 0b1101_0000);
}

#[test]
fn test_from_flags_rejects_wrong_length() {
    let short = Neighborhood::from_flags(&[true; 7]);
    assert!(matches!(
        short,
        Err(TilesetError::PatternLength { actual: 7 })
    ));

    let long = Neighborhood::from_flags(&[false; 9]);
    assert!(matches!(long, Err(TilesetError::PatternLength { actual: 9 })));
}

#[test]
fn test_neighbor_count_reflects_canonical_flags() {
    assert_eq!(Neighborhood::from_bits(0).neighbor_count(), 0);
    assert_eq!(Neighborhood::from_bits(0xFF).neighbor_count(), 8);
    // The lone diagonal is cleared before counting
    assert_eq!(Neighborhood::from_bits(0b1000_0000).neighbor_count(), 0);
}
