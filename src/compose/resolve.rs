//! Per-pattern resolution of a tile's nine sub-region fragments
//!
//! The center is always the tile's own convex art. Edge middles follow their
//! orthogonal neighbor flag directly. Corners need inference: the right
//! fragment depends on the diagonal flag and both adjacent orthogonal flags,
//! and three of the five outcomes stretch another fragment to the corner's
//! native size.

use crate::fragments::{Band, FragmentLibrary, Lane, Style};
use crate::io::configuration::RESIZE_FILTER;
use crate::pattern::{Direction, Neighborhood};
use image::{DynamicImage, GenericImageView};

/// One of the four corner cells of a tile's 3x3 decomposition
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Corner {
    /// Top-left cell
    UpperLeft,
    /// Top-right cell
    UpperRight,
    /// Bottom-left cell
    LowerLeft,
    /// Bottom-right cell
    LowerRight,
}

impl Corner {
    /// Band this corner sits in
    pub const fn band(self) -> Band {
        match self {
            Self::UpperLeft | Self::UpperRight => Band::Upper,
            Self::LowerLeft | Self::LowerRight => Band::Lower,
        }
    }

    /// Lane this corner sits in
    pub const fn lane(self) -> Lane {
        match self {
            Self::UpperLeft | Self::LowerLeft => Lane::Left,
            Self::UpperRight | Self::LowerRight => Lane::Right,
        }
    }

    /// The diagonal neighbor position touching this corner
    pub const fn diagonal(self) -> Direction {
        match self {
            Self::UpperLeft => Direction::UpperLeft,
            Self::UpperRight => Direction::UpperRight,
            Self::LowerLeft => Direction::LowerLeft,
            Self::LowerRight => Direction::LowerRight,
        }
    }

    /// The orthogonal neighbor position sharing this corner's band
    pub const fn vertical(self) -> Direction {
        match self {
            Self::UpperLeft | Self::UpperRight => Direction::Upper,
            Self::LowerLeft | Self::LowerRight => Direction::Lower,
        }
    }

    /// The orthogonal neighbor position sharing this corner's lane
    pub const fn horizontal(self) -> Direction {
        match self {
            Self::UpperLeft | Self::LowerLeft => Direction::Left,
            Self::UpperRight | Self::LowerRight => Direction::Right,
        }
    }
}

/// The nine resolved fragments of one tile in band-major order
pub struct TileParts {
    /// Upper, middle, and lower bands, each holding its left, middle, and
    /// right fragment
    pub rows: [[DynamicImage; 3]; 3],
}

/// Resolve all nine sub-region fragments for a neighbor pattern
pub fn resolve_parts(library: &FragmentLibrary, neighborhood: Neighborhood) -> TileParts {
    let edge = |direction: Direction, band: Band, lane: Lane| {
        let style = if neighborhood.contains(direction) {
            Style::Concave
        } else {
            Style::Convex
        };
        library.get(style, band, lane).clone()
    };
    TileParts {
        rows: [
            [
                resolve_corner(library, neighborhood, Corner::UpperLeft),
                edge(Direction::Upper, Band::Upper, Lane::Middle),
                resolve_corner(library, neighborhood, Corner::UpperRight),
            ],
            [
                edge(Direction::Left, Band::Middle, Lane::Left),
                library.get(Style::Convex, Band::Middle, Lane::Middle).clone(),
                edge(Direction::Right, Band::Middle, Lane::Right),
            ],
            [
                resolve_corner(library, neighborhood, Corner::LowerLeft),
                edge(Direction::Lower, Band::Lower, Lane::Middle),
                resolve_corner(library, neighborhood, Corner::LowerRight),
            ],
        ],
    }
}

/// Pick the artwork for one corner of the tile being generated
///
/// Decision order, first match wins:
/// 1. diagonal clear, both orthogonals set: the concave corner fragment;
/// 2. both orthogonals set (diagonal filled): the concave center stretched
///    over the corner, since no diagonal-specific art exists;
/// 3. only the vertical orthogonal set: the convex middle-band fragment of
///    this corner's lane, stretched;
/// 4. only the horizontal orthogonal set: the convex middle-lane fragment of
///    this corner's band, stretched;
/// 5. no orthogonal neighbors: the convex corner fragment, unresized.
pub fn resolve_corner(
    library: &FragmentLibrary,
    neighborhood: Neighborhood,
    corner: Corner,
) -> DynamicImage {
    let vertical = neighborhood.contains(corner.vertical());
    let horizontal = neighborhood.contains(corner.horizontal());

    if vertical && horizontal {
        if !neighborhood.contains(corner.diagonal()) {
            return library
                .get(Style::Concave, corner.band(), corner.lane())
                .clone();
        }
        let center = library.get(Style::Concave, Band::Middle, Lane::Middle);
        return resized_to_corner(library, corner, center);
    }
    if vertical {
        let edge = library.get(Style::Convex, Band::Middle, corner.lane());
        return resized_to_corner(library, corner, edge);
    }
    if horizontal {
        let edge = library.get(Style::Convex, corner.band(), Lane::Middle);
        return resized_to_corner(library, corner, edge);
    }
    library
        .get(Style::Convex, corner.band(), corner.lane())
        .clone()
}

// The resize target is always the corner's own native size, so the
// asymmetric-box fragment dimensions survive compositing.
fn resized_to_corner(
    library: &FragmentLibrary,
    corner: Corner,
    fragment: &DynamicImage,
) -> DynamicImage {
    let (width, height) = library
        .get(Style::Concave, corner.band(), corner.lane())
        .dimensions();
    fragment.resize_exact(width, height, RESIZE_FILTER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corner_direction_mapping() {
        assert_eq!(Corner::UpperLeft.diagonal(), Direction::UpperLeft);
        assert_eq!(Corner::UpperLeft.vertical(), Direction::Upper);
        assert_eq!(Corner::UpperLeft.horizontal(), Direction::Left);

        assert_eq!(Corner::LowerRight.diagonal(), Direction::LowerRight);
        assert_eq!(Corner::LowerRight.vertical(), Direction::Lower);
        assert_eq!(Corner::LowerRight.horizontal(), Direction::Right);
    }

    #[test]
    fn test_corner_band_and_lane() {
        assert_eq!(Corner::UpperRight.band(), Band::Upper);
        assert_eq!(Corner::UpperRight.lane(), Lane::Right);
        assert_eq!(Corner::LowerLeft.band(), Band::Lower);
        assert_eq!(Corner::LowerLeft.lane(), Lane::Left);
    }
}
