//! Decomposition of the source sprites into eighteen named fragments
//!
//! The center box splits each sprite into a 3x3 grid of crops. Band
//! boundaries run `(0, y1), (y1, y2), (y2, h)` and lane boundaries
//! `(0, x1), (x1, x2), (x2, w/2)`, applied independently inside each sprite
//! half. The eighteen keys form a closed space, so lookups are total
//! functions with no runtime key errors.

use super::source::{CenterBox, SourceImage};
use image::DynamicImage;

/// Which of the two source sprites a fragment is cut from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Style {
    /// Isolated-corner sprite on the left half
    Convex,
    /// Fully-surrounded-corner sprite on the right half
    Concave,
}

/// Vertical third of a sprite
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Band {
    /// Rows above the center box
    Upper,
    /// Rows spanned by the center box
    Middle,
    /// Rows below the center box
    Lower,
}

/// Horizontal third of a sprite
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lane {
    /// Columns left of the center box
    Left,
    /// Columns spanned by the center box
    Middle,
    /// Columns right of the center box
    Right,
}

struct BandFragments {
    left: DynamicImage,
    middle: DynamicImage,
    right: DynamicImage,
}

struct SpriteFragments {
    upper: BandFragments,
    middle: BandFragments,
    lower: BandFragments,
}

/// The eighteen named crops cut from the convex and concave sprites
///
/// Rebuilt wholesale whenever the source image or the center box changes;
/// eighteen crops are cheap enough that no incremental update is needed.
pub struct FragmentLibrary {
    convex: SpriteFragments,
    concave: SpriteFragments,
}

impl FragmentLibrary {
    /// Cut all eighteen fragments out of a source sprite pair
    pub fn build(source: &SourceImage, center: CenterBox) -> Self {
        Self {
            convex: cut_sprite(source, center, 0),
            concave: cut_sprite(source, center, source.sprite_width()),
        }
    }

    /// Fragment at the given style, band, and lane
    pub const fn get(&self, style: Style, band: Band, lane: Lane) -> &DynamicImage {
        let sprite = match style {
            Style::Convex => &self.convex,
            Style::Concave => &self.concave,
        };
        let fragments = match band {
            Band::Upper => &sprite.upper,
            Band::Middle => &sprite.middle,
            Band::Lower => &sprite.lower,
        };
        match lane {
            Lane::Left => &fragments.left,
            Lane::Middle => &fragments.middle,
            Lane::Right => &fragments.right,
        }
    }
}

fn cut_sprite(source: &SourceImage, center: CenterBox, x_offset: u32) -> SpriteFragments {
    let half = source.sprite_width();
    let band = |y_start: u32, y_end: u32| BandFragments {
        left: cut(source, x_offset, (0, center.x1), (y_start, y_end)),
        middle: cut(source, x_offset, (center.x1, center.x2), (y_start, y_end)),
        right: cut(source, x_offset, (center.x2, half), (y_start, y_end)),
    };
    SpriteFragments {
        upper: band(0, center.y1),
        middle: band(center.y1, center.y2),
        lower: band(center.y2, source.height()),
    }
}

// Spans outside the sprite degrade to empty crops rather than underflowing.
fn cut(source: &SourceImage, x_offset: u32, x_span: (u32, u32), y_span: (u32, u32)) -> DynamicImage {
    source.crop(
        x_offset + x_span.0,
        y_span.0,
        x_span.1.saturating_sub(x_span.0),
        y_span.1.saturating_sub(y_span.0),
    )
}
