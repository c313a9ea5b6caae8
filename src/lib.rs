//! Autotile sheet inference from a pair of hand-drawn corner sprites
//!
//! The system splits a two-sprite source image (convex style left, concave
//! style right) into eighteen named fragments around a user-chosen center
//! box, resolves which fragment fills each of a tile's nine sub-regions for
//! every canonical 8-neighbor adjacency pattern, and packs the 47 resulting
//! tiles into a fixed 6x8 sheet ready for a 2D tile renderer.

#![forbid(unsafe_code)]

/// Tile assembly from resolved fragments and sheet packing
pub mod compose;
/// Source sprite decomposition into named fragments
pub mod fragments;
/// Tileset generation orchestration and caching
pub mod generator;
/// Input/output operations and error handling
pub mod io;
/// Neighbor adjacency patterns and their canonical enumeration
pub mod pattern;

pub use generator::TilesetGenerator;
pub use io::error::{Result, TilesetError};
