//! Source sprite decomposition into named fragments

/// The eighteen named crops and their closed key space
pub mod library;
/// Source image validation and the user-chosen center box
pub mod source;

pub use library::{Band, FragmentLibrary, Lane, Style};
pub use source::{CenterBox, SourceImage};
