//! Input/output operations and error handling

/// Command-line interface and batch file processing
pub mod cli;
/// Generation constants and output settings
pub mod configuration;
/// Error types and the crate-wide result alias
pub mod error;
/// Source loading and sheet export
pub mod image;
/// Batch progress reporting
pub mod progress;
