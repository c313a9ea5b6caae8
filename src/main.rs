//! CLI entry point for the autotile sheet inference tool

use autotile::io::cli::{Cli, FileProcessor};
use clap::Parser;

fn main() -> autotile::Result<()> {
    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli)?;
    processor.process()
}
