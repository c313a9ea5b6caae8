//! Command-line interface for batch tileset inference from PNG sources

use crate::fragments::CenterBox;
use crate::generator::TilesetGenerator;
use crate::io::configuration::OUTPUT_SUFFIX;
use crate::io::error::{Result, TilesetError};
use crate::io::image::{export_sheet_as_png, load_source_image};
use crate::io::progress::ProgressManager;
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "autotile")]
#[command(
    author,
    version,
    about = "Infer a complete autotile sheet from two corner sprites"
)]
/// Command-line arguments for the tileset inference tool
pub struct Cli {
    /// Input PNG file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Center box separating each sprite's middle region from its edges
    #[arg(
        short = 'b',
        long = "box",
        num_args = 4,
        required = true,
        value_names = ["X1", "Y1", "X2", "Y2"]
    )]
    pub center_box: Vec<u32>,

    /// Output path (single-file targets only; defaults to <input>_tileset.png)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Validate the center box coordinates
    ///
    /// # Errors
    ///
    /// Returns [`TilesetError::InvalidBox`] if four coordinates were not
    /// supplied or they do not form a rectangle with `x1 <= x2` and
    /// `y1 <= y2`.
    pub fn parse_center_box(&self) -> Result<CenterBox> {
        if let &[x1, y1, x2, y2] = self.center_box.as_slice() {
            if x1 > x2 || y1 > y2 {
                return Err(TilesetError::InvalidBox {
                    reason: format!(
                        "expected x1 <= x2 and y1 <= y2, got ({x1}, {y1}, {x2}, {y2})"
                    ),
                });
            }
            Ok(CenterBox::new(x1, y1, x2, y2))
        } else {
            Err(TilesetError::InvalidBox {
                reason: format!("expected 4 coordinates, got {}", self.center_box.len()),
            })
        }
    }
}

/// Orchestrates batch inference over PNG files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    center: CenterBox,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the center box coordinates are invalid
    pub fn new(cli: Cli) -> Result<Self> {
        let center = cli.parse_center_box()?;
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Ok(Self {
            cli,
            center,
            progress_manager,
        })
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation, image decoding, or sheet export
    /// fails; the current generation request is aborted with no retry
    pub fn process(&mut self) -> Result<()> {
        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for file in &files {
            self.process_file(file)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if self.cli.target.extension().and_then(|s| s.to_str()) == Some("png") {
                if self.should_process_file(&self.cli.target) {
                    Ok(vec![self.cli.target.clone()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(TilesetError::UnsupportedTarget {
                    path: self.cli.target.clone(),
                    reason: "target file must be a PNG image",
                })
            }
        } else if self.cli.target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(&self.cli.target)? {
                let path = entry?.path();
                if path.extension().and_then(|s| s.to_str()) == Some("png")
                    && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(TilesetError::UnsupportedTarget {
                path: self.cli.target.clone(),
                reason: "target must be a PNG file or directory",
            })
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = self.output_path(input_path);
        if output_path.exists() {
            // Allow print for user feedback for progress messages
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: {} (output exists)", input_path.display());
            }
            false
        } else {
            true
        }
    }

    fn process_file(&mut self, input_path: &Path) -> Result<()> {
        if let Some(ref pm) = self.progress_manager {
            pm.start_file(input_path);
        }

        let source = load_source_image(input_path)?;
        let mut generator = TilesetGenerator::new(source, self.center);
        let tiles = generator.tile_list();
        let sheet = generator.merge_to_sheet(&tiles);

        let output_path = self.output_path(input_path);
        export_sheet_as_png(&sheet, &output_path)?;

        if let Some(ref pm) = self.progress_manager {
            pm.complete_file();
        }

        Ok(())
    }

    // An explicit --output only applies to single-file targets; directory
    // batches always derive sibling paths.
    fn output_path(&self, input_path: &Path) -> PathBuf {
        if let Some(ref output) = self.cli.output {
            if self.cli.target.is_file() {
                return output.clone();
            }
        }
        Self::derived_output_path(input_path)
    }

    fn derived_output_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let extension = input_path.extension().unwrap_or_default();
        let output_name = format!(
            "{}{}.{}",
            stem.to_string_lossy(),
            OUTPUT_SUFFIX,
            extension.to_string_lossy()
        );

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}
