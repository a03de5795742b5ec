//! Command-line interface for converting one or more tile sheets

use crate::io::configuration::{
    ConversionOptions, OUTPUT_EXTENSION, OUTPUT_SUFFIX, StatueMode,
};
use crate::io::error::{ConversionError, Result, invalid_parameter};
use crate::io::image::{read_sheet, write_sheet};
use crate::io::progress::ProgressManager;
use crate::spatial::TileGrid;
use crate::transform::{InsertionPlan, convert};
use clap::{ArgAction, Parser};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "tilesheet360")]
#[command(
    author,
    version,
    about = "Convert NetHack 3.4.3 tile sets for use with 3.6.0",
    after_help = "\
If --tile-width is not given, it is the image width divided by --tiles-per-row
(40 when --tiles-per-row is not given either).
Without --tiles-per-row, the output has as many columns as the input.
If --tile-height is not given, it equals the tile width.
Without --no-statues, statue glyphs are grayscale copies of the monster glyphs.
Images must be in BMP format.
Without --output, each image is written to <input-name>-360.bmp."
)]
/// Command-line arguments for the tile sheet converter
pub struct Cli {
    /// Tile sets for NetHack 3.4.3
    #[arg(value_name = "IMAGE", required = true)]
    pub images: Vec<PathBuf>,

    /// Width of a single tile in pixels
    #[arg(short = 'x', long)]
    pub tile_width: Option<u32>,

    /// Height of a single tile in pixels
    #[arg(short = 'y', long)]
    pub tile_height: Option<u32>,

    /// Tiles per row of the input and output sheets
    #[arg(short = 'n', long)]
    pub tiles_per_row: Option<u32>,

    /// Do not derive statues from monsters; repeat the 3.4.3 statue glyph
    #[arg(short = 's', long)]
    pub no_statues: bool,

    /// Name of the output image (only with a single input)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Conversion options selected on the command line
    pub const fn options(&self) -> ConversionOptions {
        ConversionOptions {
            tile_width: self.tile_width,
            tile_height: self.tile_height,
            tiles_per_row: self.tiles_per_row,
            statues: if self.no_statues {
                StatueMode::Generic
            } else {
                StatueMode::Derived
            },
        }
    }

    /// Reject option combinations that cannot be honored
    ///
    /// # Errors
    ///
    /// Returns an error if `--output` is combined with several images, or a
    /// size option is zero
    pub fn validate(&self) -> Result<()> {
        if self.output.is_some() && self.images.len() > 1 {
            return Err(invalid_parameter(
                "output",
                &self.images.len(),
                &"cannot be given with more than one image",
            ));
        }
        if self.tiles_per_row == Some(0) {
            return Err(invalid_parameter(
                "tiles-per-row",
                &0,
                &"must be at least 1",
            ));
        }
        if self.tile_width == Some(0) {
            return Err(invalid_parameter("tile-width", &0, &"must be at least 1"));
        }
        if self.tile_height == Some(0) {
            return Err(invalid_parameter("tile-height", &0, &"must be at least 1"));
        }
        Ok(())
    }
}

/// Converts every requested sheet, continuing past failed ones
pub struct FileProcessor {
    cli: Cli,
    plan: InsertionPlan,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            plan: InsertionPlan::nethack_360(),
            progress_manager,
        }
    }

    /// Convert all sheets named on the command line
    ///
    /// # Errors
    ///
    /// Returns the sheet's own error for a single-image run, or a batch error
    /// counting the failed sheets when several images were given
    pub fn process(&mut self) -> Result<()> {
        self.cli.validate()?;

        let images = self.cli.images.clone();
        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(images.len());
        }

        let mut failures = Vec::new();
        for input in &images {
            if let Some(ref pm) = self.progress_manager {
                pm.start_file(input);
            }

            let output = self.output_path(input);
            let result = self.process_file(input, &output);
            if let Err(ref error) = result {
                log::error!("{}: {error}", input.display());
            }
            if let Some(ref pm) = self.progress_manager {
                pm.complete_file();
            }
            if let Err(error) = result {
                failures.push(error);
            }
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish(failures.len());
        }

        match (images.len(), failures.pop()) {
            (_, None) => Ok(()),
            (1, Some(error)) => Err(error),
            (total, Some(_)) => Err(ConversionError::Batch {
                failed: failures.len() + 1,
                total,
            }),
        }
    }

    /// Convert one sheet from `input` into `output`
    ///
    /// Nothing is written unless the whole conversion succeeded.
    ///
    /// # Errors
    ///
    /// Returns an error if the sheet cannot be read, does not fit the 3.4.3
    /// layout, or the result cannot be written
    pub fn process_file(&self, input: &Path, output: &Path) -> Result<()> {
        let start_time = Instant::now();
        let options = self.cli.options();

        let sheet = read_sheet(input)?;
        let grid = TileGrid::load(
            &sheet.pixels,
            options.tile_width,
            options.tile_height,
            options.source_columns(),
        )?;
        let converted = convert(&grid, &self.plan, options.statues)?;
        let columns = options
            .tiles_per_row
            .unwrap_or_else(|| converted.tiles_per_row());
        let pixels = converted.render(columns)?;
        write_sheet(output, &pixels, sheet.has_alpha)?;

        log::info!(
            "{} -> {} ({} tiles, {:.2?})",
            input.display(),
            output.display(),
            converted.len(),
            start_time.elapsed()
        );
        Ok(())
    }

    fn output_path(&self, input: &Path) -> PathBuf {
        self.cli
            .output
            .clone()
            .unwrap_or_else(|| Self::get_output_path(input))
    }

    /// Default output path: `<stem>-360.bmp` next to the input
    ///
    /// The stem is the file name up to its last dot, so `.bmp` becomes
    /// `-360.bmp`.
    pub fn get_output_path(input_path: &Path) -> PathBuf {
        let name = input_path.file_name().unwrap_or_default().to_string_lossy();
        let stem = name.rsplit_once('.').map_or(&*name, |(stem, _)| stem);
        let output_name = format!("{stem}{OUTPUT_SUFFIX}.{OUTPUT_EXTENSION}");

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}
