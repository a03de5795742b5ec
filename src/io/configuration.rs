//! Conversion constants and runtime configuration defaults

// Sheet geometry
/// Tiles per row of a 3.4.3 sheet, used to derive the tile width
pub const DEFAULT_TILES_PER_ROW: u32 = 40;

// Colors used for generated tiles
/// Fill of placeholder tiles
pub const PLACEHOLDER_FILL: [u8; 4] = [0xFF, 0x00, 0x00, 0xFF];
/// Cross drawn over placeholder tiles
pub const PLACEHOLDER_CROSS: [u8; 4] = [0x00, 0x00, 0x00, 0xFF];
/// Padding used to complete the final row of a rendered sheet
pub const PADDING_PIXEL: [u8; 4] = [0x00, 0x00, 0x00, 0x00];

// One cross pixel of thickness per this many pixels of tile edge
/// Tile edge length covered by one pixel of cross thickness
pub const CROSS_THICKNESS_DIVISOR: u32 = 16;

// BT.601 luma weights, in thousandths
/// Red weight for statue grayscale
pub const LUMA_RED: u32 = 299;
/// Green weight for statue grayscale
pub const LUMA_GREEN: u32 = 587;
/// Blue weight for statue grayscale
pub const LUMA_BLUE: u32 = 114;

// Progress bar display settings
/// Smallest batch that gets a progress bar
pub const MIN_FILES_FOR_PROGRESS: usize = 2;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

// Output settings
/// Suffix added to output file stems
pub const OUTPUT_SUFFIX: &str = "-360";
/// Extension of output files
pub const OUTPUT_EXTENSION: &str = "bmp";
/// Most colors an opaque sheet may use to be written with an 8-bit palette
pub const MAX_PALETTE_COLORS: usize = 256;

/// Runtime options for converting one sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionOptions {
    /// Tile width in pixels; `None` derives it from the image width
    pub tile_width: Option<u32>,
    /// Tile height in pixels; `None` uses the tile width
    pub tile_height: Option<u32>,
    /// Tiles per row of the source sheet and of the output; `None` derives
    /// the tile width from [`DEFAULT_TILES_PER_ROW`] and keeps the source's
    /// column count for the output
    pub tiles_per_row: Option<u32>,
    /// How statue glyphs are produced
    pub statues: StatueMode,
}

impl ConversionOptions {
    /// Columns assumed when deriving the tile width from the sheet width
    pub fn source_columns(&self) -> u32 {
        self.tiles_per_row.unwrap_or(DEFAULT_TILES_PER_ROW)
    }
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            tile_width: None,
            tile_height: None,
            tiles_per_row: None,
            statues: StatueMode::Derived,
        }
    }
}

/// Source of the statue block appended after the 3.6.0 layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatueMode {
    /// Grayscale copy of each monster over the room floor
    #[default]
    Derived,
    /// The generic 3.4.3 statue glyph, repeated
    Generic,
}
