//! Tile pixel storage and constant tiles
//!
//! A tile is a plain RGBA image buffer. Generated tiles (placeholders and
//! row padding) depend only on the tile dimensions.

use crate::io::configuration::{
    CROSS_THICKNESS_DIVISOR, PADDING_PIXEL, PLACEHOLDER_CROSS, PLACEHOLDER_FILL,
};
use image::{Rgba, RgbaImage};

/// One glyph of a tile sheet
pub type Tile = RgbaImage;

/// Width and height of every tile in a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileSize {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl TileSize {
    /// A square tile size
    pub const fn square(edge: u32) -> Self {
        Self {
            width: edge,
            height: edge,
        }
    }

    /// Whether the tile has no pixels
    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Dimensions of a tile buffer
    pub fn of(tile: &Tile) -> Self {
        Self {
            width: tile.width(),
            height: tile.height(),
        }
    }
}

/// Solid red tile with a black corner-to-corner cross
///
/// Marks glyphs that have no 3.4.3 counterpart. Each diagonal is one pixel
/// thick per 16 pixels of the shorter edge, never thinner than one pixel,
/// measured across the tile's longer axis.
pub fn placeholder(size: TileSize) -> Tile {
    let thickness = i64::from((size.width.min(size.height) / CROSS_THICKNESS_DIVISOR).max(1));
    let right = i64::from(size.width.saturating_sub(1));
    let bottom = i64::from(size.height.saturating_sub(1));
    // Offsets from each diagonal come scaled by the longer edge; a band from
    // -thickness/2 up to the rest of thickness covers exactly that many pixels
    let scale = right.max(bottom).max(1);
    let low = -(thickness / 2) * scale;
    let high = (thickness - thickness / 2) * scale;
    let on_line = |offset: i64| (low..high).contains(&offset);

    RgbaImage::from_fn(size.width, size.height, |px, py| {
        let x = i64::from(px);
        let y = i64::from(py);
        let main = x * bottom - y * right;
        let anti = x * bottom + y * right - right * bottom;
        if on_line(main) || on_line(anti) {
            Rgba(PLACEHOLDER_CROSS)
        } else {
            Rgba(PLACEHOLDER_FILL)
        }
    })
}

/// Fully transparent tile used to fill out the last row of a sheet
pub fn padding(size: TileSize) -> Tile {
    RgbaImage::from_pixel(size.width, size.height, Rgba(PADDING_PIXEL))
}
