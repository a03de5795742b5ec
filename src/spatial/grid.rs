//! Tile grid splitting and joining
//!
//! Splits a sheet image into row-major tiles and renders a tile sequence back
//! into a sheet image.

use crate::io::error::{Result, format_error};
use crate::spatial::tiles::{Tile, TileSize, padding};
use image::{RgbaImage, imageops};

/// Ordered tiles of one sheet, all of the same size
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGrid {
    tiles: Vec<Tile>,
    tile_size: TileSize,
    tiles_per_row: u32,
}

impl TileGrid {
    /// Build a grid from tiles that all share `tile_size`
    ///
    /// # Errors
    ///
    /// Returns a format error if `tiles_per_row` is zero or any tile has
    /// different dimensions
    pub fn from_tiles(tiles: Vec<Tile>, tile_size: TileSize, tiles_per_row: u32) -> Result<Self> {
        if tiles_per_row == 0 {
            return Err(format_error("tiles per row", &"at least 1", &0));
        }
        if let Some(odd) = tiles.iter().find(|tile| TileSize::of(tile) != tile_size) {
            return Err(format_error(
                "tile size",
                &format!("{}x{}", tile_size.width, tile_size.height),
                &format!("{}x{}", odd.width(), odd.height()),
            ));
        }
        Ok(Self {
            tiles,
            tile_size,
            tiles_per_row,
        })
    }

    /// Partition a sheet into tiles, left-to-right then top-to-bottom
    ///
    /// `tile_width` defaults to the image width divided by `tiles_per_row`,
    /// `tile_height` defaults to the tile width.
    ///
    /// # Errors
    ///
    /// Returns a format error if the tile size is zero or the image dimensions
    /// are not exact multiples of it
    pub fn load(
        image: &RgbaImage,
        tile_width: Option<u32>,
        tile_height: Option<u32>,
        tiles_per_row: u32,
    ) -> Result<Self> {
        if tiles_per_row == 0 {
            return Err(format_error("tiles per row", &"at least 1", &0));
        }
        let width = tile_width.unwrap_or(image.width() / tiles_per_row);
        let size = TileSize {
            width,
            height: tile_height.unwrap_or(width),
        };

        if size.is_empty() {
            return Err(format_error(
                "tile size",
                &"at least 1x1 pixels",
                &format!("{}x{}", size.width, size.height),
            ));
        }
        if image.width() % size.width != 0 {
            return Err(format_error(
                "image width",
                &format!("a multiple of the tile width {}", size.width),
                &image.width(),
            ));
        }
        if image.height() % size.height != 0 {
            return Err(format_error(
                "image height",
                &format!("a multiple of the tile height {}", size.height),
                &image.height(),
            ));
        }

        let columns = image.width() / size.width;
        let rows = image.height() / size.height;
        let mut tiles = Vec::with_capacity((columns * rows) as usize);
        for row in 0..rows {
            for column in 0..columns {
                let tile = imageops::crop_imm(
                    image,
                    column * size.width,
                    row * size.height,
                    size.width,
                    size.height,
                )
                .to_image();
                tiles.push(tile);
            }
        }

        log::debug!(
            "split {}x{} sheet into {} tiles of {}x{} ({columns} per row)",
            image.width(),
            image.height(),
            tiles.len(),
            size.width,
            size.height
        );

        Ok(Self {
            tiles,
            tile_size: size,
            tiles_per_row: columns,
        })
    }

    /// Join the tiles into one sheet wrapping every `tiles_per_row` tiles
    ///
    /// The final row is completed with transparent padding tiles.
    ///
    /// # Errors
    ///
    /// Returns a format error if `tiles_per_row` is zero or the sheet would
    /// exceed the image size limits
    pub fn render(&self, tiles_per_row: u32) -> Result<RgbaImage> {
        if tiles_per_row == 0 {
            return Err(format_error("tiles per row", &"at least 1", &0));
        }
        let count = u32::try_from(self.tiles.len())
            .map_err(|error| format_error("tile count", &"at most u32::MAX", &error))?;
        let rows = count.div_ceil(tiles_per_row);
        let width = tiles_per_row
            .checked_mul(self.tile_size.width)
            .ok_or_else(|| format_error("sheet width", &"at most u32::MAX", &"overflow"))?;
        let height = rows
            .checked_mul(self.tile_size.height)
            .ok_or_else(|| format_error("sheet height", &"at most u32::MAX", &"overflow"))?;

        let mut sheet = RgbaImage::new(width, height);
        let blank = padding(self.tile_size);
        let slots = (rows * tiles_per_row) as usize;
        for slot in 0..slots {
            let tile = self.tiles.get(slot).unwrap_or(&blank);
            let position = slot as u32;
            let x = (position % tiles_per_row) * self.tile_size.width;
            let y = (position / tiles_per_row) * self.tile_size.height;
            imageops::replace(&mut sheet, tile, i64::from(x), i64::from(y));
        }

        Ok(sheet)
    }

    /// All tiles in sheet order
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Take ownership of the tiles
    pub fn into_tiles(self) -> Vec<Tile> {
        self.tiles
    }

    /// Tile at `index`, if present
    pub fn get(&self, index: usize) -> Option<&Tile> {
        self.tiles.get(index)
    }

    /// Number of tiles
    pub const fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the grid holds no tiles
    pub const fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Dimensions shared by every tile
    pub const fn tile_size(&self) -> TileSize {
        self.tile_size
    }

    /// Columns of the sheet the grid was loaded from
    pub const fn tiles_per_row(&self) -> u32 {
        self.tiles_per_row
    }
}
