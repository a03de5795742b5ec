//! Unit tests mirroring the `src/` tree, with shared tile fixtures

mod io;
mod spatial;

use image::Rgba;
use tilesheet360::spatial::{Tile, TileGrid, TileSize};

/// Single-color tile
pub fn solid(size: TileSize, rgba: [u8; 4]) -> Tile {
    Tile::from_pixel(size.width, size.height, Rgba(rgba))
}

/// Color that encodes a tile number in its red and green channels
pub const fn numbered_color(index: usize) -> [u8; 4] {
    [(index & 0xFF) as u8, ((index >> 8) & 0xFF) as u8, 0x80, 0xFF]
}

/// Tile number encoded by `numbered_color`, read from the top-left pixel
pub fn tile_number(tile: &Tile) -> usize {
    let [r, g, _, _] = tile.get_pixel(0, 0).0;
    usize::from(r) | (usize::from(g) << 8)
}

/// Grid of `count` distinct solid tiles, tile `i` colored `numbered_color(i)`
pub fn numbered_grid(count: usize, size: TileSize, tiles_per_row: u32) -> TileGrid {
    let tiles = (0..count).map(|i| solid(size, numbered_color(i))).collect();
    TileGrid::from_tiles(tiles, size, tiles_per_row).unwrap()
}
