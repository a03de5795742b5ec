//! Per-pixel derivation of new tiles from existing ones

use crate::io::configuration::{LUMA_BLUE, LUMA_GREEN, LUMA_RED};
use crate::io::error::{Result, index_error};
use crate::spatial::tiles::Tile;
use image::Rgba;

/// Number of scroll appearances 3.6.0 adds on top of the 3.4.3 ones
pub const EXTRA_SCROLL_APPEARANCES: usize = 16;

/// BT.601 luma of a pixel, rounded to the nearest integer
pub fn luma(pixel: Rgba<u8>) -> u8 {
    let [r, g, b, _] = pixel.0;
    let weighted = LUMA_RED * u32::from(r) + LUMA_GREEN * u32::from(g) + LUMA_BLUE * u32::from(b);
    // Weights sum to 1000, so the result always fits
    ((weighted + 500) / 1000).min(255) as u8
}

/// Grayscale statue of a monster drawn over `floor`
///
/// Pixels equal to the floor pixel at the same position are background and
/// copied from the floor; every other pixel becomes its luma, keeping alpha.
/// Both tiles are expected to share dimensions; pixels of `monster` outside
/// the floor are treated as foreground.
pub fn derive_statue(monster: &Tile, floor: &Tile) -> Tile {
    let mut statue = monster.clone();
    for (x, y, pixel) in statue.enumerate_pixels_mut() {
        let background = floor.get_pixel_checked(x, y).copied();
        *pixel = match background {
            Some(floor_pixel) if floor_pixel == *pixel => floor_pixel,
            _ => {
                let gray = luma(*pixel);
                let [.., alpha] = pixel.0;
                Rgba([gray, gray, gray, alpha])
            }
        };
    }
    statue
}

/// Floor tile at half intensity
///
/// Each color channel is shifted right by one bit; alpha is unchanged.
pub fn derive_darkened_floor(floor: &Tile) -> Tile {
    let mut darkened = floor.clone();
    for pixel in darkened.pixels_mut() {
        let [r, g, b, a] = pixel.0;
        *pixel = Rgba([r >> 1, g >> 1, b >> 1, a]);
    }
    darkened
}

/// The 3.6.0 scroll appearances: the existing ones followed by the first
/// sixteen of them again
///
/// # Errors
///
/// Returns an index error if fewer than sixteen appearances are given
pub fn derive_scroll_appearances(existing: &[Tile]) -> Result<Vec<Tile>> {
    let repeated = existing
        .get(..EXTRA_SCROLL_APPEARANCES)
        .ok_or_else(|| {
            index_error(
                "scroll appearance repetition",
                EXTRA_SCROLL_APPEARANCES - 1,
                existing.len(),
            )
        })?;

    let mut appearances = Vec::with_capacity(existing.len() + repeated.len());
    appearances.extend_from_slice(existing);
    appearances.extend_from_slice(repeated);
    Ok(appearances)
}
