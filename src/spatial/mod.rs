//! Tile storage and sheet layout
//!
//! This module contains the pixel-level building blocks:
//! - Tile buffers and generated constant tiles
//! - Splitting sheets into tile grids and rendering them back

/// Sheet splitting and rendering
pub mod grid;
/// Tile type and generated tiles
pub mod tiles;

pub use grid::TileGrid;
pub use tiles::{Tile, TileSize};
