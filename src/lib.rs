//! Conversion of NetHack 3.4.3 tile sheets to the 3.6.0 tile layout
//!
//! A sheet is split into tiles, monsters are reordered, new glyphs are spliced
//! in (placeholders, a darkened floor, extra scroll appearances), a statue is
//! appended for every monster, and the result is joined back into a sheet.

#![forbid(unsafe_code)]

/// Input/output operations and error handling
pub mod io;
/// Tile storage, splitting and rendering
pub mod spatial;
/// The 3.6.0 layout conversion
pub mod transform;

pub use io::error::{ConversionError, Result};
