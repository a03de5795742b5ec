//! BMP sheet decoding and encoding

use crate::io::configuration::MAX_PALETTE_COLORS;
use crate::io::error::{ConversionError, Result, WithContext};
use image::codecs::bmp::BmpEncoder;
use image::{DynamicImage, ExtendedColorType, ImageFormat, ImageReader, RgbaImage};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// A decoded tile sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sheet {
    /// Pixels, always expanded to RGBA
    pub pixels: RgbaImage,
    /// Whether the file carried an alpha channel
    pub has_alpha: bool,
}

/// Read a BMP tile sheet
///
/// Palettized and 24-bit sheets are expanded to RGBA with opaque alpha.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened
/// - The file is not a BMP image the decoder supports
pub fn read_sheet(path: &Path) -> Result<Sheet> {
    let mut reader = ImageReader::open(path).map_err(|e| ConversionError::FileSystem {
        path: path.to_path_buf(),
        operation: "open",
        source: e,
    })?;
    reader.set_format(ImageFormat::Bmp);
    let decoded = reader.decode().with_path(path)?;

    log::debug!(
        "decoded {} ({}x{}, {:?})",
        path.display(),
        decoded.width(),
        decoded.height(),
        decoded.color()
    );

    Ok(Sheet {
        has_alpha: decoded.color().has_alpha(),
        pixels: decoded.to_rgba8(),
    })
}

/// Write a sheet as BMP
///
/// Sheets with alpha are written as 32-bit BMP. Opaque sheets using at most
/// 256 colors get an 8-bit palette, all others are 24-bit.
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written to `path`
pub fn write_sheet(path: &Path, pixels: &RgbaImage, has_alpha: bool) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| ConversionError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    if !has_alpha && let Some(indexed) = Indexed::of(pixels) {
        return write_indexed(path, pixels.width(), pixels.height(), &indexed);
    }

    let result = if has_alpha {
        pixels.save_with_format(path, ImageFormat::Bmp)
    } else {
        DynamicImage::ImageRgba8(pixels.clone())
            .to_rgb8()
            .save_with_format(path, ImageFormat::Bmp)
    };

    result.map_err(|e| ConversionError::ImageExport {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Palette and per-pixel indices of an opaque sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Indexed {
    /// Colors in order of first appearance, row-major from the top left
    pub palette: Vec<[u8; 3]>,
    /// One palette index per pixel, row-major
    pub indices: Vec<u8>,
}

impl Indexed {
    /// Index the colors of `pixels`, ignoring alpha
    ///
    /// Returns `None` when the sheet uses more colors than fit a palette.
    pub fn of(pixels: &RgbaImage) -> Option<Self> {
        let mut palette = Vec::new();
        let mut lookup = HashMap::new();
        let mut indices = Vec::with_capacity(pixels.width() as usize * pixels.height() as usize);

        for pixel in pixels.pixels() {
            let [r, g, b, _] = pixel.0;
            let color = [r, g, b];
            let index = if let Some(&index) = lookup.get(&color) {
                index
            } else {
                if palette.len() == MAX_PALETTE_COLORS {
                    return None;
                }
                let index = u8::try_from(palette.len()).ok()?;
                palette.push(color);
                lookup.insert(color, index);
                index
            };
            indices.push(index);
        }

        Some(Self { palette, indices })
    }
}

fn write_indexed(path: &Path, width: u32, height: u32, indexed: &Indexed) -> Result<()> {
    let file = File::create(path).map_err(|e| ConversionError::FileSystem {
        path: path.to_path_buf(),
        operation: "create",
        source: e,
    })?;
    let mut writer = BufWriter::new(file);

    BmpEncoder::new(&mut writer)
        .encode_with_palette(
            &indexed.indices,
            width,
            height,
            ExtendedColorType::L8,
            Some(&indexed.palette),
        )
        .map_err(|e| ConversionError::ImageExport {
            path: path.to_path_buf(),
            source: e,
        })?;

    writer.flush().map_err(|e| ConversionError::FileSystem {
        path: path.to_path_buf(),
        operation: "write",
        source: e,
    })
}
