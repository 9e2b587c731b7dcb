//! Image-to-grid quantization: scale any image to 32x32 and snap each pixel
//! to the nearest palette color.

use crate::grid::{Grid, CELL_COUNT, GRID_SIZE};
use crate::history::History;
use crate::palette::{self, ColorKey, Rgb};
use crate::{Error, Result};
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat};
use serde::{Deserialize, Serialize};

/// Resampling filter used when scaling the source image down to the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resample {
    Nearest,
    /// Bilinear
    #[default]
    Triangle,
    CatmullRom,
    Lanczos3,
}

impl From<Resample> for FilterType {
    fn from(r: Resample) -> Self {
        match r {
            Resample::Nearest => FilterType::Nearest,
            Resample::Triangle => FilterType::Triangle,
            Resample::CatmullRom => FilterType::CatmullRom,
            Resample::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

/// Reject uploads whose declared type is not an image.
pub fn check_mime(mime: &str) -> Result<()> {
    if mime.trim().to_ascii_lowercase().starts_with("image/") {
        Ok(())
    } else {
        Err(Error::InvalidFileType(format!("unsupported type '{}'", mime)))
    }
}

/// Identify the image container from its magic bytes, before decoding.
pub fn sniff_format(bytes: &[u8]) -> Result<ImageFormat> {
    image::guess_format(bytes)
        .map_err(|_| Error::InvalidFileType("unrecognized image data".to_string()))
}

/// Scale `img` to exactly 32x32 and map every pixel to a palette key.
///
/// Transparent pixels are composited over black.
pub fn quantize(img: &DynamicImage, filter: Resample) -> Vec<ColorKey> {
    let scaled = img
        .resize_exact(GRID_SIZE as u32, GRID_SIZE as u32, filter.into())
        .to_rgba8();

    scaled
        .pixels()
        .map(|px| {
            let [r, g, b, a] = px.0;
            let over_black = |c: u8| ((c as u16 * a as u16 + 127) / 255) as u8;
            palette::nearest(Rgb::new(over_black(r), over_black(g), over_black(b)))
        })
        .collect()
}

/// Decode image bytes into 1024 palette keys.
pub fn decode_to_keys(bytes: &[u8], filter: Resample) -> Result<Vec<ColorKey>> {
    let format = sniff_format(bytes)?;
    let img = image::load_from_memory_with_format(bytes, format)?;
    log::debug!(
        "decoded {:?} image {}x{}",
        format,
        img.width(),
        img.height()
    );
    let keys = quantize(&img, filter);
    debug_assert_eq!(keys.len(), CELL_COUNT);
    Ok(keys)
}

/// Replace the grid with the quantized image.
///
/// A bulk replacement: no per-cell history is recorded, the redo stack is
/// cleared. On error the grid is left untouched.
pub fn load_image(grid: &mut Grid, history: &mut History, bytes: &[u8], filter: Resample) -> Result<()> {
    let keys = decode_to_keys(bytes, filter)?;
    grid.replace_all(&keys);
    history.clear_redo();
    log::info!("loaded {} byte image onto grid", bytes.len());
    Ok(())
}
