//! Grid rasterizer: each cell becomes a `scale` x `scale` block of its
//! palette color.

use crate::grid::{Cell, Grid, GRID_SIZE};
use crate::rendering::Screenshot;
use crate::{Error, Result};
use image::{ImageFormat, Rgb, RgbImage};
use std::io::Cursor;

/// Largest accepted scale (32 * 64 = 2048px)
pub const MAX_SCALE: u32 = 64;

/// Render the grid as an RGB image.
///
/// Fails with `RenderError` on the first cell whose key has no palette
/// color, which is where bad imported codes surface.
pub fn rasterize_image(grid: &Grid, scale: u32) -> Result<RgbImage> {
    if scale == 0 || scale > MAX_SCALE {
        return Err(Error::RenderError(format!(
            "scale {} outside 1..={}",
            scale, MAX_SCALE
        )));
    }

    let mut colors = Vec::with_capacity(GRID_SIZE * GRID_SIZE);
    for cell in Cell::all() {
        let key = grid.get(cell);
        let rgb = key.rgb().ok_or_else(|| {
            Error::RenderError(format!(
                "cell ({}, {}) holds {} which has no palette color",
                cell.row(),
                cell.col(),
                key
            ))
        })?;
        colors.push(Rgb([rgb.r, rgb.g, rgb.b]));
    }

    let side = GRID_SIZE as u32 * scale;
    Ok(RgbImage::from_fn(side, side, |x, y| {
        let cell = Cell::new((y / scale) as usize, (x / scale) as usize);
        colors[cell.index()]
    }))
}

/// Render the grid and encode it as PNG.
pub fn rasterize(grid: &Grid, scale: u32) -> Result<Screenshot> {
    let img = rasterize_image(grid, scale)?;
    let (width, height) = img.dimensions();
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, ImageFormat::Png)
        .map_err(|e| Error::RenderError(format!("PNG encoding failed: {}", e)))?;
    Ok(Screenshot {
        width,
        height,
        png_data: out.into_inner(),
    })
}
