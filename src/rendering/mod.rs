//! Rendering module: PNG previews of the grid

pub mod raster;

// Public small API to turn the grid into an image. The host owns the real
// presentation surface; this is for previews, the CLI and golden tests.

#[derive(Debug, Clone)]
pub struct Screenshot {
    pub width: u32,
    pub height: u32,
    pub png_data: Vec<u8>,
}

impl Screenshot {
    pub fn is_empty(&self) -> bool {
        self.png_data.is_empty()
    }
}
