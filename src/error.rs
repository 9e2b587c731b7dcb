//! Error types for the pixel editor

use thiserror::Error;

/// Result type alias for editor operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the pixel editor
#[derive(Error, Debug)]
pub enum Error {
    /// Upload was not an image (rejected before decoding)
    #[error("Not a valid image file: {0}")]
    InvalidFileType(String),

    /// Image bytes could not be decoded
    #[error("Failed to decode image: {0}")]
    DecodeError(String),

    /// Cell coordinates outside the 32x32 grid
    #[error("Cell ({row}, {col}) is outside the grid")]
    InvalidCell { row: usize, col: usize },

    /// Failed to write to the clipboard
    #[error("Clipboard write failed: {0}")]
    ClipboardError(String),

    /// Failed to render the grid (e.g. a key with no palette color)
    #[error("Rendering failed: {0}")]
    RenderError(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// Filesystem error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        match err {
            image::ImageError::Unsupported(e) => Error::InvalidFileType(e.to_string()),
            other => Error::DecodeError(other.to_string()),
        }
    }
}
