//! Error types for the image composer

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for composer operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while composing and persisting the image
#[derive(Error, Debug)]
pub enum Error {
    /// The preferred font could not be loaded or parsed.
    ///
    /// Never escapes `FontSet::resolve`, which falls back to the built-in face.
    #[error("Font unavailable: {0}")]
    Font(String),

    /// PNG encoding failed
    #[error("PNG encoding failed: {0}")]
    Encode(String),

    /// The output file could not be written
    #[error("Failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        Error::Encode(err.to_string())
    }
}
