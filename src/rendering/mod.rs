//! Rendering pipeline for the preview card
//!
//! `layout` holds the fixed geometry, `paint` turns it into an ordered
//! command list and `raster` executes that list and encodes the PNG.

pub mod layout;
pub mod paint;
pub mod raster;

use image::RgbImage;
use log::info;
use sha2::{Digest, Sha256};

use crate::error::Result;
use crate::fonts::FontSet;
use crate::CardConfig;

/// An encoded card ready to be written out.
#[derive(Debug, Clone)]
pub struct Rendered {
    pub width: u32,
    pub height: u32,
    pub png_data: Vec<u8>,
    /// Whether the built-in bitmap face replaced the configured font
    pub fallback_used: bool,
}

impl Rendered {
    /// Hex SHA-256 of the PNG bytes.
    pub fn digest(&self) -> String {
        hex::encode(Sha256::digest(&self.png_data))
    }
}

/// Hex SHA-256 of the raw RGB8 pixels, row-major. Independent of PNG settings.
pub fn pixel_digest(canvas: &RgbImage) -> String {
    hex::encode(Sha256::digest(canvas.as_raw()))
}

/// Resolve fonts from `config` and render the card in memory.
pub fn render(config: &CardConfig) -> Result<Rendered> {
    let fonts = FontSet::resolve(&config.font_path);
    render_with_fonts(&fonts)
}

pub fn render_with_fonts(fonts: &FontSet) -> Result<Rendered> {
    let canvas = raster::compose(fonts);
    let png_data = raster::encode_png(&canvas)?;
    Ok(Rendered {
        width: canvas.width(),
        height: canvas.height(),
        png_data,
        fallback_used: fonts.is_fallback(),
    })
}

/// Render the card and write it to `config.output`.
pub fn render_to_file(config: &CardConfig) -> Result<Rendered> {
    let rendered = render(config)?;
    raster::write_png(&config.output, &rendered.png_data)?;
    info!(
        "Wrote {} ({} bytes, sha256 {})",
        config.output.display(),
        rendered.png_data.len(),
        rendered.digest()
    );
    Ok(rendered)
}
