/// Rasterizer: runs paint commands against an RGB canvas and encodes PNG

use std::path::Path;

use font8x8::{UnicodeFonts, BASIC_FONTS};
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ExtendedColorType, ImageEncoder, Rgb, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_polygon_mut, draw_text_mut};
use imageproc::point::Point as IPoint;
use log::{debug, warn};

use super::layout::{gradient_row_color, TextLine};
use super::paint::{canvas_size, card_commands, PaintCommand};
use crate::error::{Error, Result};
use crate::fonts::{FontSet, Typeface};

/// Compose the full card. The canvas is only returned once every command ran.
pub fn compose(fonts: &FontSet) -> RgbImage {
    let (width, height) = canvas_size();
    let mut canvas = RgbImage::new(width, height);
    for cmd in card_commands() {
        apply(&mut canvas, &cmd, fonts);
    }
    canvas
}

/// Execute a single command on `canvas`, clipping to its bounds.
pub fn apply(canvas: &mut RgbImage, cmd: &PaintCommand, fonts: &FontSet) {
    match cmd {
        PaintCommand::Fill(color) => {
            debug!("fill {:?}", color);
            for px in canvas.pixels_mut() {
                *px = *color;
            }
        }
        PaintCommand::Gradient { height } => {
            debug!("gradient over {} rows", height);
            let rows = (*height).min(canvas.height());
            for y in 0..rows {
                let color = gradient_row_color(y, *height);
                for x in 0..canvas.width() {
                    canvas.put_pixel(x, y, color);
                }
            }
        }
        PaintCommand::FillCircle { circle, color } => {
            debug!("circle {:?}", circle);
            draw_filled_circle_mut(
                canvas,
                (circle.center.x, circle.center.y),
                circle.radius,
                *color,
            );
        }
        PaintCommand::FillPolygon { points, color } => {
            debug!("polygon with {} points", points.len());
            let poly: Vec<IPoint<i32>> = points.iter().map(|p| IPoint::new(p.x, p.y)).collect();
            // imageproc rejects polygons whose first and last points coincide
            if poly.len() >= 3 && poly.first() != poly.last() {
                draw_polygon_mut(canvas, &poly, *color);
            } else {
                warn!("skipping degenerate polygon {:?}", points);
            }
        }
        PaintCommand::Text(line) => {
            debug!("text {:?}", line.text);
            draw_line(canvas, line, fonts.get(line.role));
        }
    }
}

fn draw_line(canvas: &mut RgbImage, line: &TextLine, face: &Typeface) {
    match face {
        Typeface::Outline { font, scale } => draw_text_mut(
            canvas,
            line.color,
            line.origin.x,
            line.origin.y,
            *scale,
            font.as_ref(),
            line.text,
        ),
        Typeface::Bitmap { cell_scale } => draw_bitmap_text(
            canvas,
            line.color,
            line.origin.x,
            line.origin.y,
            *cell_scale,
            line.text,
        ),
    }
}

/// Draw `text` with the built-in 8x8 glyphs, each font pixel a `cell_scale` square.
pub fn draw_bitmap_text(
    canvas: &mut RgbImage,
    color: Rgb<u8>,
    x: i32,
    y: i32,
    cell_scale: u32,
    text: &str,
) {
    let cell = cell_scale.max(1) as i32;
    let advance = 8 * cell;
    let mut pen_x = x;
    for ch in text.chars() {
        let glyph = BASIC_FONTS
            .get(ch)
            .or_else(|| BASIC_FONTS.get('?'))
            .unwrap_or([0; 8]);
        for (row, bits) in glyph.iter().enumerate() {
            for col in 0..8 {
                // bit 0 is the leftmost pixel
                if bits & (1 << col) == 0 {
                    continue;
                }
                let gx = pen_x + col * cell;
                let gy = y + row as i32 * cell;
                fill_cell(canvas, gx, gy, cell, color);
            }
        }
        pen_x += advance;
    }
}

fn fill_cell(canvas: &mut RgbImage, x: i32, y: i32, size: i32, color: Rgb<u8>) {
    let (w, h) = (canvas.width() as i32, canvas.height() as i32);
    for py in y.max(0)..(y + size).min(h) {
        for px in x.max(0)..(x + size).min(w) {
            canvas.put_pixel(px as u32, py as u32, color);
        }
    }
}

/// Encode as an RGB8 PNG with the smallest-output settings.
pub fn encode_png(canvas: &RgbImage) -> Result<Vec<u8>> {
    let mut png = Vec::new();
    let encoder =
        PngEncoder::new_with_quality(&mut png, CompressionType::Best, FilterType::Adaptive);
    encoder.write_image(
        canvas.as_raw(),
        canvas.width(),
        canvas.height(),
        ExtendedColorType::Rgb8,
    )?;
    Ok(png)
}

/// Write encoded bytes to `path`, replacing any existing file.
///
/// Parent directories are not created.
pub fn write_png(path: &Path, png_data: &[u8]) -> Result<()> {
    std::fs::write(path, png_data).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}
