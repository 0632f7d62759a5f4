//! Text resources for the card
//!
//! The preferred typeface is loaded from disk once and scaled for each
//! [`FontRole`]. If it cannot be used for any reason, every role switches to
//! the built-in 8x8 bitmap face so the card still renders.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use ab_glyph::{Font, FontVec, PxScale};
use log::{debug, warn};

use crate::error::{Error, Result};

/// Helvetica as shipped with macOS
pub const DEFAULT_FONT_PATH: &str = "/System/Library/Fonts/Helvetica.ttc";

/// Each bitmap fallback glyph cell is 8x8 pixels times this factor.
pub const FALLBACK_CELL_SCALE: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontRole {
    Title,
    Subtitle,
    Description,
}

impl FontRole {
    /// Em size in pixels
    pub fn size_px(self) -> f32 {
        match self {
            FontRole::Title => 72.0,
            FontRole::Subtitle => 46.0,
            FontRole::Description => 32.0,
        }
    }
}

/// A face ready to draw at one size.
#[derive(Clone)]
pub enum Typeface {
    Outline { font: Arc<FontVec>, scale: PxScale },
    Bitmap { cell_scale: u32 },
}

impl fmt::Debug for Typeface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Typeface::Outline { scale, .. } => f
                .debug_struct("Outline")
                .field("scale_x", &scale.x)
                .field("scale_y", &scale.y)
                .finish(),
            Typeface::Bitmap { cell_scale } => f
                .debug_struct("Bitmap")
                .field("cell_scale", cell_scale)
                .finish(),
        }
    }
}

impl Typeface {
    fn outline(font: &Arc<FontVec>, size_px: f32) -> Self {
        Typeface::Outline {
            font: Arc::clone(font),
            scale: em_to_px_scale(font, size_px),
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Typeface::Bitmap { .. })
    }
}

/// `PxScale` is the ascent-to-descent height; convert so the em box is `size_px`.
fn em_to_px_scale(font: &FontVec, size_px: f32) -> PxScale {
    match font.units_per_em() {
        Some(upem) if upem > 0.0 => PxScale::from(size_px * font.height_unscaled() / upem),
        _ => PxScale::from(size_px),
    }
}

/// Faces for all three text roles, resolved together.
#[derive(Debug, Clone)]
pub struct FontSet {
    pub title: Typeface,
    pub subtitle: Typeface,
    pub description: Typeface,
}

impl FontSet {
    /// Load `path` for every role, or fall back to the bitmap face for all of them.
    pub fn resolve(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match load_font(path) {
            Ok(font) => {
                let font = Arc::new(font);
                debug!("Loaded font {}", path.display());
                FontSet {
                    title: Typeface::outline(&font, FontRole::Title.size_px()),
                    subtitle: Typeface::outline(&font, FontRole::Subtitle.size_px()),
                    description: Typeface::outline(&font, FontRole::Description.size_px()),
                }
            }
            Err(e) => {
                warn!("{}; using built-in bitmap font", e);
                FontSet::fallback()
            }
        }
    }

    pub fn fallback() -> Self {
        let face = Typeface::Bitmap {
            cell_scale: FALLBACK_CELL_SCALE,
        };
        FontSet {
            title: face.clone(),
            subtitle: face.clone(),
            description: face,
        }
    }

    pub fn get(&self, role: FontRole) -> &Typeface {
        match role {
            FontRole::Title => &self.title,
            FontRole::Subtitle => &self.subtitle,
            FontRole::Description => &self.description,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.title.is_fallback()
    }
}

/// Read a TrueType/OpenType file. Collections (`.ttc`) yield their first face.
pub fn load_font(path: &Path) -> Result<FontVec> {
    let data = std::fs::read(path)
        .map_err(|e| Error::Font(format!("cannot read {}: {}", path.display(), e)))?;
    FontVec::try_from_vec_and_index(data, 0)
        .map_err(|e| Error::Font(format!("cannot parse {}: {}", path.display(), e)))
}
